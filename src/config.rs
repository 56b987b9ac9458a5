//! # Configuration
//!
//! Plain structs with defaults for a four-second think-time. Overrides
//! come from the environment:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `COFFEE_THINK_TIME_MS` | [`ProtocolConfig::think_time`] | `4000` |
//! | `COFFEE_MAILBOX_CAPACITY` | [`SystemConfig::mailbox_capacity`] | `32` |
//! | `COFFEE_SURFACE_FUNDS_ERRORS` | [`ProtocolConfig::surface_insufficient_funds`] | `false` |

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const THINK_TIME_VAR: &str = "COFFEE_THINK_TIME_MS";
pub const MAILBOX_CAPACITY_VAR: &str = "COFFEE_MAILBOX_CAPACITY";
pub const SURFACE_FUNDS_VAR: &str = "COFFEE_SURFACE_FUNDS_ERRORS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Settings for the purchase protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// How long an agreeable responder ponders before buying.
    pub think_time: Duration,
    /// When `true`, a purchase that fails for lack of funds during think-time is
    /// delivered to the requester as a rejection instead of being swallowed.
    pub surface_insufficient_funds: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            think_time: Duration::from_millis(4000),
            surface_insufficient_funds: false,
        }
    }
}

/// Settings for the whole system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Capacity of each actor mailbox.
    pub mailbox_capacity: usize,
    pub protocol: ProtocolConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            protocol: ProtocolConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = parse::<u64>(&lookup, THINK_TIME_VAR)? {
            config.protocol.think_time = Duration::from_millis(ms);
        }
        if let Some(capacity) = parse::<usize>(&lookup, MAILBOX_CAPACITY_VAR)? {
            if capacity == 0 {
                return Err(ConfigError::Zero(MAILBOX_CAPACITY_VAR));
            }
            config.mailbox_capacity = capacity;
        }
        if let Some(surface) = parse::<bool>(&lookup, SURFACE_FUNDS_VAR)? {
            config.protocol.surface_insufficient_funds = surface;
        }
        Ok(config)
    }

    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.protocol.think_time = think_time;
        self
    }

    pub fn surfacing_insufficient_funds(mut self) -> Self {
        self.protocol.surface_insufficient_funds = true;
        self
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SystemConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.protocol.think_time, Duration::from_secs(4));
        assert!(!config.protocol.surface_insufficient_funds);
        assert_eq!(config.mailbox_capacity, 32);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (THINK_TIME_VAR, "250"),
            (MAILBOX_CAPACITY_VAR, " 8 "),
            (SURFACE_FUNDS_VAR, "true"),
        ]))
        .unwrap();
        assert_eq!(config.protocol.think_time, Duration::from_millis(250));
        assert_eq!(config.mailbox_capacity, 8);
        assert!(config.protocol.surface_insufficient_funds);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = SystemConfig::from_lookup(lookup_from(&[(THINK_TIME_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: THINK_TIME_VAR,
                value: "soon".to_string()
            }
        );

        let err = SystemConfig::from_lookup(lookup_from(&[(MAILBOX_CAPACITY_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero(MAILBOX_CAPACITY_VAR));
    }
}
