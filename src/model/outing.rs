//! After-work plans: the pub only opens for you on a weekend evening.

use thiserror::Error;
use tracing::info;

/// Earliest hour (exclusive, 24h clock) a pub session may start.
pub const PUB_OPENS_AFTER: f64 = 17.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutingError {
    #[error("Not the weekend")]
    NotWeekend,
    #[error("Not time: {hour} is not after {}", PUB_OPENS_AFTER)]
    TooEarly { hour: f64 },
}

/// Decides whether a pub session happens.
///
/// `weekend` is checked first; only then is `hour` compared.
pub fn pub_session(weekend: bool, hour: f64) -> Result<(), OutingError> {
    if !weekend {
        return Err(OutingError::NotWeekend);
    }
    if hour <= PUB_OPENS_AFTER {
        return Err(OutingError::TooEarly { hour });
    }
    info!(hour, "Pub time!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_evening_is_pub_time() {
        assert_eq!(pub_session(true, 17.1), Ok(()));
    }

    #[test]
    fn test_weekday_is_rejected_whatever_the_hour() {
        assert_eq!(pub_session(false, 17.1), Err(OutingError::NotWeekend));
        assert_eq!(pub_session(false, 9.0), Err(OutingError::NotWeekend));
    }

    #[test]
    fn test_five_sharp_is_too_early() {
        assert_eq!(pub_session(true, 17.0), Err(OutingError::TooEarly { hour: 17.0 }));
        assert_eq!(
            pub_session(true, 12.5).unwrap_err().to_string(),
            "Not time: 12.5 is not after 17"
        );
    }
}
