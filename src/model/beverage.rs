use serde::{Deserialize, Serialize};
use tracing::info;

/// Volume removed by one sip.
pub const SIP_VOLUME: u32 = 20;

/// A drink with a finite volume that goes down one sip at a time.
///
/// Depletion is derived: a beverage is empty exactly when `volume == 0`. An empty
/// beverage stays in its owner's collection; sipping it again changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beverage {
    pub kind: String,
    pub volume: u32,
    pub price: u32,
}

/// What a single sip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sip {
    /// Volume went down and some is left.
    Sipped { remaining: u32 },
    /// This sip took the last of it (possibly less than [`SIP_VOLUME`]).
    Finished,
    /// Nothing left to drink; no state changed.
    AlreadyEmpty,
}

impl Beverage {
    pub fn new(kind: impl Into<String>, volume: u32, price: u32) -> Self {
        Self {
            kind: kind.into(),
            volume,
            price,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.volume == 0
    }

    /// Takes one sip and reports the effect.
    pub fn take_sip(&mut self) -> Sip {
        if self.is_empty() {
            info!(kind = %self.kind, "All drunk");
            return Sip::AlreadyEmpty;
        }
        self.volume = self.volume.saturating_sub(SIP_VOLUME);
        if self.is_empty() {
            info!(kind = %self.kind, "Empty coffee");
            Sip::Finished
        } else {
            info!(kind = %self.kind, remaining = self.volume, "Ahh");
            Sip::Sipped {
                remaining: self.volume,
            }
        }
    }

    /// Takes one sip and returns the beverage, so sips can be chained.
    ///
    /// ```
    /// use coffee_run::model::Beverage;
    ///
    /// let mut cup = Beverage::new("espresso", 50, 2);
    /// cup.sip().sip();
    /// assert_eq!(cup.volume, 10);
    /// ```
    pub fn sip(&mut self) -> &mut Self {
        self.take_sip();
        self
    }
}

/// A drink order: what to brew when a purchase goes through.
///
/// Defaults to a 50 ml espresso at 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeverageSpec {
    pub kind: String,
    pub volume: u32,
    pub price: u32,
}

impl Default for BeverageSpec {
    fn default() -> Self {
        Self {
            kind: "espresso".to_string(),
            volume: 50,
            price: 2,
        }
    }
}

impl BeverageSpec {
    pub fn new(kind: impl Into<String>, volume: u32, price: u32) -> Self {
        Self {
            kind: kind.into(),
            volume,
            price,
        }
    }

    /// A fresh, full beverage made to this spec.
    pub fn brew(&self) -> Beverage {
        Beverage::new(self.kind.clone(), self.volume, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drink_until_empty(beverage: &mut Beverage) -> usize {
        let mut sips = 0;
        while !beverage.is_empty() {
            beverage.take_sip();
            sips += 1;
        }
        sips
    }

    #[test]
    fn test_default_spec_is_a_small_espresso() {
        let cup = BeverageSpec::default().brew();
        assert_eq!(cup, Beverage::new("espresso", 50, 2));
        assert!(!cup.is_empty());
    }

    #[test]
    fn test_even_volume_takes_volume_over_sip_sips() {
        let mut cup = Beverage::new("capacino", 200, 2);
        assert_eq!(drink_until_empty(&mut cup), 10);
        assert_eq!(cup.volume, 0);
    }

    #[test]
    fn test_partial_last_sip_clamps_to_zero() {
        let mut cup = Beverage::new("espresso", 50, 2);
        assert_eq!(cup.take_sip(), Sip::Sipped { remaining: 30 });
        assert_eq!(cup.take_sip(), Sip::Sipped { remaining: 10 });
        assert_eq!(cup.take_sip(), Sip::Finished);
        assert_eq!(cup.volume, 0);
        assert!(cup.is_empty());
    }

    #[test]
    fn test_sipping_empty_beverage_is_a_no_op() {
        let mut cup = Beverage::new("espresso", 50, 2);
        drink_until_empty(&mut cup);
        let before = cup.clone();
        for _ in 0..3 {
            assert_eq!(cup.take_sip(), Sip::AlreadyEmpty);
        }
        assert_eq!(cup, before);
    }

    #[test]
    fn test_every_volume_eventually_depletes() {
        for volume in 1..=130 {
            let mut cup = Beverage::new("drip", volume, 1);
            let sips = drink_until_empty(&mut cup);
            assert_eq!(sips as u32, volume.div_ceil(SIP_VOLUME), "volume {volume}");
            assert_eq!(cup.take_sip(), Sip::AlreadyEmpty);
        }
    }

    #[test]
    fn test_zero_volume_starts_empty() {
        let mut cup = Beverage::new("nothing", 0, 0);
        assert!(cup.is_empty());
        assert_eq!(cup.take_sip(), Sip::AlreadyEmpty);
    }

    #[test]
    fn test_sip_chains() {
        let mut cup = Beverage::new("capacino", 200, 2);
        cup.sip().sip().sip();
        assert_eq!(cup.volume, 140);
    }
}
