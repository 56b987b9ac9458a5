//! Custom actions for the Person actor.
//!
//! These are the only ways a person's balance, drinks, or drink volumes change.
//! They are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{Beverage, Person, Sip};

/// Custom actions for Person entities.
#[derive(Debug, Clone)]
pub enum PersonAction {
    /// Buy `beverage` from `seller`: debit the price and take the drink.
    ///
    /// # Errors
    /// Fails with `InsufficientFunds` unless balance > price.
    Purchase { seller: Person, beverage: Beverage },
    /// Take one sip from the drink at `slot` (0 = first bought).
    Sip { slot: usize },
}

/// Results from PersonActions - variants match 1:1 with PersonAction
#[derive(Debug, Clone, PartialEq)]
pub enum PersonActionResult {
    /// Balance left after paying.
    Purchase { balance: u32 },
    /// Effect of the sip and the drink as it is now.
    Sip { sip: Sip, beverage: Beverage },
}
