//! Error types for the Person actor.

use thiserror::Error;

/// Errors that can occur during person operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonError {
    /// The buyer's balance does not strictly exceed the price.
    #[error("Not enough money: balance {balance}, price {price}")]
    InsufficientFunds { balance: u32, price: u32 },

    /// The person holds no drink at this position.
    #[error("No drink in slot {0}")]
    NoSuchDrink(usize),

    /// Buyer and seller are the same person.
    #[error("A person cannot trade with themselves")]
    SameParty,

    /// The name provided is invalid.
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// The requested person was not found.
    #[error("Person not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
