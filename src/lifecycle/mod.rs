//! Runtime orchestration: starting, wiring and shutting down the actors.
//!
//! - [`CoffeeSystem`] - owns the person actor and the think-time worker
//! - [`setup_tracing`] - initializes logging

pub mod coffee_system;
pub mod tracing;

pub use coffee_system::*;
pub use tracing::*;
