//! Pure data structures and the synchronous rules that act on them.
//!
//! - [`Beverage`] / [`BeverageSpec`]: drinks and how to brew them.
//! - [`Person`]: implements [`ActorEntity`](crate::framework::ActorEntity) via [`crate::person_actor`].
//! - [`execute_transfer`]: the purchase rule.
//! - [`pub_session`]: the weekend-evening guard.

pub mod beverage;
pub mod outing;
pub mod person;
pub mod transfer;

pub use beverage::*;
pub use outing::*;
pub use person::*;
pub use transfer::*;
