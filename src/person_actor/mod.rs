//! # Person Actor
//!
//! Owns every [`Person`] and applies purchases and sips one message at a time,
//! so two purchases against the same person can never interleave.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Person`]
//! - [`error`] - [`PersonError`]
//! - [`actions`] - [`PersonAction`] and [`PersonActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use coffee_run::person_actor;
//! use coffee_run::model::PersonCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = person_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_person(PersonCreate::named("Simon")).await?;
//!     assert_eq!(client.balance(id).await?, 10);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PersonClient;
use crate::framework::ResourceActor;
use crate::model::Person;

/// Creates a new Person actor and its client.
///
/// # Panics
/// If `mailbox_capacity` is zero.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Person>, PersonClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, PersonClient::new(generic_client))
}
