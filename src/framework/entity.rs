//! # ActorEntity Trait
//!
//! The contract a resource type implements to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
//! Associated types pin down the id, the creation and update payloads, the custom
//! actions and their results, the injected context and the error type, so a
//! `PersonCreate` can never be sent to an actor that manages something else.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//!
//! Entities are never deleted: once created they live until the actor shuts down.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other actors. The `Context` type is
/// injected into every hook at `run()` time ("late binding"), not at construction.
///
/// # Atomic actions
/// The actor snapshots the entity before calling [`ActorEntity::handle_action`] and
/// restores the snapshot if the action returns an error. An action therefore either
/// applies in full or not at all, even if it mutated `self` before failing.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Short label used in log fields (e.g. `"Person"`).
    const KIND: &'static str;

    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Purchase`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum covers every operation of the actor.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
