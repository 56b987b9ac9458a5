//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::framework::ResourceClient) to a
//! [`ResourceActor`](crate::framework::ResourceActor), each carrying a one-shot
//! channel for the reply.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`].
/// - **Get**: returns a snapshot of one entity.
/// - **List**: returns snapshots of every entity, ordered by creation.
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Action**: runs a custom [`ActorEntity::Action`] atomically.
///
/// There is no delete: entities live as long as their actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
