use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::person_actor::PersonError;

/// Why a purchase request did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The responder is not taking requests. Always reaches the requester.
    #[error("{responder} says: no coffee, go away")]
    ResponderUnavailable { responder: String },

    /// Requester and responder are the same person.
    #[error("A person cannot ask themselves for a drink")]
    SameParty,

    /// The think-time worker has stopped; nothing can be scheduled.
    #[error("Purchase desk is closed")]
    Closed,

    #[error(transparent)]
    Person(#[from] PersonError),
}

/// How a purchase request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The requester paid and now holds the beverage.
    Fulfilled,
    Rejected(PurchaseError),
}

/// A request that has been made but whose outcome may not be known yet.
///
/// This is a one-shot notification: [`PendingPurchase::outcome`] yields the outcome
/// once, or `None` if the request was absorbed (a lack of funds caught during
/// think-time). An absorbed request never notifies anyone.
#[derive(Debug)]
pub struct PendingPurchase {
    /// `None` once the notification has been spent.
    receiver: Option<oneshot::Receiver<Outcome>>,
    scheduled: bool,
}

impl PendingPurchase {
    /// A request that was decided on the spot, with nothing scheduled.
    pub(crate) fn settled(outcome: Outcome) -> Self {
        let (sender, receiver) = oneshot::channel();
        let _ = sender.send(outcome);
        Self {
            receiver: Some(receiver),
            scheduled: false,
        }
    }

    /// A request waiting on think-time; `receiver` fires when it resolves.
    pub(crate) fn scheduled(receiver: oneshot::Receiver<Outcome>) -> Self {
        Self {
            receiver: Some(receiver),
            scheduled: true,
        }
    }

    /// Whether a delayed evaluation was scheduled for this request.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Returns the outcome if it is already known, without waiting.
    ///
    /// A delivered outcome is consumed: a later [`PendingPurchase::outcome`] yields `None`.
    pub fn try_outcome(&mut self) -> Option<Outcome> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.receiver = None;
                Some(outcome)
            }
            Err(TryRecvError::Closed) => {
                self.receiver = None;
                None
            }
            Err(TryRecvError::Empty) => None,
        }
    }

    /// Waits for the outcome. `None` means the request was absorbed or the
    /// outcome was already taken by [`PendingPurchase::try_outcome`].
    pub async fn outcome(self) -> Option<Outcome> {
        self.receiver?.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settled_outcome_is_delivered_once() {
        let mut pending = PendingPurchase::settled(Outcome::Fulfilled);
        assert!(!pending.is_scheduled());
        assert_eq!(pending.try_outcome(), Some(Outcome::Fulfilled));
        assert_eq!(pending.try_outcome(), None);
        assert_eq!(pending.outcome().await, None);
    }

    #[tokio::test]
    async fn test_unanswered_request_yields_none_after_polling() {
        let (sender, receiver) = oneshot::channel();
        let mut pending = PendingPurchase::scheduled(receiver);
        assert_eq!(pending.try_outcome(), None);

        // Dropped without an answer, as an absorbed request is.
        drop(sender);
        assert_eq!(pending.try_outcome(), None);
        assert_eq!(pending.outcome().await, None);
    }

    #[tokio::test]
    async fn test_outcome_waits_after_an_empty_poll() {
        let (sender, receiver) = oneshot::channel();
        let mut pending = PendingPurchase::scheduled(receiver);
        assert_eq!(pending.try_outcome(), None);

        sender
            .send(Outcome::Rejected(PurchaseError::SameParty))
            .unwrap();
        assert_eq!(
            pending.outcome().await,
            Some(Outcome::Rejected(PurchaseError::SameParty))
        );
    }
}
