//! The think-time worker: runs each accepted request's purchase once its delay is up.
//!
//! Jobs are served strictly in the order they were scheduled. Every job's due instant
//! is fixed when it is scheduled, so with one fixed think-time the first scheduled
//! request is always the first to resolve. There is no cancellation: once the desk is
//! closed the worker still drains every queued job before stopping.

use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use super::outcome::{Outcome, PurchaseError};
use crate::clients::PersonClient;
use crate::model::{Beverage, Person, PersonId};
use crate::person_actor::PersonError;

/// One accepted request waiting for its think-time to pass.
#[derive(Debug)]
pub(crate) struct ThinkJob {
    pub due: Instant,
    pub requester: PersonId,
    pub responder: Person,
    pub beverage: Beverage,
    pub respond_to: oneshot::Sender<Outcome>,
}

/// Background task that resolves accepted purchase requests.
pub struct ThinkTimeWorker {
    receiver: mpsc::Receiver<ThinkJob>,
    persons: PersonClient,
    surface_insufficient_funds: bool,
}

impl ThinkTimeWorker {
    pub(crate) fn new(
        receiver: mpsc::Receiver<ThinkJob>,
        persons: PersonClient,
        surface_insufficient_funds: bool,
    ) -> Self {
        Self {
            receiver,
            persons,
            surface_insufficient_funds,
        }
    }

    /// Runs until every [`PurchaseDesk`](super::PurchaseDesk) clone is dropped and the
    /// queue is empty.
    pub async fn run(mut self) {
        info!("Think-time worker started");
        let mut resolved = 0usize;
        while let Some(job) = self.receiver.recv().await {
            sleep_until(job.due).await;
            self.resolve(job).await;
            resolved += 1;
        }
        info!(resolved, "Think-time worker stopped");
    }

    async fn resolve(&self, job: ThinkJob) {
        let ThinkJob {
            requester,
            responder,
            beverage,
            respond_to,
            ..
        } = job;
        let seller = responder.name.clone();
        let kind = beverage.kind.clone();
        debug!(%requester, %seller, %kind, "Think-time over");

        let result = self.persons.purchase(requester, responder, beverage).await;
        let outcome = match result {
            Ok(balance) => {
                info!(%requester, %seller, %kind, balance, "Fulfilled");
                Outcome::Fulfilled
            }
            Err(e @ PersonError::InsufficientFunds { .. }) if !self.surface_insufficient_funds => {
                // Absorbed: the requester is never notified.
                warn!(%requester, %seller, %kind, error = %e, "Caught inside think-time");
                return;
            }
            Err(e) => {
                warn!(%requester, %seller, %kind, error = %e, "Rejected");
                Outcome::Rejected(PurchaseError::from(e))
            }
        };
        let _ = respond_to.send(outcome);
    }
}
