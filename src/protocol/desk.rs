use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{info, instrument, warn};

use super::outcome::{Outcome, PendingPurchase, PurchaseError};
use super::think_time::{ThinkJob, ThinkTimeWorker};
use crate::clients::PersonClient;
use crate::config::ProtocolConfig;
use crate::model::{BeverageSpec, PersonId};

/// Where people ask each other for drinks.
///
/// Cheap to clone. The paired [`ThinkTimeWorker`] stops once every clone is dropped.
#[derive(Clone)]
pub struct PurchaseDesk {
    persons: PersonClient,
    jobs: mpsc::Sender<ThinkJob>,
    think_time: Duration,
}

impl PurchaseDesk {
    /// Creates a desk and the worker that must be spawned to serve it.
    ///
    /// # Panics
    /// If `queue_capacity` is zero.
    pub fn new(
        persons: PersonClient,
        config: &ProtocolConfig,
        queue_capacity: usize,
    ) -> (Self, ThinkTimeWorker) {
        let (jobs, receiver) = mpsc::channel(queue_capacity);
        let worker = ThinkTimeWorker::new(
            receiver,
            persons.clone(),
            config.surface_insufficient_funds,
        );
        let desk = Self {
            persons,
            jobs,
            think_time: config.think_time,
        };
        (desk, worker)
    }

    /// `requester` asks `responder` for a drink made to `order`.
    ///
    /// - Unavailable responder: returns at once with a settled
    ///   `Rejected(ResponderUnavailable)`; nothing is scheduled.
    /// - Agreeable responder: schedules the purchase after the think-time. The
    ///   requester pays and receives the drink (`Fulfilled`). If the requester cannot
    ///   afford it, the failure is logged and absorbed unless
    ///   [`ProtocolConfig::surface_insufficient_funds`] is set.
    ///
    /// # Errors
    /// `SameParty` for a self-request, `Person(NotFound)` for unknown ids, `Closed`
    /// when the worker is gone.
    #[instrument(skip(self, order), fields(kind = %order.kind))]
    pub async fn request_beverage(
        &self,
        requester: PersonId,
        responder: PersonId,
        order: &BeverageSpec,
    ) -> Result<PendingPurchase, PurchaseError> {
        if requester == responder {
            return Err(PurchaseError::SameParty);
        }
        let asker = self.persons.person(requester).await?;
        let asked = self.persons.person(responder).await?;
        info!(
            requester = %asker.name,
            responder = %asked.name,
            "Can I have a {} please",
            order.kind
        );

        if !asked.is_available() {
            warn!(responder = %asked.name, "Responder unavailable");
            return Ok(PendingPurchase::settled(Outcome::Rejected(
                PurchaseError::ResponderUnavailable {
                    responder: asked.name,
                },
            )));
        }

        let (respond_to, receiver) = oneshot::channel();
        let job = ThinkJob {
            due: Instant::now() + self.think_time,
            requester,
            responder: asked,
            beverage: order.brew(),
            respond_to,
        };
        self.jobs.send(job).await.map_err(|_| PurchaseError::Closed)?;
        info!(think_time = ?self.think_time, "Pondering...");
        Ok(PendingPurchase::scheduled(receiver))
    }
}
