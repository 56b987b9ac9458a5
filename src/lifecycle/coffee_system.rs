use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::clients::PersonClient;
use crate::config::SystemConfig;
use crate::protocol::PurchaseDesk;

/// Everything needed for a coffee run, running.
///
/// Holds the client for the person actor and the purchase desk. The desk's
/// think-time worker keeps its own person client, so the actor outlives every
/// scheduled purchase.
///
/// ```no_run
/// # use coffee_run::config::SystemConfig;
/// # use coffee_run::lifecycle::CoffeeSystem;
/// # use coffee_run::model::PersonCreate;
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let system = CoffeeSystem::new(SystemConfig::default());
/// let simon = system.persons.create_person(PersonCreate::named("Simon")).await?;
/// // ... request drinks through system.desk ...
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct CoffeeSystem {
    pub persons: PersonClient,
    pub desk: PurchaseDesk,
    handles: Vec<JoinHandle<()>>,
}

impl CoffeeSystem {
    /// Spawns the person actor and the think-time worker.
    ///
    /// Must be called from within a Tokio runtime. A zero mailbox capacity is raised
    /// to one.
    pub fn new(config: SystemConfig) -> Self {
        let capacity = if config.mailbox_capacity == 0 {
            warn!("Mailbox capacity 0 raised to 1");
            1
        } else {
            config.mailbox_capacity
        };
        let (person_actor, persons) = crate::person_actor::new(capacity);
        let person_handle = tokio::spawn(person_actor.run(()));

        let (desk, worker) = PurchaseDesk::new(persons.clone(), &config.protocol, capacity);
        let worker_handle = tokio::spawn(worker.run());

        info!(
            think_time = ?config.protocol.think_time,
            surface_insufficient_funds = config.protocol.surface_insufficient_funds,
            "Coffee system started"
        );
        Self {
            persons,
            desk,
            // Worker first: it holds a person client until its queue drains.
            handles: vec![worker_handle, person_handle],
        }
    }

    /// Closes the desk and the person actor, then waits for both tasks.
    ///
    /// Purchases already scheduled still run before the worker stops.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down coffee system...");
        drop(self.desk);
        drop(self.persons);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Coffee system shutdown complete.");
        Ok(())
    }
}
