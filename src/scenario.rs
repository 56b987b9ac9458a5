//! # Coffee Run
//!
//! Two people buy each other a drink, strictly one step after another:
//!
//! 1. `first` asks `second` for a drink
//! 2. `first` sips it and says thanks
//! 3. `second` asks `first` for a drink
//! 4. `second` sips it
//!
//! A delivered rejection at any step ends the run in a single place
//! ([`RunEnding::Caught`]). An absorbed request ends it silently
//! ([`RunEnding::Stalled`]): nothing after it runs.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::clients::PersonClient;
use crate::model::{BeverageSpec, Person, PersonId, Sip};
use crate::protocol::{Outcome, PurchaseDesk, PurchaseError};

/// One completed step of a coffee run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunStep {
    Fulfilled { requester: String, responder: String },
    Sipped { person: String, sip: Sip },
    Thanked { from: String, to: String },
}

/// How a coffee run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEnding {
    Completed,
    Caught(PurchaseError),
    /// A request was absorbed and never answered.
    Stalled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeRunReport {
    pub steps: Vec<RunStep>,
    pub ending: RunEnding,
}

/// Runs the coffee run between `first` and `second`, both ordering `order`.
#[instrument(skip(desk, persons, order), fields(kind = %order.kind))]
pub async fn coffee_run(
    desk: &PurchaseDesk,
    persons: &PersonClient,
    first: PersonId,
    second: PersonId,
    order: &BeverageSpec,
) -> CoffeeRunReport {
    let mut steps = Vec::new();
    let ending = match run_steps(desk, persons, first, second, order, &mut steps).await {
        Ok(Some(())) => RunEnding::Completed,
        Ok(None) => {
            warn!("Coffee run stalled: a request was never answered");
            RunEnding::Stalled
        }
        Err(e) => {
            warn!(error = %e, "Caught");
            RunEnding::Caught(e)
        }
    };
    info!(steps = steps.len(), ?ending, "Coffee run over");
    CoffeeRunReport { steps, ending }
}

/// `Ok(None)` means a request was absorbed.
async fn run_steps(
    desk: &PurchaseDesk,
    persons: &PersonClient,
    first: PersonId,
    second: PersonId,
    order: &BeverageSpec,
    steps: &mut Vec<RunStep>,
) -> Result<Option<()>, PurchaseError> {
    let a = persons.person(first).await?;
    let b = persons.person(second).await?;

    if !buy(desk, &a, &b, order, steps).await? {
        return Ok(None);
    }
    sip_first(persons, &a, steps).await?;
    info!("Thanks {}", b.name);
    steps.push(RunStep::Thanked {
        from: a.name.clone(),
        to: b.name.clone(),
    });

    if !buy(desk, &b, &a, order, steps).await? {
        return Ok(None);
    }
    sip_first(persons, &b, steps).await?;
    Ok(Some(()))
}

/// Returns `false` when the request was absorbed.
async fn buy(
    desk: &PurchaseDesk,
    requester: &Person,
    responder: &Person,
    order: &BeverageSpec,
    steps: &mut Vec<RunStep>,
) -> Result<bool, PurchaseError> {
    let pending = desk
        .request_beverage(requester.id, responder.id, order)
        .await?;
    match pending.outcome().await {
        Some(Outcome::Fulfilled) => {
            steps.push(RunStep::Fulfilled {
                requester: requester.name.clone(),
                responder: responder.name.clone(),
            });
            Ok(true)
        }
        Some(Outcome::Rejected(e)) => Err(e),
        None => Ok(false),
    }
}

async fn sip_first(
    persons: &PersonClient,
    person: &Person,
    steps: &mut Vec<RunStep>,
) -> Result<(), PurchaseError> {
    let (sip, _) = persons.sip(person.id, 0).await?;
    steps.push(RunStep::Sipped {
        person: person.name.clone(),
        sip,
    });
    Ok(())
}
