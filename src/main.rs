use coffee_run::config::SystemConfig;
use coffee_run::lifecycle::{setup_tracing, CoffeeSystem};
use coffee_run::model::{pub_session, BeverageSpec, PersonCreate};
use coffee_run::scenario::{coffee_run, RunEnding};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;

    match pub_session(false, 17.1) {
        Ok(()) => info!("Heading to the pub"),
        Err(e) => warn!(error = %e, "No pub today"),
    }

    let system = CoffeeSystem::new(config);
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon"))
        .await
        .map_err(|e| e.to_string())?;
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate"))
        .await
        .map_err(|e| e.to_string())?;

    let order = BeverageSpec::new("capacino", 200, 2);
    let report = coffee_run(&system.desk, &system.persons, nate, simon, &order).await;

    for step in &report.steps {
        info!(?step, "Step");
    }
    match &report.ending {
        RunEnding::Completed => info!("Everyone has a coffee"),
        RunEnding::Caught(e) => warn!(error = %e, "Coffee run failed"),
        RunEnding::Stalled => warn!("Coffee run stalled"),
    }
    for id in [simon, nate] {
        let person = system.persons.person(id).await.map_err(|e| e.to_string())?;
        info!(name = %person.name, balance = person.balance, drinks = person.drinks.len(), "Final state");
    }

    system.shutdown().await
}
