use std::time::Duration;

use coffee_run::config::SystemConfig;
use coffee_run::lifecycle::CoffeeSystem;
use coffee_run::model::{BeverageSpec, Disposition, PersonCreate, Sip};
use coffee_run::protocol::PurchaseError;
use coffee_run::scenario::{coffee_run, RunEnding, RunStep};

fn capacino() -> BeverageSpec {
    BeverageSpec::new("capacino", 200, 2)
}

fn quick_system() -> CoffeeSystem {
    CoffeeSystem::new(SystemConfig::default().with_think_time(Duration::from_millis(20)))
}

#[tokio::test]
async fn test_coffee_run_completes() {
    let system = quick_system();
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon"))
        .await
        .unwrap();
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate"))
        .await
        .unwrap();

    let report = coffee_run(&system.desk, &system.persons, simon, nate, &capacino()).await;

    assert_eq!(report.ending, RunEnding::Completed);
    assert_eq!(
        report.steps,
        vec![
            RunStep::Fulfilled {
                requester: "Simon".into(),
                responder: "Nate".into()
            },
            RunStep::Sipped {
                person: "Simon".into(),
                sip: Sip::Sipped { remaining: 180 }
            },
            RunStep::Thanked {
                from: "Simon".into(),
                to: "Nate".into()
            },
            RunStep::Fulfilled {
                requester: "Nate".into(),
                responder: "Simon".into()
            },
            RunStep::Sipped {
                person: "Nate".into(),
                sip: Sip::Sipped { remaining: 180 }
            },
        ]
    );

    for id in [simon, nate] {
        let person = system.persons.person(id).await.unwrap();
        assert_eq!(person.balance, 8);
        assert_eq!(person.drinks.len(), 1);
        assert_eq!(person.drinks[0].volume, 180);
    }

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unavailable_responder_is_caught_before_any_sip() {
    let system = quick_system();
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon"))
        .await
        .unwrap();
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate").with_disposition(Disposition::Unavailable))
        .await
        .unwrap();

    let report = coffee_run(&system.desk, &system.persons, simon, nate, &capacino()).await;

    assert!(report.steps.is_empty());
    assert_eq!(
        report.ending,
        RunEnding::Caught(PurchaseError::ResponderUnavailable {
            responder: "Nate".into()
        })
    );
    assert_eq!(system.persons.balance(simon).await.unwrap(), 10);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unavailable_first_person_refuses_the_return_request() {
    let system = quick_system();
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon").with_disposition(Disposition::Unavailable))
        .await
        .unwrap();
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate"))
        .await
        .unwrap();

    let report = coffee_run(&system.desk, &system.persons, simon, nate, &capacino()).await;

    // Simon asked first and got a drink; Nate's request to Simon was refused.
    assert_eq!(report.steps.len(), 3);
    assert_eq!(
        report.ending,
        RunEnding::Caught(PurchaseError::ResponderUnavailable {
            responder: "Simon".into()
        })
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_absorbed_request_stalls_the_run() {
    let system = quick_system();
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon").with_balance(1))
        .await
        .unwrap();
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate"))
        .await
        .unwrap();

    let report = coffee_run(&system.desk, &system.persons, simon, nate, &capacino()).await;

    assert!(report.steps.is_empty());
    assert_eq!(report.ending, RunEnding::Stalled);
    assert_eq!(system.persons.balance(nate).await.unwrap(), 10);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_later_created_person_can_ask_first() {
    let system = quick_system();
    let simon = system
        .persons
        .create_person(PersonCreate::named("Simon"))
        .await
        .unwrap();
    let nate = system
        .persons
        .create_person(PersonCreate::named("Nate"))
        .await
        .unwrap();

    let report = coffee_run(&system.desk, &system.persons, nate, simon, &capacino()).await;

    assert_eq!(report.ending, RunEnding::Completed);
    assert_eq!(
        report.steps.first(),
        Some(&RunStep::Fulfilled {
            requester: "Nate".into(),
            responder: "Simon".into()
        })
    );
    assert_eq!(
        report.steps.get(2),
        Some(&RunStep::Thanked {
            from: "Nate".into(),
            to: "Simon".into()
        })
    );

    system.shutdown().await.expect("Shutdown failed");
}
