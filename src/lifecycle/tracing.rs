//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter. The level
//! comes from `RUST_LOG` and falls back to `info`, so the coffee run is narrated by
//! default.
//!
//! ```bash
//! # Requests, pondering, outcomes and sips
//! cargo run
//!
//! # Adds actor traffic and think-time scheduling
//! RUST_LOG=debug cargo run
//!
//! # Only the protocol
//! RUST_LOG=coffee_run::protocol=debug cargo run
//! ```
//!
//! With the default level the run reads like:
//!
//! ```text
//! INFO request_beverage{kind="capacino"}: Can I have a capacino please requester="Nate" responder="Simon"
//! INFO request_beverage{kind="capacino"}: Pondering... think_time=4s
//! INFO Fulfilled requester=person_2 seller="Simon" kind="capacino" balance=8
//! INFO Ahh kind="capacino" remaining=180
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity kind is a field, module paths add noise
        .compact()
        .init();
}
