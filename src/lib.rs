//! # Coffee Run
//!
//! > **People buying each other coffee, one asynchronous request at a time.**
//!
//! A person asks another for a drink. An agreeable responder thinks it over for a
//! while, then the requester pays and receives the drink; an unavailable one says
//! no at once. Drinks go down one sip at a time.
//!
//! ## Core Concepts
//!
//! ### People live in an actor
//! Every [`Person`](model::Person) is owned by a single
//! [`ResourceActor`](framework::ResourceActor). Purchases and sips are actions sent
//! through its mailbox, so they are applied one at a time and a failed action
//! leaves the person exactly as it was.
//!
//! ### Requests resolve later
//! [`PurchaseDesk::request_beverage`](protocol::PurchaseDesk::request_beverage)
//! returns a [`PendingPurchase`](protocol::PendingPurchase) that later yields an
//! [`Outcome`](protocol::Outcome). A request the requester cannot afford is caught
//! and logged during think-time and never answered, unlike a refusal, which always
//! is. See the [`protocol`] module.
//!
//! ## Module Tour
//!
//! - [`model`] - beverages, people, the transfer rule and the pub-session check
//! - [`framework`] - the generic resource actor, its client and a mock for tests
//! - [`person_actor`] / [`clients`] - the person actor and its typed client
//! - [`protocol`] - the purchase desk and think-time worker
//! - [`scenario`] - the two-person coffee run
//! - [`lifecycle`] - wiring, shutdown and tracing setup
//! - [`config`] - defaults and environment overrides
//!
//! ## Quick Start
//!
//! ```bash
//! # Full coffee run with a four-second think-time
//! cargo run
//!
//! # Faster
//! COFFEE_THINK_TIME_MS=200 cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod person_actor;
pub mod protocol;
pub mod scenario;
