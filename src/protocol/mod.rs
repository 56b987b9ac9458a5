//! # Purchase Protocol
//!
//! One person asks another for a drink; the answer arrives later as a one-shot
//! notification.
//!
//! ```text
//! request_beverage ──► Pending ──┬─ responder unavailable ──► Rejected   (immediate, delivered)
//!                                └─ agreeable ─► think-time ─┬─ paid ──────► Fulfilled (delivered)
//!                                                            └─ can't pay ─► absorbed  (logged only)
//! ```
//!
//! The two failure paths are deliberately asymmetric: an unavailable responder always
//! reaches the caller, while a lack of funds found after think-time is caught and
//! logged by the worker and never delivered. [`ProtocolConfig::surface_insufficient_funds`](crate::config::ProtocolConfig)
//! switches the latter to a delivered rejection.
//!
//! - [`PurchaseDesk`] - accepts requests
//! - [`ThinkTimeWorker`] - resolves accepted requests in scheduling order
//! - [`PendingPurchase`] / [`Outcome`] / [`PurchaseError`] - what callers get back

pub mod desk;
pub mod outcome;
pub mod think_time;

pub use desk::*;
pub use outcome::*;
pub use think_time::ThinkTimeWorker;
