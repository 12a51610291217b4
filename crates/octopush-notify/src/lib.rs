//! Event notification module
//!
//! Receives printer lifecycle events and relays the whitelisted ones as
//! push notifications to the account's registered device endpoint.
//!
//! Dispatch is single-shot: one store read, at most one delivery
//! attempt, and the outcome travels back to the caller verbatim.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod event;
pub mod handler;

mod prelude;

pub use dispatch::{dispatch_event, DispatchOutcome, NOTIFICATION_TITLE};
pub use event::PrinterEvent;

// vim: ts=4
