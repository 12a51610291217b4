//! Octopush is an identity-gated relay between OctoPrint installations
//! and their owners' phones.
//!
//! # Features
//!
//! - Account binding
//!     - FCM registration token per account (register/unregister)
//!     - known OctoPrint instance addresses, deduplicated
//!     - public profile view (id + notifications enabled)
//! - Event relay
//!     - fixed whitelist of printer lifecycle events
//!     - one best-effort delivery per event, outcome reported verbatim
//! - Pluggable backends
//!     - identity verifier, account store, and push sink are adapters

// Re-export shared types and adapter traits from octopush-types
pub use octopush_types::account_adapter;
pub use octopush_types::error;
pub use octopush_types::identity_adapter;
pub use octopush_types::push_adapter;
pub use octopush_types::types;

// Core infrastructure re-exports
pub use octopush_core::extract;
pub use octopush_core::identity;
pub use octopush_core::middleware;

// Feature crate re-exports
pub use octopush_notify as notify;
pub use octopush_profile as profile;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
