//! Shared types, adapter traits, and error types for the octopush
//! notification relay.
//!
//! Everything the service crates and the adapter implementations have in
//! common lives here, so adapter crates can compile in parallel with the
//! feature crates.

pub mod account_adapter;
pub mod error;
pub mod identity_adapter;
pub mod prelude;
pub mod push_adapter;
pub mod types;

// vim: ts=4
