//! Core infrastructure for the octopush relay: shared app state, the
//! request gate, and credential-to-account resolution.

pub mod app;
pub mod extract;
pub mod identity;
pub mod middleware;
pub mod prelude;

// vim: ts=4
