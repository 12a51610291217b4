pub use octopush_core::prelude::*;

// vim: ts=4
