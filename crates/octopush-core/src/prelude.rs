pub use crate::app::App;

pub use octopush_types::prelude::*;

// vim: ts=4
