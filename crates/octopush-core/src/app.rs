//! App state type

use std::sync::Arc;

use octopush_types::account_adapter::AccountStore;
use octopush_types::identity_adapter::IdentityVerifier;
use octopush_types::push_adapter::NotificationSink;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state. All externals are injected as adapters;
/// nothing in the service crates talks to a backend directly.
pub struct AppState {
	pub opts: AppBuilderOpts,

	pub identity_adapter: Arc<dyn IdentityVerifier>,
	pub account_adapter: Arc<dyn AccountStore>,
	pub push_adapter: Arc<dyn NotificationSink>,
}

pub type App = Arc<AppState>;

/// Adapter slots collected by the builder before the state is frozen
pub struct Adapters {
	pub identity_adapter: Option<Arc<dyn IdentityVerifier>>,
	pub account_adapter: Option<Arc<dyn AccountStore>>,
	pub push_adapter: Option<Arc<dyn NotificationSink>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

// vim: ts=4
