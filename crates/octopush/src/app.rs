//! App builder - constructs and runs the octopush relay

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
pub use octopush_core::app::{Adapters, App, AppBuilderOpts, AppState, VERSION};
use octopush_types::account_adapter::AccountStore;
use octopush_types::identity_adapter::IdentityVerifier;
use octopush_types::push_adapter::NotificationSink;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			adapters: Adapters { identity_adapter: None, account_adapter: None, push_adapter: None },
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn identity_adapter(&mut self, identity_adapter: Arc<dyn IdentityVerifier>) -> &mut Self {
		self.adapters.identity_adapter = Some(identity_adapter);
		self
	}
	pub fn account_adapter(&mut self, account_adapter: Arc<dyn AccountStore>) -> &mut Self {
		self.adapters.account_adapter = Some(account_adapter);
		self
	}
	pub fn push_adapter(&mut self, push_adapter: Arc<dyn NotificationSink>) -> &mut Self {
		self.adapters.push_adapter = Some(push_adapter);
		self
	}

	/// Freezes the collected options and adapters into the shared state.
	/// Every adapter slot must be filled; the relay cannot degrade to a
	/// partial service.
	fn build(self) -> OpResult<App> {
		let Some(identity_adapter) = self.adapters.identity_adapter else {
			error!("FATAL: No identity adapter configured");
			return Err(Error::Internal("No identity adapter configured".to_string()));
		};
		let Some(account_adapter) = self.adapters.account_adapter else {
			error!("FATAL: No account adapter configured");
			return Err(Error::Internal("No account adapter configured".to_string()));
		};
		let Some(push_adapter) = self.adapters.push_adapter else {
			error!("FATAL: No push adapter configured");
			return Err(Error::Internal("No push adapter configured".to_string()));
		};

		Ok(Arc::new(AppState {
			opts: self.opts,
			identity_adapter,
			account_adapter,
			push_adapter,
		}))
	}

	pub async fn run(self) -> OpResult<()> {
		info!("Octopush V{}", VERSION);
		info!("");

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
