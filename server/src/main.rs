//! Octopush server binary
//!
//! Wires the relay with its production adapters: SQLite for account
//! documents, HS256 JWTs for identity, FCM for delivery. Configuration
//! comes from the environment:
//!
//! - `OCTOPUSH_LISTEN`        listen address (default `127.0.0.1:8080`)
//! - `OCTOPUSH_DATA_DIR`      database directory (default `./data`)
//! - `OCTOPUSH_JWT_SECRET`    HS256 secret for credential verification
//! - `OCTOPUSH_FCM_KEY`       FCM server key
//! - `OCTOPUSH_FCM_ENDPOINT`  FCM send endpoint (default public API)

use std::{env, path, sync::Arc};

use octopush::prelude::*;
use octopush::AppBuilder;
use octopush_account_adapter_sqlite::AccountAdapterSqlite;
use octopush_identity_adapter_jwt::IdentityAdapterJwt;
use octopush_push_adapter_fcm::{PushAdapterFcm, DEFAULT_FCM_ENDPOINT};

pub struct Config {
	pub listen: Box<str>,
	pub db_dir: path::PathBuf,
	pub jwt_secret: Box<str>,
	pub fcm_key: Box<str>,
	pub fcm_endpoint: Box<str>,
}

fn required(name: &str) -> OpResult<Box<str>> {
	env::var(name).map(Into::into).map_err(|_| Error::Internal(format!("{} must be set", name)))
}

fn load_config() -> OpResult<Config> {
	Ok(Config {
		listen: env::var("OCTOPUSH_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".into()).into(),
		db_dir: path::PathBuf::from(
			env::var("OCTOPUSH_DATA_DIR").unwrap_or_else(|_| "./data".into()),
		),
		jwt_secret: required("OCTOPUSH_JWT_SECRET")?,
		fcm_key: required("OCTOPUSH_FCM_KEY")?,
		fcm_endpoint: env::var("OCTOPUSH_FCM_ENDPOINT")
			.unwrap_or_else(|_| DEFAULT_FCM_ENDPOINT.into())
			.into(),
	})
}

#[tokio::main]
async fn main() -> OpResult<()> {
	let config = load_config()?;

	let mut builder = AppBuilder::new();

	tokio::fs::create_dir_all(&config.db_dir).await?;
	let account_adapter =
		Arc::new(AccountAdapterSqlite::new(config.db_dir.join("accounts.db")).await?);
	let identity_adapter = Arc::new(IdentityAdapterJwt::new(&config.jwt_secret));
	let push_adapter = Arc::new(PushAdapterFcm::with_endpoint(config.fcm_key, config.fcm_endpoint)?);

	builder
		.listen(config.listen)
		.account_adapter(account_adapter)
		.identity_adapter(identity_adapter)
		.push_adapter(push_adapter);

	builder.run().await
}

// vim: ts=4
