//! Credential-to-account resolution

use crate::prelude::*;

/// Scheme prefix expected in the Authorization header
pub const CREDENTIAL_SCHEME: &str = "Token ";

/// Strips the scheme prefix and asks the identity adapter to resolve
/// the account. Every failure mode, including a missing prefix,
/// collapses to [`Error::TokenInvalid`]: the caller learns nothing
/// beyond "User unknown".
pub async fn verify(app: &App, credential: &str) -> OpResult<AccountId> {
	let token = credential.strip_prefix(CREDENTIAL_SCHEME).ok_or(Error::TokenInvalid)?;

	app.identity_adapter.verify_credential(token).await.map_err(|err| {
		debug!("Credential verification failed: {}", err);
		Error::TokenInvalid
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::app::{AppBuilderOpts, AppState};
	use async_trait::async_trait;
	use std::sync::Arc;

	#[derive(Debug)]
	struct OneAccountVerifier;

	#[async_trait]
	impl IdentityVerifier for OneAccountVerifier {
		async fn verify_credential(&self, token: &str) -> OpResult<AccountId> {
			match token {
				"good" => Ok(AccountId::from("user-1")),
				"broken" => Err(Error::StoreUnavailable),
				_ => Err(Error::TokenInvalid),
			}
		}
	}

	#[derive(Debug)]
	struct NoStore;

	#[async_trait]
	impl AccountStore for NoStore {
		async fn read_account(&self, _account_id: &AccountId) -> OpResult<AccountRecord> {
			Err(Error::NotFound)
		}
		async fn write_account(&self, _record: &AccountRecord) -> OpResult<()> {
			Ok(())
		}
	}

	#[derive(Debug)]
	struct NoSink;

	#[async_trait]
	impl NotificationSink for NoSink {
		async fn deliver(&self, _endpoint: &str, _message: &PushMessage<'_>) -> DeliveryResult {
			DeliveryResult::Failed("unused".into())
		}
	}

	fn test_app() -> App {
		Arc::new(AppState {
			opts: AppBuilderOpts { listen: "127.0.0.1:0".into() },
			identity_adapter: Arc::new(OneAccountVerifier),
			account_adapter: Arc::new(NoStore),
			push_adapter: Arc::new(NoSink),
		})
	}

	#[tokio::test]
	async fn test_scheme_prefix_is_stripped() {
		let app = test_app();
		let account_id = verify(&app, "Token good").await.unwrap();
		assert_eq!(account_id, AccountId::from("user-1"));
	}

	#[tokio::test]
	async fn test_missing_prefix_is_token_invalid() {
		let app = test_app();
		// The bare token would verify, but without the scheme it never
		// reaches the adapter
		let res = verify(&app, "good").await;
		assert!(matches!(res, Err(Error::TokenInvalid)));
	}

	#[tokio::test]
	async fn test_adapter_failures_collapse_to_token_invalid() {
		let app = test_app();
		for token in ["Token forged", "Token broken"] {
			let res = verify(&app, token).await;
			assert!(matches!(res, Err(Error::TokenInvalid)));
		}
	}
}

// vim: ts=4
