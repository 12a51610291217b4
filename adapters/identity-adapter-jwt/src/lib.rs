//! JWT-backed identity verifier.
//!
//! Credentials are HS256-signed bearer tokens whose `sub` claim names
//! the account. Expiry is validated; everything else the token carries
//! is opaque to the relay.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::fmt::Debug;

use octopush::prelude::*;

/// Claims the verifier cares about. Tokens may carry more, which is ignored.
#[derive(Debug, Deserialize)]
struct IdentityClaims {
	sub: Box<str>,
}

pub struct IdentityAdapterJwt {
	decoding_key: DecodingKey,
}

impl IdentityAdapterJwt {
	pub fn new(secret: &str) -> Self {
		Self { decoding_key: DecodingKey::from_secret(secret.as_bytes()) }
	}
}

// The decoding key is secret material, keep it out of debug output
impl Debug for IdentityAdapterJwt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("IdentityAdapterJwt").finish_non_exhaustive()
	}
}

#[async_trait]
impl IdentityVerifier for IdentityAdapterJwt {
	async fn verify_credential(&self, token: &str) -> OpResult<AccountId> {
		let token_data =
			decode::<IdentityClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
				.map_err(|_| Error::TokenInvalid)?;

		Ok(AccountId(token_data.claims.sub))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
	use serde::Serialize;

	#[derive(Serialize)]
	struct TestClaims {
		sub: &'static str,
		exp: u64,
	}

	fn make_token(secret: &str, sub: &'static str, exp: u64) -> String {
		encode(
			&Header::default(),
			&TestClaims { sub, exp },
			&EncodingKey::from_secret(secret.as_bytes()),
		)
		.expect("token encoding should succeed")
	}

	#[tokio::test]
	async fn test_valid_token_resolves_subject() {
		let adapter = IdentityAdapterJwt::new("s3cret");
		let token = make_token("s3cret", "user-1", get_current_timestamp() + 3600);

		let account_id = adapter.verify_credential(&token).await.expect("should verify");
		assert_eq!(account_id, AccountId::from("user-1"));
	}

	#[tokio::test]
	async fn test_wrong_secret_is_rejected() {
		let adapter = IdentityAdapterJwt::new("s3cret");
		let token = make_token("not-the-secret", "user-1", get_current_timestamp() + 3600);

		let res = adapter.verify_credential(&token).await;
		assert!(matches!(res, Err(Error::TokenInvalid)));
	}

	#[tokio::test]
	async fn test_expired_token_is_rejected() {
		let adapter = IdentityAdapterJwt::new("s3cret");
		let token = make_token("s3cret", "user-1", get_current_timestamp() - 7200);

		let res = adapter.verify_credential(&token).await;
		assert!(matches!(res, Err(Error::TokenInvalid)));
	}

	#[tokio::test]
	async fn test_garbage_is_rejected() {
		let adapter = IdentityAdapterJwt::new("s3cret");

		let res = adapter.verify_credential("not-a-jwt").await;
		assert!(matches!(res, Err(Error::TokenInvalid)));
	}

	#[tokio::test]
	async fn test_token_without_subject_is_rejected() {
		#[derive(Serialize)]
		struct NoSub {
			exp: u64,
		}

		let token = encode(
			&Header::default(),
			&NoSub { exp: get_current_timestamp() + 3600 },
			&EncodingKey::from_secret(b"s3cret"),
		)
		.expect("token encoding should succeed");

		let adapter = IdentityAdapterJwt::new("s3cret");
		let res = adapter.verify_credential(&token).await;
		assert!(matches!(res, Err(Error::TokenInvalid)));
	}
}

// vim: ts=4
