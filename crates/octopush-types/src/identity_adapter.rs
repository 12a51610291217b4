//! Adapter that verifies bearer credentials and resolves account identifiers.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait IdentityVerifier: Debug + Send + Sync {
	/// Verifies an opaque credential token (scheme prefix already stripped)
	/// and resolves the stable account identifier it was issued to.
	///
	/// Any failure, whatever its cause, means the caller stays anonymous.
	async fn verify_credential(&self, token: &str) -> OpResult<AccountId>;
}

// vim: ts=4
