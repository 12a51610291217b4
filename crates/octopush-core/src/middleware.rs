//! Request gate middleware

use axum::{
	body::Body,
	http::{response::Response, Request},
	middleware::Next,
};

use crate::extract::Credential;
use crate::prelude::*;

/// Rejects requests that carry no credential at all. This gate only
/// guarantees that a non-empty Authorization value is present and
/// stashes it for the handlers; it never calls the verifier, so shape
/// errors in the body still win over verification errors.
pub async fn require_credential(mut req: Request<Body>, next: Next) -> OpResult<Response<Body>> {
	let auth_header =
		req.headers().get("Authorization").and_then(|h| h.to_str().ok()).unwrap_or("");

	if auth_header.is_empty() {
		return Err(Error::Unauthorized);
	}

	let credential = Credential(Box::from(auth_header));
	req.extensions_mut().insert(credential);

	Ok(next.run(req).await)
}

// vim: ts=4
