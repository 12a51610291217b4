//! Custom extractors for octopush request data

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::prelude::*;

// Credential //
//************//
/// Raw Authorization header value, stashed by the gate middleware.
/// Verification happens later in the operation itself.
#[derive(Debug, Clone)]
pub struct Credential(pub Box<str>);

impl<S> FromRequestParts<S> for Credential
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(credential) = parts.extensions.get::<Credential>().cloned() {
			Ok(credential)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// Payload //
//*********//
/// JSON request body where every rejection collapses to 400
/// "Bad parameters": a missing body, a non-JSON body, and a body
/// without the required fields are all the same thing to the caller.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
	S: Send + Sync,
	T: DeserializeOwned,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state)
			.await
			.map_err(|_| Error::ValidationError("Bad parameters".into()))?;

		Ok(Payload(value))
	}
}

// vim: ts=4
