//! Account profile HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::account::{self, ProfileView};
use crate::prelude::*;
use octopush_core::extract::{Credential, Payload};
use octopush_core::identity;

/// Request body for binding a delivery endpoint
#[derive(Debug, Deserialize)]
pub struct RegisterTokenRequest {
	#[serde(rename = "FCMToken")]
	pub fcm_token: String,
}

/// Request body for registering an OctoPrint instance address
#[derive(Debug, Deserialize)]
pub struct RegisterInstanceRequest {
	pub local_address: String,
}

/// POST /registerFCMToken
///
/// Binds the caller's device endpoint to their account, creating the
/// profile document if needed.
pub async fn post_register_token(
	State(app): State<App>,
	Credential(credential): Credential,
	Payload(body): Payload<RegisterTokenRequest>,
) -> OpResult<(StatusCode, &'static str)> {
	if body.fcm_token.is_empty() {
		return Err(Error::ValidationError("Bad parameters".into()));
	}

	let account_id = identity::verify(&app, &credential).await?;

	info!(account_id = %account_id, "Registering FCM token");
	account::register_endpoint(app.account_adapter.as_ref(), &account_id, &body.fcm_token).await?;

	Ok((StatusCode::OK, "OK"))
}

/// POST /unregisterFCMToken
///
/// Clears the caller's endpoint binding. Safe to repeat.
pub async fn post_unregister_token(
	State(app): State<App>,
	Credential(credential): Credential,
) -> OpResult<(StatusCode, &'static str)> {
	let account_id = identity::verify(&app, &credential).await?;

	info!(account_id = %account_id, "Unregistering FCM token");
	account::unregister_endpoint(app.account_adapter.as_ref(), &account_id).await?;

	Ok((StatusCode::OK, "OK"))
}

/// GET /getProfile
pub async fn get_profile(
	State(app): State<App>,
	Credential(credential): Credential,
) -> OpResult<(StatusCode, Json<ProfileView>)> {
	let account_id = identity::verify(&app, &credential).await?;
	let view = account::profile_view(app.account_adapter.as_ref(), &account_id).await?;

	Ok((StatusCode::OK, Json(view)))
}

/// POST /setProfile
///
/// Deliberately read-only: answers exactly like `getProfile` and never
/// writes. Existing clients call it but only consume the echoed view,
/// so the mutation it suggests by name was never given semantics.
pub async fn post_profile(
	State(app): State<App>,
	Credential(credential): Credential,
) -> OpResult<(StatusCode, Json<ProfileView>)> {
	let account_id = identity::verify(&app, &credential).await?;
	let view = account::profile_view(app.account_adapter.as_ref(), &account_id).await?;

	Ok((StatusCode::OK, Json(view)))
}

/// POST /registerOctoprintInstance
///
/// Remembers an OctoPrint installation address for the caller's
/// account. Re-registering a known address is a successful no-op.
pub async fn post_register_instance(
	State(app): State<App>,
	Credential(credential): Credential,
	Payload(body): Payload<RegisterInstanceRequest>,
) -> OpResult<(StatusCode, &'static str)> {
	if body.local_address.is_empty() {
		return Err(Error::ValidationError("Bad parameters".into()));
	}

	let account_id = identity::verify(&app, &credential).await?;

	let added =
		account::register_instance(app.account_adapter.as_ref(), &account_id, &body.local_address)
			.await?;
	if added {
		info!(account_id = %account_id, address = %body.local_address, "Registered OctoPrint instance");
	} else {
		debug!(account_id = %account_id, address = %body.local_address, "OctoPrint instance already known");
	}

	Ok((StatusCode::OK, "OK"))
}

// vim: ts=4
