//! Event intake HTTP handler

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;

use crate::dispatch::{self, DispatchOutcome};
use crate::prelude::*;
use octopush_core::extract::{Credential, Payload};
use octopush_core::identity;

/// Request body for event intake. `event` is optional at the parse
/// level so that a present-but-eventless body gets the event-specific
/// answer instead of the generic shape error.
#[derive(Debug, Deserialize)]
pub struct SendEventRequest {
	pub event: Option<String>,
}

/// POST /sendEvent
///
/// Accepts one printer lifecycle event and relays it to the caller's
/// registered device. The delivery outcome, message id or failure
/// reason, travels back verbatim in a 200 response either way.
pub async fn post_send_event(
	State(app): State<App>,
	Credential(credential): Credential,
	Payload(body): Payload<SendEventRequest>,
) -> OpResult<(StatusCode, String)> {
	let event = body.event.as_deref().unwrap_or("");
	if event.is_empty() {
		return Err(Error::ValidationError("Unknown event".into()));
	}

	let account_id = identity::verify(&app, &credential).await?;

	match dispatch::dispatch_event(&app, &account_id, event).await? {
		DispatchOutcome::NotNotifiable => {
			Ok((StatusCode::OK, "This event doesn't send notifications".into()))
		}
		DispatchOutcome::Delivered(message_id) => Ok((StatusCode::OK, message_id.into())),
		DispatchOutcome::Failed(reason) => Ok((StatusCode::OK, reason.into())),
	}
}

// vim: ts=4
