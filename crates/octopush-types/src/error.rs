use axum::{http::StatusCode, response::IntoResponse};
use tracing::warn;

pub type OpResult<T> = std::result::Result<T, Error>;

/// Error kinds are precise internally and deliberately vague externally:
/// everything that happens after credential verification starts is
/// collapsed to the same 400 "User unknown" answer, so a caller cannot
/// probe which accounts exist or which backend failed.
#[derive(Debug)]
pub enum Error {
	/// Credential header missing or empty
	Unauthorized,
	/// Credential present but the verifier rejected it
	TokenInvalid,
	/// No profile document for the account
	NotFound,
	/// Profile exists but carries no usable delivery endpoint
	NotificationsDisabled,
	/// Malformed request shape, message is sent verbatim
	ValidationError(String),
	/// Document store failure
	StoreUnavailable,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::Unauthorized => (StatusCode::FORBIDDEN, "Unauthorized").into_response(),
			Error::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
			Error::NotFound => (StatusCode::BAD_REQUEST, "User not found").into_response(),
			Error::NotificationsDisabled => {
				(StatusCode::BAD_REQUEST, "User doesn't allow notifications").into_response()
			}
			err => {
				warn!("Request failed: {}", err);
				(StatusCode::BAD_REQUEST, "User unknown").into_response()
			}
		}
	}
}


// vim: ts=4
