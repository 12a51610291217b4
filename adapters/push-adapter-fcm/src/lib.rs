//! Firebase Cloud Messaging delivery sink, over the legacy HTTP API.
//!
//! One POST per notification, authenticated with the project's server
//! key. Whatever FCM answers, the adapter answers with a
//! [`DeliveryResult`]: delivery problems are outcomes the relay reports
//! back to its caller, never errors that abort the request.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use octopush::prelude::*;

/// Public endpoint of the legacy FCM send API
pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
	title: &'a str,
	body: &'a str,
}

#[derive(Debug, Serialize)]
struct FcmRequest<'a> {
	to: &'a str,
	notification: FcmNotification<'a>,
}

/// The slice of the legacy send response the adapter cares about:
/// one registration token in, one result out.
#[derive(Debug, Deserialize)]
struct FcmResponse {
	#[serde(default)]
	results: Vec<FcmSendResult>,
}

#[derive(Debug, Deserialize)]
struct FcmSendResult {
	message_id: Option<Box<str>>,
	error: Option<Box<str>>,
}

pub struct PushAdapterFcm {
	client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
	endpoint: Box<str>,
	server_key: Box<str>,
}

impl PushAdapterFcm {
	/// Creates an adapter posting to the public FCM endpoint
	pub fn new(server_key: impl Into<Box<str>>) -> OpResult<Self> {
		Self::with_endpoint(server_key, DEFAULT_FCM_ENDPOINT)
	}

	/// Creates an adapter posting to a custom endpoint (test harnesses)
	pub fn with_endpoint(
		server_key: impl Into<Box<str>>,
		endpoint: impl Into<Box<str>>,
	) -> OpResult<Self> {
		let connector = HttpsConnectorBuilder::new()
			.with_native_roots()
			.map_err(|err| Error::Internal(format!("TLS error: {}", err)))?
			.https_or_http()
			.enable_http1()
			.build();
		let client = Client::builder(TokioExecutor::new()).build(connector);

		Ok(Self { client, endpoint: endpoint.into(), server_key: server_key.into() })
	}
}

// The server key is secret material, keep it out of debug output
impl Debug for PushAdapterFcm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PushAdapterFcm")
			.field("endpoint", &self.endpoint)
			.finish_non_exhaustive()
	}
}

/// Maps one FCM answer to a delivery outcome. A reachable service that
/// refuses the message is a failure with the service's reason; an
/// answer we cannot interpret is a failure naming the raw body.
fn parse_response(status: hyper::StatusCode, body: &str) -> DeliveryResult {
	if !status.is_success() {
		return DeliveryResult::Failed(format!("HTTP {}: {}", status, body).into());
	}

	match serde_json::from_str::<FcmResponse>(body) {
		Ok(response) => match response.results.into_iter().next() {
			Some(FcmSendResult { message_id: Some(message_id), .. }) => {
				DeliveryResult::Delivered(message_id)
			}
			Some(FcmSendResult { error: Some(error), .. }) => DeliveryResult::Failed(error),
			_ => DeliveryResult::Failed(format!("Unexpected FCM response: {}", body).into()),
		},
		Err(_) => DeliveryResult::Failed(format!("Unexpected FCM response: {}", body).into()),
	}
}

#[async_trait::async_trait]
impl NotificationSink for PushAdapterFcm {
	async fn deliver(&self, endpoint: &str, message: &PushMessage<'_>) -> DeliveryResult {
		let payload = FcmRequest {
			to: endpoint,
			notification: FcmNotification { title: message.title, body: message.body },
		};
		let body = match serde_json::to_vec(&payload) {
			Ok(body) => body,
			Err(err) => {
				return DeliveryResult::Failed(format!("Payload error: {}", err).into());
			}
		};

		let request = match hyper::Request::builder()
			.method(hyper::Method::POST)
			.uri(self.endpoint.as_ref())
			.header("Content-Type", "application/json")
			.header("Authorization", format!("key={}", self.server_key))
			.body(Full::new(Bytes::from(body)))
		{
			Ok(request) => request,
			Err(err) => {
				return DeliveryResult::Failed(format!("Request build error: {}", err).into());
			}
		};

		match self.client.request(request).await {
			Ok(response) => {
				let status = response.status();
				let body_bytes = response.into_body().collect().await.ok().map(|b| b.to_bytes());
				let body_str =
					body_bytes.as_ref().and_then(|b| std::str::from_utf8(b).ok()).unwrap_or("");

				let result = parse_response(status, body_str);
				match &result {
					DeliveryResult::Delivered(message_id) => {
						debug!(message_id = %message_id, "FCM accepted notification");
					}
					DeliveryResult::Failed(reason) => {
						warn!(reason = %reason, "FCM refused notification");
					}
				}
				result
			}
			Err(err) => DeliveryResult::Failed(format!("Network error: {}", err).into()),
		}
	}
}


// vim: ts=4
