//! Adapter that delivers push notifications to a registered endpoint.

use async_trait::async_trait;
use std::fmt::Debug;

/// A notification to deliver: a title and a short body
#[derive(Clone, Debug)]
pub struct PushMessage<'a> {
	pub title: &'a str,
	pub body: &'a str,
}

/// Outcome of one best-effort delivery attempt.
///
/// Delivery failures are data, not errors: the dispatcher reports them
/// back to the caller verbatim instead of mapping them to a status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryResult {
	/// Accepted by the push service, carries the service's message id
	Delivered(Box<str>),
	/// Rejected or unreachable, carries the reason
	Failed(Box<str>),
}

#[async_trait]
pub trait NotificationSink: Debug + Send + Sync {
	/// Attempts one delivery to `endpoint`. Never retries.
	async fn deliver(&self, endpoint: &str, message: &PushMessage<'_>) -> DeliveryResult;
}

// vim: ts=4
