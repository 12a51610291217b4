//! Common test utilities and helpers
//!
//! Mock adapters and fixtures shared by the router-level integration
//! tests. The mocks record enough to assert on side effects: the store
//! counts writes, the sink records every delivery attempt.

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use octopush::prelude::*;
use octopush::routes;
use octopush_core::app::{AppBuilderOpts, AppState};

/// Identity verifier with a fixed token-to-account table. Any token not
/// in the table is rejected, which stands in for every real-world
/// verifier failure at once.
#[derive(Debug, Default)]
pub struct TableVerifier {
	accounts: HashMap<String, String>,
}

impl TableVerifier {
	pub fn with_account(mut self, token: &str, account_id: &str) -> Self {
		self.accounts.insert(token.to_string(), account_id.to_string());
		self
	}
}

#[async_trait]
impl IdentityVerifier for TableVerifier {
	async fn verify_credential(&self, token: &str) -> OpResult<AccountId> {
		self.accounts.get(token).map(|id| AccountId::from(id.as_str())).ok_or(Error::TokenInvalid)
	}
}

/// In-memory account store with a write counter
#[derive(Debug, Default)]
pub struct MemoryStore {
	docs: Mutex<HashMap<String, AccountRecord>>,
	writes: Mutex<u32>,
	fail: Mutex<bool>,
}

impl MemoryStore {
	pub fn write_count(&self) -> u32 {
		*self.writes.lock().unwrap()
	}

	pub fn get(&self, account_id: &str) -> Option<AccountRecord> {
		self.docs.lock().unwrap().get(account_id).cloned()
	}

	pub fn set_fail(&self, fail: bool) {
		*self.fail.lock().unwrap() = fail;
	}
}

#[async_trait]
impl AccountStore for MemoryStore {
	async fn read_account(&self, account_id: &AccountId) -> OpResult<AccountRecord> {
		if *self.fail.lock().unwrap() {
			return Err(Error::StoreUnavailable);
		}
		self.docs.lock().unwrap().get(account_id.as_str()).cloned().ok_or(Error::NotFound)
	}

	async fn write_account(&self, record: &AccountRecord) -> OpResult<()> {
		if *self.fail.lock().unwrap() {
			return Err(Error::StoreUnavailable);
		}
		*self.writes.lock().unwrap() += 1;
		self.docs.lock().unwrap().insert(record.id.to_string(), record.clone());
		Ok(())
	}
}

/// Notification sink that records attempts and answers with a script
#[derive(Debug)]
pub struct RecordingSink {
	outcome: DeliveryResult,
	pub sent: Mutex<Vec<(String, String, String)>>,
}

impl RecordingSink {
	pub fn delivering(message_id: &str) -> Self {
		Self { outcome: DeliveryResult::Delivered(message_id.into()), sent: Mutex::new(Vec::new()) }
	}

	pub fn failing(reason: &str) -> Self {
		Self { outcome: DeliveryResult::Failed(reason.into()), sent: Mutex::new(Vec::new()) }
	}

	pub fn sent_count(&self) -> usize {
		self.sent.lock().unwrap().len()
	}
}

#[async_trait]
impl NotificationSink for RecordingSink {
	async fn deliver(&self, endpoint: &str, message: &PushMessage<'_>) -> DeliveryResult {
		self.sent.lock().unwrap().push((
			endpoint.to_string(),
			message.title.to_string(),
			message.body.to_string(),
		));
		self.outcome.clone()
	}
}

/// The adapters of one test relay, kept around so tests can assert on
/// what the handlers did to them
pub struct TestRelay {
	pub router: Router,
	pub store: Arc<MemoryStore>,
	pub sink: Arc<RecordingSink>,
}

pub fn test_relay(verifier: TableVerifier, sink: RecordingSink) -> TestRelay {
	let store = Arc::new(MemoryStore::default());
	let sink = Arc::new(sink);
	let app: App = Arc::new(AppState {
		opts: AppBuilderOpts { listen: "127.0.0.1:0".into() },
		identity_adapter: Arc::new(verifier),
		account_adapter: Arc::clone(&store) as Arc<dyn AccountStore>,
		push_adapter: Arc::clone(&sink) as Arc<dyn NotificationSink>,
	});

	TestRelay { router: routes::init(app), store, sink }
}

/// Relay with one known credential (`"Token good-token"` → `user-1`)
/// and a sink that accepts everything
pub fn default_relay() -> TestRelay {
	test_relay(
		TableVerifier::default().with_account("good-token", "user-1"),
		RecordingSink::delivering("msg-1"),
	)
}

pub fn post_json(uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
	let mut builder = Request::builder().method("POST").uri(uri);
	if let Some(auth) = auth {
		builder = builder.header("Authorization", auth);
	}
	builder
		.header("Content-Type", "application/json")
		.body(Body::from(body.to_string()))
		.unwrap()
}

pub fn request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(auth) = auth {
		builder = builder.header("Authorization", auth);
	}
	builder.body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	String::from_utf8(bytes.to_vec()).unwrap()
}

// vim: ts=4
