//! Adapter that stores account profile documents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// One profile document per account, as persisted in the `accounts`
/// collection. Field names are wire-exact: the mobile client and
/// previously written documents both rely on them.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountRecord {
	/// Account identifier, always equal to the verified owner's id
	#[serde(rename = "Id")]
	pub id: AccountId,

	/// Push delivery endpoint. Absent or empty means notifications disabled.
	#[serde(rename = "FCMToken")]
	pub fcm_token: Option<Box<str>>,

	/// Known OctoPrint installation addresses, no duplicates
	pub instances: Option<Vec<Box<str>>>,
}

impl AccountRecord {
	/// The one projection rule exposed externally: a record allows
	/// notifications iff it carries a non-empty delivery endpoint.
	pub fn notifications_enabled(&self) -> bool {
		self.fcm_token.as_deref().is_some_and(|token| !token.is_empty())
	}
}

#[async_trait]
pub trait AccountStore: Debug + Send + Sync {
	/// Reads the profile document of an account.
	/// Fails with [`Error::NotFound`] if the account has none.
	async fn read_account(&self, account_id: &AccountId) -> OpResult<AccountRecord>;

	/// Writes a full profile document, replacing any existing one (upsert)
	async fn write_account(&self, record: &AccountRecord) -> OpResult<()>;
}


// vim: ts=4
