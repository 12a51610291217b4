//! Profile Manager: endpoint binding and instance bookkeeping.

use serde::Serialize;

use crate::prelude::*;

/// Public projection of a profile document. Beyond the id, the only
/// thing exposed is whether notifications can currently be delivered.
#[derive(Debug, Serialize)]
pub struct ProfileView {
	#[serde(rename = "Id")]
	pub id: AccountId,
	#[serde(rename = "IsNotificationsEnabled")]
	pub notifications_enabled: bool,
}

/// Binds a delivery endpoint to the account, creating the profile
/// document if none exists. Full overwrite: unrelated fields are not
/// preserved.
pub async fn register_endpoint(
	store: &dyn AccountStore,
	account_id: &AccountId,
	endpoint: &str,
) -> OpResult<()> {
	let record = AccountRecord {
		id: account_id.clone(),
		fcm_token: Some(Box::from(endpoint)),
		instances: None,
	};

	store.write_account(&record).await
}

/// Clears the delivery endpoint. Idempotent: unregistering an account
/// that never registered still succeeds and leaves notifications
/// disabled.
pub async fn unregister_endpoint(store: &dyn AccountStore, account_id: &AccountId) -> OpResult<()> {
	let record = AccountRecord { id: account_id.clone(), fcm_token: None, instances: None };

	store.write_account(&record).await
}

/// Reads the public view of a profile. Absence is an error here:
/// reads never create documents.
pub async fn profile_view(
	store: &dyn AccountStore,
	account_id: &AccountId,
) -> OpResult<ProfileView> {
	let record = store.read_account(account_id).await?;

	Ok(ProfileView { notifications_enabled: record.notifications_enabled(), id: record.id })
}

/// Adds an OctoPrint instance address to the account's known set.
/// Requires an existing profile. Returns whether a write happened:
/// re-registering a known address is a no-op that still succeeds.
pub async fn register_instance(
	store: &dyn AccountStore,
	account_id: &AccountId,
	address: &str,
) -> OpResult<bool> {
	let mut record = store.read_account(account_id).await?;

	let instances = record.instances.get_or_insert_with(Vec::new);
	if instances.iter().any(|known| known.as_ref() == address) {
		return Ok(false);
	}
	instances.push(Box::from(address));

	store.write_account(&record).await?;
	Ok(true)
}


// vim: ts=4
