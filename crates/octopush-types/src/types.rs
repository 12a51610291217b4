//! Common types used throughout octopush.

use serde::{Deserialize, Serialize};

// AccountId //
//***********//
/// Stable account identifier, issued by the identity verifier.
#[derive(Clone, Debug)]
pub struct AccountId(pub Box<str>);

impl AccountId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for AccountId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for AccountId {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::Eq for AccountId {}

impl From<&str> for AccountId {
	fn from(id: &str) -> Self {
		AccountId(Box::from(id))
	}
}

impl Serialize for AccountId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for AccountId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(AccountId(Box::<str>::deserialize(deserializer)?))
	}
}

// vim: ts=4
