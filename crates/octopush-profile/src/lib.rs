//! Account profile module
//!
//! Owns the profile document of each account: the delivery endpoint
//! binding (FCM registration token), the set of known OctoPrint
//! instance addresses, and the public profile view.
//!
//! All writes go through the full-overwrite upsert of the account
//! store; reads never create documents.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod handler;

mod prelude;

pub use account::{
	profile_view, register_endpoint, register_instance, unregister_endpoint, ProfileView,
};

// vim: ts=4
