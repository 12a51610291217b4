pub use crate::account_adapter::{AccountRecord, AccountStore};
pub use crate::error::{Error, OpResult};
pub use crate::identity_adapter::IdentityVerifier;
pub use crate::push_adapter::{DeliveryResult, NotificationSink, PushMessage};
pub use crate::types::AccountId;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
