//! Event dispatch decision pipeline.

use crate::event::PrinterEvent;
use crate::prelude::*;

/// Title carried by every printer notification
pub const NOTIFICATION_TITLE: &str = "3D printer event";

/// What became of one inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// Valid event outside the whitelist: acknowledged, nothing sent
	NotNotifiable,
	/// Accepted by the push service, carries its message id
	Delivered(Box<str>),
	/// Push service refused or was unreachable, carries the reason
	Failed(Box<str>),
}

/// Decides and performs delivery for one event: whitelist check, then
/// profile read, then endpoint check, then at most one sink call.
///
/// A whitelist miss short-circuits before any store access. Sink
/// failures are data, not errors; they surface as
/// [`DispatchOutcome::Failed`] so the caller can report them verbatim.
pub async fn dispatch_event(
	app: &App,
	account_id: &AccountId,
	event: &str,
) -> OpResult<DispatchOutcome> {
	let Some(event) = PrinterEvent::parse(event) else {
		debug!(account_id = %account_id, event = %event, "Event not notifiable");
		return Ok(DispatchOutcome::NotNotifiable);
	};

	let record = app.account_adapter.read_account(account_id).await?;
	let endpoint = record
		.fcm_token
		.as_deref()
		.filter(|token| !token.is_empty())
		.ok_or(Error::NotificationsDisabled)?;

	let message = PushMessage { title: NOTIFICATION_TITLE, body: event.as_str() };
	match app.push_adapter.deliver(endpoint, &message).await {
		DeliveryResult::Delivered(message_id) => {
			info!(account_id = %account_id, event = %event, "Notification delivered");
			Ok(DispatchOutcome::Delivered(message_id))
		}
		DeliveryResult::Failed(reason) => {
			warn!(account_id = %account_id, event = %event, reason = %reason, "Notification delivery failed");
			Ok(DispatchOutcome::Failed(reason))
		}
	}
}


// vim: ts=4
