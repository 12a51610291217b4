//! Printer lifecycle events eligible for notification dispatch.

/// The fixed whitelist of events that produce a push notification.
/// Everything else a printer can emit is valid traffic but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterEvent {
	Shutdown,
	Startup,
	Disconnected,
	Error,
	PrintStarted,
	PrintFailed,
	PrintDone,
	PrintCancelled,
}

impl PrinterEvent {
	/// Whitelist membership test. `None` is not an error: unknown events
	/// are acknowledged and dropped, case-sensitively.
	pub fn parse(event: &str) -> Option<Self> {
		match event {
			"Shutdown" => Some(PrinterEvent::Shutdown),
			"Startup" => Some(PrinterEvent::Startup),
			"Disconnected" => Some(PrinterEvent::Disconnected),
			"Error" => Some(PrinterEvent::Error),
			"PrintStarted" => Some(PrinterEvent::PrintStarted),
			"PrintFailed" => Some(PrinterEvent::PrintFailed),
			"PrintDone" => Some(PrinterEvent::PrintDone),
			"PrintCancelled" => Some(PrinterEvent::PrintCancelled),
			_ => None,
		}
	}

	/// The event tag as it appears on the wire and in notification bodies
	pub fn as_str(&self) -> &'static str {
		match self {
			PrinterEvent::Shutdown => "Shutdown",
			PrinterEvent::Startup => "Startup",
			PrinterEvent::Disconnected => "Disconnected",
			PrinterEvent::Error => "Error",
			PrinterEvent::PrintStarted => "PrintStarted",
			PrinterEvent::PrintFailed => "PrintFailed",
			PrinterEvent::PrintDone => "PrintDone",
			PrinterEvent::PrintCancelled => "PrintCancelled",
		}
	}
}

impl std::fmt::Display for PrinterEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}


// vim: ts=4
