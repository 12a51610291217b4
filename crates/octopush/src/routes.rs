use axum::{
	middleware,
	routing::{get, post},
	Router,
};

use crate::app::App;
use octopush_core::middleware::require_credential;
use octopush_notify::handler as notify_handler;
use octopush_profile::handler as profile_handler;

/// Assembles the relay's route surface. Every operation sits behind the
/// credential gate; there is no public route.
pub fn init(app: App) -> Router {
	Router::new()
		.route("/sendEvent", post(notify_handler::post_send_event))
		.route("/registerFCMToken", post(profile_handler::post_register_token))
		.route("/unregisterFCMToken", post(profile_handler::post_unregister_token))
		.route("/getProfile", get(profile_handler::get_profile))
		.route("/setProfile", post(profile_handler::post_profile))
		.route("/registerOctoprintInstance", post(profile_handler::post_register_instance))
		.layer(middleware::from_fn(require_credential))
		.with_state(app)
}

// vim: ts=4
