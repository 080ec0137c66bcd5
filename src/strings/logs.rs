//! # Log Strings
//!
//! Messages written to the tracing log during startup and shutdown.

pub fn config_loaded(path: &str, user: &str) -> String {
    format!("Loaded configuration from {path} for user: {user}")
}

pub const STARTING: &str = "Starting Bazaar...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn send_failed(room: &str, err: &str) -> String {
    format!("Failed to send reply to {room}: {err}")
}
