//! Outbound notifications from portal state to the web view.

use crate::alerts::AlertFeedSnapshot;

pub const ALERTS_CHANGED_EVENT: &str = "alerts-changed";

pub trait EventSink: Send + Sync {
    fn emit_alerts_changed(&self, snapshot: &AlertFeedSnapshot);
}

/// Drops every event. Used when nothing is listening.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit_alerts_changed(&self, _snapshot: &AlertFeedSnapshot) {}
}

#[cfg(feature = "desktop")]
impl EventSink for tauri::AppHandle {
    fn emit_alerts_changed(&self, snapshot: &AlertFeedSnapshot) {
        use tauri::Emitter;

        if let Err(err) = self.emit(ALERTS_CHANGED_EVENT, snapshot) {
            log::warn!("failed to emit {ALERTS_CHANGED_EVENT}: {err}");
        }
    }
}
