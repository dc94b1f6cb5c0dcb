use log::warn;
use tauri::{AppHandle, Emitter};

use super::events::{AppEvent, Notification};

/// Emit an application event to all windows
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    let result = match &event {
        AppEvent::HistoryUpdated(change) => app.emit("history://updated", change),
        AppEvent::HistoryCleared => app.emit("history://cleared", ()),
        AppEvent::Notify(notification) => app.emit("notify://message", notification),
        AppEvent::ThemeChanged(appearance) => app.emit("theme://changed", appearance),
    };

    if let Err(e) = result {
        warn!("Failed to emit {:?}: {}", event, e);
    }
}

/// Shorthand for `emit_event(app, AppEvent::Notify(..))`
pub fn notify(app: &AppHandle, notification: Notification) {
    emit_event(app, AppEvent::Notify(notification));
}
