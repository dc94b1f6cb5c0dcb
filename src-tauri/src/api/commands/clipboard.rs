//! Clipboard command module
//!
//! Explicit clipboard writes surface failures to the user; only the
//! watcher's background reads are silently retried.

use ditto_core::ClipboardProvider;
use tauri::AppHandle;

use crate::shared::emit::notify;
use crate::shared::errors::{CommandError, CommandResult};
use crate::shared::events::Notification;
use crate::system::clipboard::TauriClipboard;

/// Report a failed clipboard action as a warning and hand the error back
fn warn_on_failure<T>(app: &AppHandle, result: CommandResult<T>) -> CommandResult<T> {
    if let Err(e) = &result {
        notify(app, Notification::warning(e.to_string()));
    }
    result
}

/// Treat a missing or empty selection as "nothing to copy"
fn non_empty_selection(selection: Option<String>) -> CommandResult<String> {
    selection
        .filter(|text| !text.is_empty())
        .ok_or(CommandError::SelectionEmpty)
}

#[tauri::command]
pub fn clear_clipboard(app: AppHandle) -> CommandResult<()> {
    let result = TauriClipboard::new(app.clone())
        .write_text("")
        .map_err(CommandError::from);
    warn_on_failure(&app, result)?;

    notify(&app, Notification::info("Current clipboard content cleared!"));
    Ok(())
}

/// Copy the text selected in the display pane
#[tauri::command]
pub fn copy_selection(app: AppHandle, selection: Option<String>) -> CommandResult<()> {
    let result = non_empty_selection(selection).and_then(|text| {
        TauriClipboard::new(app.clone())
            .write_text(&text)
            .map_err(CommandError::from)
    });
    warn_on_failure(&app, result)?;

    notify(&app, Notification::info("Copied to clipboard!"));
    Ok(())
}

/// Current clipboard text, for the frontend to insert at the cursor
#[tauri::command]
pub fn paste_from_clipboard(app: AppHandle) -> CommandResult<String> {
    let result = TauriClipboard::new(app.clone())
        .read_text()
        .map_err(CommandError::from);
    let text = warn_on_failure(&app, result)?;

    notify(&app, Notification::info("Pasted from clipboard!"));
    Ok(text)
}
