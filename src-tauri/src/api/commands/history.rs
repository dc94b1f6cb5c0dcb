//! History command module
//!
//! Read access and user-triggered mutations of the clipboard history.

use ditto_core::{ClipboardContext, HistoryMatch};
use log::error;
use tauri::{AppHandle, State};

use crate::shared::emit::{emit_event, notify};
use crate::shared::errors::CommandResult;
use crate::shared::events::{AppEvent, Notification};

/// All entries, oldest first
#[tauri::command]
pub fn get_history(ctx: State<'_, ClipboardContext>) -> Vec<String> {
    ctx.snapshot()
}

#[tauri::command]
pub fn search_history(ctx: State<'_, ClipboardContext>, query: String) -> Vec<HistoryMatch> {
    ctx.search(&query)
}

/// Display pane text for the current search box contents
#[tauri::command]
pub fn render_history(ctx: State<'_, ClipboardContext>, query: Option<String>) -> String {
    ctx.listing(query.as_deref().unwrap_or_default())
}

#[tauri::command]
pub fn clear_history(app: AppHandle, ctx: State<'_, ClipboardContext>) -> CommandResult<()> {
    ctx.clear();
    emit_event(&app, AppEvent::HistoryCleared);
    notify(&app, Notification::info("All saved clipboard content cleared!"));
    Ok(())
}

/// Write the history file and report where it went
#[tauri::command]
pub async fn export_history(app: AppHandle, ctx: State<'_, ClipboardContext>) -> CommandResult<String> {
    match ctx.export() {
        Ok(path) => {
            let path = path.display().to_string();
            notify(
                &app,
                Notification::info(format!("Clipboard history exported to {}", path)),
            );
            Ok(path)
        }
        Err(e) => {
            error!("Export failed: {}", e);
            notify(&app, Notification::error(e.to_string()));
            Err(e.into())
        }
    }
}
