//! Settings command module
//!
//! Handles settings access and the theme toggle.

use ditto_core::{Appearance, Settings};
use log::warn;
use tauri::{AppHandle, State, WebviewWindow};
use tokio::sync::Mutex;

use crate::shared::emit::emit_event;
use crate::shared::errors::CommandResult;
use crate::shared::events::{AppEvent, Notification};
use crate::system::window::{current_appearance, theme_for};

/// Settings loaded at startup, kept current by the commands below
pub type SettingsState = Mutex<Settings>;

/// Message held back until the frontend is listening (load failures at startup)
pub struct StartupNotice(pub Option<Notification>);

#[tauri::command]
pub async fn get_settings(settings: State<'_, SettingsState>) -> CommandResult<Settings> {
    Ok(settings.lock().await.clone())
}

#[tauri::command]
pub fn get_startup_notice(notice: State<'_, StartupNotice>) -> Option<Notification> {
    notice.0.clone()
}

/// Flip between light and dark and remember the choice
#[tauri::command]
pub async fn toggle_theme(
    app: AppHandle,
    window: WebviewWindow,
    settings: State<'_, SettingsState>,
) -> CommandResult<Appearance> {
    let next = current_appearance(&window)?.toggled();
    window.set_theme(theme_for(next))?;

    let mut settings = settings.lock().await;
    settings.appearance = next;
    if let Err(e) = settings.save().await {
        warn!("Failed to persist theme: {}", e);
    }

    emit_event(&app, AppEvent::ThemeChanged(next));
    Ok(next)
}
