//! Window command module

use tauri::AppHandle;

use crate::shared::errors::CommandResult;
use crate::system::window;

/// Minimize to the tray
#[tauri::command]
pub fn hide_to_tray(app: AppHandle) -> CommandResult<()> {
    window::hide_to_tray(&app)
}
