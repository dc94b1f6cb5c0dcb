use ditto_core::{ClipboardAccessError, ClipboardProvider};
use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

/// Non-text or emptied clipboards read as `""`, not as an access failure,
/// so they count as the clipboard moving away from the last capture.
fn text_or_empty(read: Result<String, String>) -> Result<String, ClipboardAccessError> {
    match read {
        Ok(text) => Ok(text),
        Err(message) if holds_no_text(&message) => Ok(String::new()),
        Err(message) => Err(ClipboardAccessError::new(message)),
    }
}

fn holds_no_text(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("not available") || message.contains("clipboard is empty")
}

/// System clipboard through Tauri's clipboard manager plugin
#[derive(Clone)]
pub struct TauriClipboard {
    app: AppHandle,
}

impl TauriClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardProvider for TauriClipboard {
    fn read_text(&self) -> Result<String, ClipboardAccessError> {
        text_or_empty(self.app.clipboard().read_text().map_err(|e| e.to_string()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        self.app
            .clipboard()
            .write_text(text.to_string())
            .map_err(|e| ClipboardAccessError::new(format!("Failed to write to clipboard: {}", e)))
    }
}
