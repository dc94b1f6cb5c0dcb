use crate::error::ClipboardAccessError;
use std::sync::Arc;

/// Access to the system clipboard.
///
/// `read_text` fails (or yields an empty string) when the clipboard holds no
/// text. Implementations must be usable from the watcher's background task.
pub trait ClipboardProvider: Send + Sync {
    fn read_text(&self) -> Result<String, ClipboardAccessError>;
    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
}

impl<T: ClipboardProvider + ?Sized> ClipboardProvider for Arc<T> {
    fn read_text(&self) -> Result<String, ClipboardAccessError> {
        (**self).read_text()
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        (**self).write_text(text)
    }
}
