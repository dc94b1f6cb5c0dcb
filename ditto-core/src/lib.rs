//! Ditto core
//!
//! Toolkit-independent half of the Ditto clipboard manager.
//!
//! - `history`: deduplicated, insertion-ordered store persisted as a JSON array
//! - `search`: case-insensitive filtering and the display listing
//! - `watcher`: clipboard polling and change detection
//! - `context`: the capture pipeline shared by the watcher and the UI layer
//! - `window`: visible / tray-only window mode
//! - `settings`: user settings stored in the platform config dir

pub mod clipboard;
pub mod context;
pub mod error;
pub mod history;
pub mod search;
pub mod settings;
pub mod watcher;
pub mod window;

pub use clipboard::ClipboardProvider;
pub use context::{ClipboardContext, HistoryChange};
pub use error::{ClipboardAccessError, PersistenceError, SettingsError};
pub use history::{ClipboardEntry, HistoryStore};
pub use search::{render_listing, search, HistoryMatch, Matches};
pub use settings::{Appearance, Settings};
pub use watcher::ClipboardWatcher;
pub use window::{WindowMode, WindowState};
