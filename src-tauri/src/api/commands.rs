//! Command modules for Tauri application
//!
//! - `history`: browse, search, clear and export the clipboard history
//! - `clipboard`: direct clipboard actions (clear, copy selection, paste)
//! - `settings`: settings and theme
//! - `window`: tray handoff

pub mod clipboard;
pub mod history;
pub mod settings;
pub mod window;
