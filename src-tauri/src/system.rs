//! OS integration: clipboard access, the capture task, tray icon and
//! main-window visibility.

pub mod capture;
pub mod clipboard;
pub mod tray;
pub mod window;
