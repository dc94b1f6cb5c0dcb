use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

/// Which surface currently owns the user's attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Main window shown, tray icon hidden
    Visible,
    /// Main window hidden, tray icon shown
    TrayOnly,
}

/// Shared window mode. `hide_to_tray` and `restore` (and their `_with`
/// variants) are the only mutators.
#[derive(Debug, Clone)]
pub struct WindowState {
    mode: Arc<Mutex<WindowMode>>,
}

impl WindowState {
    pub fn new() -> Self {
        Self {
            mode: Arc::new(Mutex::new(WindowMode::Visible)),
        }
    }

    pub fn mode(&self) -> WindowMode {
        *self.mode.lock()
    }

    /// Visible -> TrayOnly. Returns false if already in the tray.
    pub fn hide_to_tray(&self) -> bool {
        self.transition(WindowMode::Visible, WindowMode::TrayOnly)
    }

    /// TrayOnly -> Visible. Returns false if already visible.
    pub fn restore(&self) -> bool {
        self.transition(WindowMode::TrayOnly, WindowMode::Visible)
    }

    /// Visible -> TrayOnly, kept only if `apply` succeeds.
    ///
    /// `apply` is not called when already in the tray. On error the mode is
    /// put back to Visible so the next attempt runs again.
    pub fn hide_to_tray_with<E>(&self, apply: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        self.transition_with(WindowMode::Visible, WindowMode::TrayOnly, apply)
    }

    /// TrayOnly -> Visible, kept only if `apply` succeeds.
    pub fn restore_with<E>(&self, apply: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        self.transition_with(WindowMode::TrayOnly, WindowMode::Visible, apply)
    }

    // The lock is not held while `apply` runs: window calls may hop to the
    // event loop thread, which can itself be waiting on this state.
    fn transition_with<E>(
        &self,
        from: WindowMode,
        to: WindowMode,
        apply: impl FnOnce() -> Result<(), E>,
    ) -> Result<bool, E> {
        if !self.transition(from, to) {
            return Ok(false);
        }
        if let Err(e) = apply() {
            self.transition(to, from);
            return Err(e);
        }
        Ok(true)
    }

    fn transition(&self, from: WindowMode, to: WindowMode) -> bool {
        let mut mode = self.mode.lock();
        if *mode != from {
            return false;
        }
        *mode = to;
        true
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new()
    }
}
