//! Main window lifecycle
//!
//! Visible <-> tray-only transitions go through `WindowState` in the
//! clipboard context; these functions apply the outcome to the real window
//! and tray icon.

use std::sync::atomic::{AtomicBool, Ordering};

use ditto_core::{Appearance, ClipboardContext};
use log::{error, info, warn};
use tauri::{AppHandle, ExitRequestApi, Manager, Theme, WebviewWindow};

use super::{capture, tray};
use crate::shared::errors::{CommandError, CommandResult};

pub const MAIN_WINDOW: &str = "main";

pub fn main_window(app: &AppHandle) -> CommandResult<WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW)
        .ok_or_else(|| CommandError::WindowError("Main window not found".to_string()))
}

/// Hide the main window and show the tray icon in its place.
///
/// The tray icon goes up first so a failed hide never leaves the app with
/// neither surface on screen.
pub fn hide_to_tray(app: &AppHandle) -> CommandResult<()> {
    let ctx = app.state::<ClipboardContext>();
    let window = main_window(app)?;

    let hidden = ctx.window().hide_to_tray_with(|| {
        tray::set_visible(app, true)?;
        if let Err(e) = window.hide() {
            if let Err(tray_err) = tray::set_visible(app, false) {
                warn!("Failed to take down tray icon: {}", tray_err);
            }
            return Err(CommandError::from(e));
        }
        Ok(())
    })?;

    if hidden {
        info!("Main window hidden to tray");
    }
    Ok(())
}

/// Bring the main window back and hide the tray icon.
pub fn restore_from_tray(app: &AppHandle) -> CommandResult<()> {
    let ctx = app.state::<ClipboardContext>();
    let window = main_window(app)?;

    let restored = ctx.window().restore_with(|| {
        window.show()?;
        // The window is back; a lingering tray icon is harmless
        if let Err(e) = tray::set_visible(app, false) {
            warn!("Failed to hide tray icon: {}", e);
        }
        Ok::<(), CommandError>(())
    })?;

    if restored {
        info!("Main window restored from tray");
    }

    window.unminimize()?;
    window.set_focus()?;
    Ok(())
}

/// Set right before `app.exit`, once history is on disk
#[derive(Default)]
pub struct ExitGate(AtomicBool);

impl ExitGate {
    fn open(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// What to do with an exit request from the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// History is saved, let the app quit
    Proceed,
    /// Hold the exit and run the shutdown sequence
    Shutdown,
    /// Hold the exit, a shutdown is already running and will quit itself
    Wait,
}

pub fn exit_action(gate_open: bool, capture_cancelled: bool) -> ExitAction {
    if gate_open {
        ExitAction::Proceed
    } else if capture_cancelled {
        ExitAction::Wait
    } else {
        ExitAction::Shutdown
    }
}

/// Stop capturing, persist history, then quit.
pub async fn exit_application(app: &AppHandle) {
    let ctx = app.state::<ClipboardContext>().inner().clone();
    let task = app.state::<capture::CaptureTask>();

    capture::stop(&ctx, &task).await;

    if let Err(e) = ctx.persist() {
        error!("Failed to save clipboard history on exit: {}", e);
    }

    app.state::<ExitGate>().open();
    app.exit(0);
}

/// Route an `ExitRequested` through the same cancel, await, persist order
/// as the tray's Exit item.
pub fn on_exit_requested(app: &AppHandle, api: &ExitRequestApi) {
    let gate_open = app.state::<ExitGate>().is_open();
    let cancelled = app.state::<ClipboardContext>().is_cancelled();

    match exit_action(gate_open, cancelled) {
        ExitAction::Proceed => {}
        ExitAction::Wait => api.prevent_exit(),
        ExitAction::Shutdown => {
            api.prevent_exit();
            info!("Exit requested, saving clipboard history first");
            let app = app.clone();
            tauri::async_runtime::spawn(async move {
                exit_application(&app).await;
            });
        }
    }
}

pub fn theme_for(appearance: Appearance) -> Option<Theme> {
    match appearance {
        Appearance::System => None,
        Appearance::Light => Some(Theme::Light),
        Appearance::Dark => Some(Theme::Dark),
    }
}

/// What the window is showing right now, with `System` resolved.
pub fn current_appearance(window: &WebviewWindow) -> CommandResult<Appearance> {
    Ok(match window.theme()? {
        Theme::Dark => Appearance::Dark,
        _ => Appearance::Light,
    })
}
