use std::sync::Mutex;
use std::time::Duration;

use ditto_core::ClipboardContext;
use log::{info, warn};
use tauri::async_runtime::JoinHandle;
use tauri::AppHandle;

use super::clipboard::TauriClipboard;
use crate::shared::emit::emit_event;
use crate::shared::events::AppEvent;

/// Handle of the background capture pipeline, awaited on exit
pub struct CaptureTask(Mutex<Option<JoinHandle<()>>>);

impl CaptureTask {
    pub fn take(&self) -> Option<JoinHandle<()>> {
        match self.0.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => {
                warn!("Capture task mutex poisoned, recovering...");
                poisoned.into_inner().take()
            }
        }
    }
}

/// Start polling the clipboard. Every new history entry is pushed to the UI.
pub fn start(app: &AppHandle, ctx: ClipboardContext, interval: Duration) -> CaptureTask {
    let handle = app.clone();
    let clipboard = TauriClipboard::new(app.clone());

    let task = tauri::async_runtime::spawn(async move {
        ctx.run_capture(clipboard, interval, move |change| {
            emit_event(&handle, AppEvent::HistoryUpdated(change));
        })
        .await;
    });

    info!("Clipboard monitoring started");
    CaptureTask(Mutex::new(Some(task)))
}

/// Stop the capture pipeline and wait until every captured entry is applied.
pub async fn stop(ctx: &ClipboardContext, task: &CaptureTask) {
    ctx.cancel();
    if let Some(handle) = task.take() {
        if let Err(e) = handle.await {
            warn!("Capture task ended abnormally: {}", e);
        }
    }
}
