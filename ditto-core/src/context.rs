//! Capture pipeline context
//!
//! `ClipboardContext` is the one object shared between the clipboard watcher
//! and the UI layer. It owns the history store and the watcher's cancellation
//! token. The watcher never touches the store: it sends captured text over a
//! channel and the pump applies it, so the UI only ever reads a consistent
//! store behind the mutex.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;

use crate::clipboard::ClipboardProvider;
use crate::error::PersistenceError;
use crate::history::{ClipboardEntry, HistoryStore};
use crate::search::{render_listing, HistoryMatch};
use crate::watcher::ClipboardWatcher;
use crate::window::WindowState;

/// Emitted after the pump inserted a new entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryChange {
    pub entry: ClipboardEntry,
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct ClipboardContext {
    history: Arc<Mutex<HistoryStore>>,
    history_path: PathBuf,
    window: WindowState,
    cancel: CancellationToken,
}

impl ClipboardContext {
    pub fn new(history: HistoryStore, history_path: impl Into<PathBuf>) -> Self {
        Self {
            history: Arc::new(Mutex::new(history)),
            history_path: history_path.into(),
            window: WindowState::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Load history from `history_path`, falling back to an empty history.
    ///
    /// The load error, if any, is handed back so the caller can tell the user.
    pub fn load_or_empty(history_path: impl Into<PathBuf>) -> (Self, Option<PersistenceError>) {
        let history_path = history_path.into();
        match HistoryStore::load(&history_path) {
            Ok(history) => (Self::new(history, history_path), None),
            Err(e) => {
                warn!("Failed to load clipboard history, starting empty: {}", e);
                (Self::new(HistoryStore::new(), history_path), Some(e))
            }
        }
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.history.lock().entries().to_vec()
    }

    pub fn len(&self) -> usize {
        self.history.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.lock().is_empty()
    }

    /// Apply one captured snapshot to the store.
    pub fn ingest(&self, text: &str) -> Option<HistoryChange> {
        let mut history = self.history.lock();
        if !history.append(text) {
            debug!("Skipping blank or duplicate clipboard text");
            return None;
        }
        Some(HistoryChange {
            entry: text.to_string(),
            len: history.len(),
        })
    }

    pub fn clear(&self) {
        self.history.lock().clear();
        info!("Cleared clipboard history");
    }

    pub fn search(&self, query: &str) -> Vec<HistoryMatch> {
        self.history
            .lock()
            .search(query)
            .map(HistoryMatch::from)
            .collect()
    }

    /// Display pane text for `query` (everything when empty)
    pub fn listing(&self, query: &str) -> String {
        render_listing(self.history.lock().search(query))
    }

    /// Write the history file. The lock is released before touching disk.
    pub fn persist(&self) -> Result<(), PersistenceError> {
        let snapshot = HistoryStore::from_entries(self.snapshot());
        snapshot.save(&self.history_path)
    }

    /// Persist and return the path written, for the user-facing message.
    pub fn export(&self) -> Result<PathBuf, PersistenceError> {
        self.persist()?;
        Ok(self.history_path.clone())
    }

    /// Ask the running capture pipeline to stop.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run the watcher and the pump until `cancel` is called.
    ///
    /// Returns once the watcher has stopped and every snapshot it sent has
    /// been applied, so a `persist` after this future completes sees all of
    /// them.
    pub async fn run_capture<C, F>(&self, clipboard: C, interval: Duration, mut on_change: F)
    where
        C: ClipboardProvider,
        F: FnMut(HistoryChange) + Send,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let watcher = ClipboardWatcher::new().run(clipboard, interval, tx, self.cancel.clone());

        tokio::join!(watcher, self.pump(rx, &mut on_change));
        info!("Capture pipeline drained ({} entries)", self.len());
    }

    async fn pump<F>(&self, mut captured: UnboundedReceiver<String>, on_change: &mut F)
    where
        F: FnMut(HistoryChange),
    {
        while let Some(text) = captured.recv().await {
            if let Some(change) = self.ingest(&text) {
                on_change(change);
            }
        }
    }
}
