use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::clipboard::ClipboardProvider;

/// Poll interval used when nothing else is configured
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Read failures are logged on the first occurrence and every Nth after that
const ERROR_LOG_EVERY: u32 = 10;

/// Clipboard change detector.
///
/// Between ticks the watcher is idle; on each tick it reads the clipboard and
/// compares the snapshot with the last one it saw. The last-seen value only
/// follows the clipboard, never the history store, so clearing history does
/// not make the current clipboard text eligible for capture again.
#[derive(Debug, Default)]
pub struct ClipboardWatcher {
    last_seen: String,
    consecutive_errors: u32,
}

impl ClipboardWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// Compare a fresh snapshot with the last one seen.
    ///
    /// Returns the text when it changed and is not blank.
    pub fn observe(&mut self, current: String) -> Option<String> {
        if current == self.last_seen {
            return None;
        }
        self.last_seen = current;

        if self.last_seen.trim().is_empty() {
            None
        } else {
            Some(self.last_seen.clone())
        }
    }

    /// Run one tick against `clipboard`. Read failures are treated as transient.
    pub fn poll<C: ClipboardProvider + ?Sized>(&mut self, clipboard: &C) -> Option<String> {
        match clipboard.read_text() {
            Ok(current) => {
                self.consecutive_errors = 0;
                self.observe(current)
            }
            Err(e) => {
                self.consecutive_errors += 1;
                if self.consecutive_errors == 1 || self.consecutive_errors % ERROR_LOG_EVERY == 0 {
                    warn!(
                        "Failed to read clipboard (error #{}): {}",
                        self.consecutive_errors, e
                    );
                } else {
                    debug!("Clipboard read failed again: {}", e);
                }
                None
            }
        }
    }

    /// Poll `clipboard` every `interval` until `cancel` fires, sending each
    /// captured snapshot to `captured`.
    ///
    /// Also stops when the receiving side of `captured` is dropped.
    pub async fn run<C: ClipboardProvider>(
        mut self,
        clipboard: C,
        interval: Duration,
        captured: UnboundedSender<String>,
        cancel: CancellationToken,
    ) {
        info!("Clipboard watcher started ({} ms interval)", interval.as_millis());

        while !cancel.is_cancelled() {
            if let Some(text) = self.poll(&clipboard) {
                debug!("Clipboard changed ({} bytes)", text.len());
                if captured.send(text).is_err() {
                    debug!("Capture channel closed");
                    break;
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        info!("Clipboard watcher stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardAccessError;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    /// Replays a fixed sequence of reads, then keeps returning the last one.
    struct ScriptedClipboard {
        reads: Mutex<VecDeque<Result<String, ClipboardAccessError>>>,
        last: Mutex<String>,
    }

    impl ScriptedClipboard {
        fn new(reads: Vec<Result<&str, &str>>) -> Self {
            let reads = reads
                .into_iter()
                .map(|r| r.map(str::to_string).map_err(ClipboardAccessError::new))
                .collect();
            Self {
                reads: Mutex::new(reads),
                last: Mutex::new(String::new()),
            }
        }
    }

    impl ClipboardProvider for ScriptedClipboard {
        fn read_text(&self) -> Result<String, ClipboardAccessError> {
            match self.reads.lock().pop_front() {
                Some(Ok(text)) => {
                    *self.last.lock() = text.clone();
                    Ok(text)
                }
                Some(Err(e)) => Err(e),
                None => Ok(self.last.lock().clone()),
            }
        }

        fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
            *self.last.lock() = text.to_string();
            Ok(())
        }
    }

    #[test]
    fn test_unchanged_snapshot_is_ignored() {
        let mut watcher = ClipboardWatcher::new();
        assert_eq!(watcher.observe("A".to_string()), Some("A".to_string()));

        assert_eq!(watcher.observe("A".to_string()), None);
        assert_eq!(watcher.last_seen(), "A");
    }

    #[test]
    fn test_changed_snapshot_is_captured() {
        let mut watcher = ClipboardWatcher::new();
        watcher.observe("A".to_string());

        assert_eq!(watcher.observe("B".to_string()), Some("B".to_string()));
        assert_eq!(watcher.last_seen(), "B");
    }

    #[test]
    fn test_blank_change_updates_last_seen_only() {
        let mut watcher = ClipboardWatcher::new();
        watcher.observe("A".to_string());

        assert_eq!(watcher.observe("   ".to_string()), None);
        assert_eq!(watcher.last_seen(), "   ");

        // Coming back to "A" is a change again.
        assert_eq!(watcher.observe("A".to_string()), Some("A".to_string()));
    }

    #[test]
    fn test_initial_empty_clipboard_is_not_a_change() {
        let mut watcher = ClipboardWatcher::new();
        assert_eq!(watcher.observe(String::new()), None);
    }

    #[test]
    fn test_read_failure_keeps_last_seen() {
        let clipboard = ScriptedClipboard::new(vec![Ok("A"), Err("busy"), Ok("A")]);
        let mut watcher = ClipboardWatcher::new();

        assert_eq!(watcher.poll(&clipboard), Some("A".to_string()));
        assert_eq!(watcher.poll(&clipboard), None);
        assert_eq!(watcher.last_seen(), "A");
        assert_eq!(watcher.poll(&clipboard), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_sends_changes_until_cancelled() {
        let clipboard = Arc::new(ScriptedClipboard::new(vec![
            Ok(""),
            Ok("cat"),
            Err("locked"),
            Ok("cat"),
            Ok("dog"),
        ]));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task = tokio::spawn(ClipboardWatcher::new().run(
            clipboard.clone(),
            Duration::from_millis(100),
            tx,
            cancel.clone(),
        ));

        assert_eq!(rx.recv().await.as_deref(), Some("cat"));
        assert_eq!(rx.recv().await.as_deref(), Some("dog"));

        cancel.cancel();
        task.await.unwrap();

        // Sender dropped with the watcher, nothing else was sent.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_receiver_dropped() {
        let clipboard = ScriptedClipboard::new(vec![Ok("one"), Ok("two")]);
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        ClipboardWatcher::new()
            .run(clipboard, Duration::from_millis(100), tx, CancellationToken::new())
            .await;
    }

    #[tokio::test]
    async fn test_run_returns_immediately_when_already_cancelled() {
        let clipboard = ScriptedClipboard::new(vec![Ok("never read")]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        cancel.cancel();

        ClipboardWatcher::new()
            .run(clipboard, DEFAULT_POLL_INTERVAL, tx, cancel)
            .await;

        assert_eq!(rx.recv().await, None);
    }
}
