use std::collections::VecDeque;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use ditto_core::{
    ClipboardAccessError, ClipboardContext, ClipboardProvider, ClipboardWatcher, HistoryStore,
};
use parking_lot::Mutex;
use tempfile::TempDir;

/// Hands out one scripted read per poll, then repeats the last value.
struct SequenceClipboard {
    reads: Mutex<VecDeque<String>>,
    current: Mutex<String>,
}

impl SequenceClipboard {
    fn new(reads: &[&str]) -> Self {
        Self {
            reads: Mutex::new(reads.iter().map(|s| s.to_string()).collect()),
            current: Mutex::new(String::new()),
        }
    }
}

impl ClipboardProvider for SequenceClipboard {
    fn read_text(&self) -> Result<String, ClipboardAccessError> {
        let mut current = self.current.lock();
        if let Some(next) = self.reads.lock().pop_front() {
            *current = next;
        }
        Ok(current.clone())
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        *self.current.lock() = text.to_string();
        Ok(())
    }
}

#[test]
fn polling_sequence_builds_history_and_exports() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clipboard_history.json");

    let (ctx, load_error) = ClipboardContext::load_or_empty(&path);
    assert!(load_error.is_none());
    assert!(ctx.is_empty());

    let clipboard = SequenceClipboard::new(&["", "cat", "cat", "dog"]);
    let mut watcher = ClipboardWatcher::new();
    for _ in 0..4 {
        if let Some(text) = watcher.poll(&clipboard) {
            ctx.ingest(&text);
        }
    }

    assert_eq!(ctx.snapshot(), vec!["cat", "dog"]);

    let written = ctx.export().unwrap();
    let parsed: Vec<String> = serde_json::from_str(&fs::read_to_string(written).unwrap()).unwrap();
    assert_eq!(parsed, vec!["cat", "dog"]);
}

#[test]
fn cleared_value_returns_only_after_clipboard_moves_away() {
    let clipboard = SequenceClipboard::new(&["X", "X", "X", "Y", "X"]);
    let ctx = ClipboardContext::new(HistoryStore::new(), "unused.json");
    let mut watcher = ClipboardWatcher::new();

    let mut tick = |ctx: &ClipboardContext| {
        if let Some(text) = watcher.poll(&clipboard) {
            ctx.ingest(&text);
        }
    };

    tick(&ctx);
    assert_eq!(ctx.snapshot(), vec!["X"]);

    ctx.clear();
    tick(&ctx);
    tick(&ctx);
    assert!(ctx.is_empty());

    tick(&ctx);
    tick(&ctx);
    assert_eq!(ctx.snapshot(), vec!["Y", "X"]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_persists_everything_captured() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clipboard_history.json");
    fs::write(&path, r#"["from last session"]"#).unwrap();

    let (ctx, load_error) = ClipboardContext::load_or_empty(&path);
    assert!(load_error.is_none());

    let clipboard = Arc::new(SequenceClipboard::new(&["", "cat", "cat", "dog"]));
    let runner = ctx.clone();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let seen = changes.clone();

    let task = tokio::spawn(async move {
        runner
            .run_capture(clipboard, Duration::from_secs(1), move |change| {
                seen.lock().push(change.len);
            })
            .await;
    });

    tokio::time::sleep(Duration::from_secs(10)).await;
    ctx.cancel();
    task.await.unwrap();
    ctx.persist().unwrap();

    assert_eq!(*changes.lock(), vec![2, 3]);
    let parsed: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, vec!["from last session", "cat", "dog"]);
}

#[test]
fn non_text_copy_lets_cleared_value_be_captured_again() {
    // An image copy reads as "" between the two text copies
    let clipboard = SequenceClipboard::new(&["X", "", "X"]);
    let ctx = ClipboardContext::new(HistoryStore::new(), "unused.json");
    let mut watcher = ClipboardWatcher::new();

    if let Some(text) = watcher.poll(&clipboard) {
        ctx.ingest(&text);
    }
    ctx.clear();

    assert_eq!(watcher.poll(&clipboard), None);
    if let Some(text) = watcher.poll(&clipboard) {
        ctx.ingest(&text);
    }
    assert_eq!(ctx.snapshot(), vec!["X"]);
}
