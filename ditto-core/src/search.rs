use std::iter::Enumerate;
use std::slice;

use serde::Serialize;

use crate::history::ClipboardEntry;

/// A search hit: 1-based position in the history and the entry text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryMatch {
    pub position: usize,
    pub text: String,
}

/// Lazy case-insensitive substring filter over history entries.
///
/// Cloning restarts the walk from the current point, so a fresh
/// `search` call or a clone taken up front can be iterated again.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    entries: Enumerate<slice::Iter<'a, ClipboardEntry>>,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.entries
            .by_ref()
            .find(|(_, text)| needle.is_empty() || text.to_lowercase().contains(needle.as_str()))
            .map(|(idx, text)| (idx + 1, text.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

/// Filter `entries` by `query`. An empty query matches everything.
pub fn search<'a>(entries: &'a [ClipboardEntry], query: &str) -> Matches<'a> {
    Matches {
        entries: entries.iter().enumerate(),
        needle: query.to_lowercase(),
    }
}

impl<'a> From<(usize, &'a str)> for HistoryMatch {
    fn from((position, text): (usize, &'a str)) -> Self {
        Self {
            position,
            text: text.to_string(),
        }
    }
}

/// Render matches the way the display pane shows them: `"<index>: <text>\n\n"`.
pub fn render_listing<'a, I>(matches: I) -> String
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    matches
        .into_iter()
        .map(|(position, text)| format!("{}: {}\n\n", position, text))
        .collect()
}
