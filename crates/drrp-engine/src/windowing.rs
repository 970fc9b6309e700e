//! Modal-anchored windows for long documents.
//!
//! Role matching over very large texts is replaced by matching inside short
//! windows around each modal verb. A duty whose subject sits further from
//! its modal than the window reach is missed; that trade-off is accepted.

use std::ops::Range;

use regex::Regex;
use tracing::{debug, warn};

use crate::catalogue::ActorCategory;
use crate::text::{ceil_boundary, floor_boundary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWindow {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

#[derive(Debug)]
pub struct Windowing {
    modal: Regex,
    non_modal: Regex,
    before: usize,
    after: usize,
}

impl Windowing {
    pub fn new(before: usize, after: usize) -> Self {
        Self {
            modal: fixed("window anchors", r"\b(?:shall|must|may(?:\s+(?:not|only))?)\b"),
            non_modal: fixed(
                "window anchors",
                r"\b(?:(?:is|are)\s+(?:liable|entitled)|owes?\s+a\s+duty|ha(?:s|ve)\s+(?:the\s+)?(?:power|right))\b",
            ),
            before,
            after,
        }
    }

    /// Byte ranges of every anchor in `text`, in order.
    pub fn anchors(&self, text: &str) -> Vec<Range<usize>> {
        let mut out: Vec<Range<usize>> = self
            .modal
            .find_iter(text)
            .chain(self.non_modal.find_iter(text))
            .map(|m| m.start()..m.end())
            .collect();
        out.sort_by_key(|r| (r.start, r.end));
        out
    }

    /// Merged windows around every anchor.
    pub fn windows(&self, text: &str) -> Vec<TextWindow> {
        let ranges = self
            .anchors(text)
            .into_iter()
            .map(|a| {
                let start = floor_boundary(text, a.start.saturating_sub(self.before));
                let end = ceil_boundary(text, a.end.saturating_add(self.after));
                start..end
            })
            .collect();
        let windows: Vec<TextWindow> = merge_ranges(ranges)
            .into_iter()
            .map(|r| TextWindow {
                start: r.start,
                end: r.end,
                content: text[r].to_string(),
            })
            .collect();
        debug!(len = text.len(), windows = windows.len(), "windowed long text");
        windows
    }
}

/// Merge overlapping or touching ranges. Input need not be sorted.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);
    let mut out: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match out.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => out.push(r),
        }
    }
    out
}

/// Cheap pre-check: does any window mention the actor at all?
pub fn actor_in_windows(actor: &ActorCategory, windows: &[TextWindow]) -> bool {
    windows.iter().any(|w| {
        let lower = w.content.to_lowercase();
        actor.keywords().iter().any(|k| lower.contains(k.as_str())) || actor.is_match(&w.content)
    })
}

/// Compile a built-in pattern the engine cannot run without. These are
/// literals, so a failure is a bug in `table`.
pub(crate) fn fixed(table: &str, source: &str) -> Regex {
    match Regex::new(source) {
        Ok(re) => re,
        Err(e) => panic!("invalid built-in pattern in {table} {source:?}: {e}"),
    }
}

/// Compile one rule of a linear-time rule table, logging and skipping it
/// when it does not compile.
pub(crate) fn linear(table: &str, source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(table, error = %e, "skipping rule");
            None
        }
    }
}
