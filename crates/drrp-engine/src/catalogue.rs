//! Compiled actor catalogues.
//!
//! Each side (government, governed) is an ordered list of [`ActorCategory`]
//! entries built once from the tables in [`crate::actors`]. Entries are kept
//! in descending label order so specific labels are tried before the
//! generic labels they extend. Pronoun entries always come last.

use std::ops::Range;

use drrp_core::Side;
use fancy_regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

pub use crate::actors::ActorRow;
use crate::actors::{GOVERNED, GOVERNED_PRONOUNS, GOVERNMENT};
use crate::error::PatternError;

const STOPWORDS: &[&str] = &["and", "the", "for", "of", "in", "sub"];

/// One actor: a hierarchical label plus its compiled recognition pattern.
#[derive(Debug)]
pub struct ActorCategory {
    pub label: String,
    pub side: Side,
    /// OR-joined fragment source, suitable for embedding in role patterns.
    pub source: String,
    pronoun: bool,
    pattern: Regex,
    keywords: Vec<String>,
}

impl ActorCategory {
    pub fn compile(
        label: &str,
        fragments: &[&str],
        side: Side,
        pronoun: bool,
        backtrack_limit: usize,
    ) -> Result<Self, PatternError> {
        let source = join_fragments(fragments);
        let wrapped = format!(r"\b(?i:{source})\b");
        let pattern = build_regex(&wrapped, backtrack_limit).map_err(|e| PatternError::Compile {
            label: label.to_string(),
            source: e,
        })?;
        Ok(Self {
            label: label.to_string(),
            side,
            source,
            pronoun,
            pattern,
            keywords: label_keywords(label),
        })
    }

    pub fn is_pronoun(&self) -> bool {
        self.pronoun
    }

    /// Lowercase stems derived from the label, used for cheap presence checks.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// All match spans in `text`. Execution errors end the scan.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        for m in self.pattern.find_iter(text) {
            match m {
                Ok(m) => spans.push(m.start()..m.end()),
                Err(source) => {
                    let err = PatternError::Runtime { label: self.label.clone(), source };
                    warn!(error = %err, "actor scan aborted");
                    break;
                }
            }
        }
        spans
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self.pattern.is_match(text) {
            Ok(hit) => hit,
            Err(source) => {
                let err = PatternError::Runtime { label: self.label.clone(), source };
                warn!(error = %err, "actor check treated as no match");
                false
            }
        }
    }

    /// Whether `text` plausibly names this actor: a label stem occurs in it,
    /// or the actor's own pattern matches.
    pub fn mentioned_in(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str())) || self.is_match(text)
    }
}

/// An ordered, compiled catalogue for one side.
#[derive(Debug)]
pub struct ActorCatalogue {
    side: Side,
    entries: Vec<ActorCategory>,
}

impl ActorCatalogue {
    pub fn government(backtrack_limit: usize) -> Self {
        Self::build(Side::Government, GOVERNMENT, &[], backtrack_limit)
    }

    pub fn governed(backtrack_limit: usize) -> Self {
        Self::build(Side::Governed, GOVERNED, GOVERNED_PRONOUNS, backtrack_limit)
    }

    /// Compile a catalogue. Rows whose pattern fails to compile are logged
    /// and left out; the rest of the catalogue stays usable.
    pub fn build(
        side: Side,
        rows: &[ActorRow],
        pronouns: &[ActorRow],
        backtrack_limit: usize,
    ) -> Self {
        let compile = |rows: &[ActorRow], pronoun: bool| -> Vec<ActorCategory> {
            rows.iter()
                .filter_map(|(label, fragments)| {
                    match ActorCategory::compile(label, fragments, side, pronoun, backtrack_limit) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            warn!(error = %e, "skipping actor entry");
                            None
                        }
                    }
                })
                .collect()
        };

        let mut entries = compile(rows, false);
        entries.sort_by(|a, b| b.label.cmp(&a.label));
        entries.extend(compile(pronouns, true));

        debug!(side = side.as_str(), entries = entries.len(), "actor catalogue compiled");
        Self { side, entries }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Entries in evaluation order.
    pub fn entries(&self) -> &[ActorCategory] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&ActorCategory> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Entries whose label is in `labels`, in catalogue order.
    pub fn present<'a>(&'a self, labels: &'a [String]) -> impl Iterator<Item = &'a ActorCategory> + 'a {
        self.entries
            .iter()
            .filter(move |e| labels.iter().any(|l| *l == e.label))
    }
}

pub(crate) fn build_regex(source: &str, backtrack_limit: usize) -> Result<Regex, fancy_regex::Error> {
    RegexBuilder::new(source).backtrack_limit(backtrack_limit).build()
}

/// Longest fragment first so alternation prefers the fuller phrase.
fn join_fragments(fragments: &[&str]) -> String {
    let mut sorted: Vec<&str> = fragments.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let parts: Vec<String> = sorted
        .iter()
        .map(|f| format!("(?:{})", f.trim().replace(' ', r"\s+")))
        .collect();
    parts.join("|")
}

/// Stems from the specific segments of a label.
///
/// `"Gvt: Authority: Planning"` yields `["author", "planni"]`. A single
/// segment label such as `"Crown"` uses that segment.
fn label_keywords(label: &str) -> Vec<String> {
    let segments: Vec<&str> = label.split(':').map(str::trim).filter(|s| !s.is_empty()).collect();
    let specific = if segments.len() > 1 { &segments[1..] } else { &segments[..] };

    let mut out: Vec<String> = Vec::new();
    for segment in specific {
        for word in segment.split(|c: char| !c.is_alphanumeric()) {
            let word = word.to_lowercase();
            if word.len() < 3 || STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            let stem: String = word.chars().take(6).collect();
            if !out.contains(&stem) {
                out.push(stem);
            }
        }
    }
    out
}
