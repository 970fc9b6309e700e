//! Actor extraction: which catalogue labels a text mentions.

use crate::catalogue::ActorCatalogue;
use crate::preprocess::strip_false_positives;
use crate::text::remove_spans;

/// Labels of every catalogue entry mentioned in `text`, sorted and unique.
///
/// Entries are tried in catalogue order against a shrinking copy of the
/// text: once an entry matches, its spans are blanked out, so a generic
/// label never re-matches words already claimed by a more specific one.
/// Pronoun entries are checked last against what remains and never blank
/// anything.
pub fn extract_actors(catalogue: &ActorCatalogue, text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let cleaned = strip_false_positives(text);
    let (remaining, mut found) = catalogue
        .entries()
        .iter()
        .filter(|e| !e.is_pronoun())
        .fold((cleaned, Vec::new()), |(working, mut found), entry| {
            let spans = entry.find_spans(&working);
            if spans.is_empty() {
                return (working, found);
            }
            found.push(entry.label.clone());
            (remove_spans(&working, &spans), found)
        });

    found.extend(
        catalogue
            .entries()
            .iter()
            .filter(|e| e.is_pronoun() && e.is_match(&remaining))
            .map(|e| e.label.clone()),
    );

    found.sort();
    found.dedup();
    found
}
