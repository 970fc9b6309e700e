//! False-positive stripping ahead of actor extraction and role matching.

use crate::actors::FALSE_POSITIVES;

/// Replace every blacklisted phrase with a single space.
///
/// Repeats until no phrase remains, so applying it twice gives the same
/// result as applying it once.
pub fn strip_false_positives(text: &str) -> String {
    strip_phrases(text, FALSE_POSITIVES)
}

pub(crate) fn strip_phrases(text: &str, phrases: &[&str]) -> String {
    let mut out = text.to_string();
    loop {
        let mut changed = false;
        for phrase in phrases {
            if !phrase.is_empty() && out.contains(phrase) {
                out = out.replace(phrase, " ");
                changed = true;
            }
        }
        if !changed {
            return out;
        }
    }
}
