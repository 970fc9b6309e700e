//! Heuristic confidence for a refined clause.

/// Highest confidence a regex-only match can earn.
pub const MAX_CONFIDENCE: f32 = 0.85;

const CAPTURED_ACTION: u32 = 25;
const COMPLETE_CLAUSE: u32 = 25;
const SUBSTANTIAL_LENGTH: u32 = 20;
const STRONG_MODAL: u32 = 15;

/// Score a clause in `[0.0, MAX_CONFIDENCE]`.
///
/// Points: a captured action, a clause that was not cut short, more than
/// 30 chars, and a `shall`/`must` modal. An absent or blank clause scores 0.
pub fn score(clause: Option<&str>, has_captured_action: bool) -> f32 {
    let Some(clause) = clause.map(str::trim).filter(|c| !c.is_empty()) else {
        return 0.0;
    };

    let mut points = 0;
    if has_captured_action {
        points += CAPTURED_ACTION;
    }
    if !clause.ends_with("...") && !clause.ends_with('…') {
        points += COMPLETE_CLAUSE;
    }
    if clause.chars().count() > 30 {
        points += SUBSTANTIAL_LENGTH;
    }
    if has_strong_modal(clause) {
        points += STRONG_MODAL;
    }
    (points as f32 / 100.0).min(MAX_CONFIDENCE)
}

fn has_strong_modal(clause: &str) -> bool {
    clause
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w.eq_ignore_ascii_case("shall") || w.eq_ignore_ascii_case("must"))
}
