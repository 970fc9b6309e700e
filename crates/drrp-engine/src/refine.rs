//! Clause refinement: turn a raw role match into a readable clause.
//!
//! A clause is `subject + modal + action`. The subject is the text just
//! before the modal, trimmed back to the start of its sentence. The action
//! comes from the captured `action` group when there is one, otherwise
//! from the text following the modal in the source section.

use drrp_core::Role;
use regex::Regex;
use tracing::trace;

use crate::text::{collapse_whitespace, head_chars, sanitize, tail_chars};
use crate::windowing::fixed;

const SUBJECT_CHARS: usize = 100;
const ACTION_CHARS: usize = 200;

const LEADING_CONNECTIVES: &[&str] = &["and", "or", "but", "that", "which", "where", "whereupon", "then", "so"];

const ABBREVIATIONS: &[&str] = &[
    "s", "ss", "reg", "regs", "art", "arts", "para", "paras", "no", "nos", "sch", "pt", "e.g", "i.e", "etc",
    "cf", "viz",
];

/// Punctuation that attaches to the preceding part without a space.
const ATTACHING: &[char] = &[',', ';', ':', '.', ')'];

const CLOSING: &[char] = &['.', ';', '!', '?', ')', '"', '\'', '”', '’', '…'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refined {
    pub subject: String,
    pub modal: String,
    pub action: String,
    pub clause: String,
}

/// Source text for a match, sliced to begin where the match begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'s> {
    pub text: &'s str,
    /// The text stops short of the document (a window edge), so its last
    /// word may be partial.
    pub open_ended: bool,
}

impl<'s> Section<'s> {
    /// What follows the first `len` bytes of the section.
    fn after(&self, len: usize) -> Option<Section<'s>> {
        self.text.get(len..).map(|text| Section { text, open_ended: self.open_ended })
    }

    fn ends_open(&self) -> bool {
        self.open_ended && self.text.trim().is_empty()
    }
}

#[derive(Debug)]
pub struct ClauseRefiner {
    modal: Regex,
    boundary: Regex,
    max_chars: usize,
}

impl ClauseRefiner {
    pub fn new(max_chars: usize) -> Self {
        Self {
            modal: fixed(
                "clause refiner",
                concat!(
                    r"\b(?:shall|must|may",
                    r"|(?:is|are)\s+(?:entitled|liable|required|obliged|empowered|authori[sz]ed|responsible|under\s+a\s+duty)",
                    r"|owes?\s+a\s+duty",
                    r"|ha(?:s|ve)\s+(?:the\s+)?(?:power|right|duty))\b",
                ),
            ),
            boundary: fixed("clause refiner", r"[.;:]\s+[A-Z]"),
            max_chars,
        }
    }

    /// Refine `raw` into a clause, or `None` if nothing readable remains.
    ///
    /// `section` must begin with `raw`; the action is continued from the
    /// section text that follows it.
    pub fn refine(
        &self,
        raw: &str,
        role: Role,
        section: Option<Section<'_>>,
        captured: Option<&str>,
    ) -> Option<Refined> {
        let following = section.and_then(|s| s.after(raw.len()));
        // Whether the text the action is drawn from stops at a window edge.
        let ends_open = match (following, captured) {
            (Some(f), Some(c)) => f.after(c.len()).is_some_and(|rest| rest.ends_open()),
            (Some(f), None) => f.ends_open(),
            (None, _) => false,
        };
        let raw = sanitize(raw);
        let captured = captured.map(sanitize).filter(|c| !c.trim().is_empty());

        // The final modal is the one the pattern anchored on.
        let refined = match self.modal.find_iter(&raw).last() {
            None => {
                let source = captured.unwrap_or_else(|| raw.clone());
                let action = take_action(&source, ends_open);
                self.finish(&[&action])
                    .map(|clause| Refined { subject: String::new(), modal: String::new(), action, clause })
            }
            Some(m) => {
                let subject = self.subject(&raw[..m.start()]);
                let modal = m.as_str().to_string();
                let action = match captured {
                    Some(c) => take_action(&c, ends_open),
                    None => action_after(&raw[m.end()..], following),
                };
                self.finish(&[&subject, &modal, &action])
                    .map(|clause| Refined { subject, modal, action, clause })
            }
        };
        if refined.is_none() {
            trace!(role = role.as_str(), raw = %raw, "match refined to nothing");
        }
        refined
    }

    fn subject(&self, before: &str) -> String {
        let (mut s, cut) = tail_chars(before, SUBJECT_CHARS);
        if cut && let Some(i) = s.find(char::is_whitespace) {
            s = &s[i..];
        }
        if let Some(b) = self.boundary.find_iter(s).last() {
            s = &s[b.end() - 1..];
        }
        let s = s.trim();
        if s.starts_with(char::is_uppercase) {
            return s.to_string();
        }
        strip_leading(s).to_string()
    }

    fn finish(&self, parts: &[&str]) -> Option<String> {
        let mut joined = String::new();
        for part in parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            if !joined.is_empty() && !part.starts_with(ATTACHING) {
                joined.push(' ');
            }
            joined.push_str(part);
        }
        let collapsed = collapse_whitespace(&joined);
        let mut clause = trim_dangling(&collapsed).to_string();
        if clause.is_empty() {
            return None;
        }
        if !clause.ends_with(CLOSING) {
            clause.push_str("...");
        }
        Some(self.bound(clause))
    }

    /// Cap the clause at `max_chars`, preferring a sentence break past the
    /// midpoint, otherwise breaking at a word and adding an ellipsis.
    fn bound(&self, clause: String) -> String {
        if clause.chars().count() <= self.max_chars {
            return clause;
        }
        let budget = self.max_chars.saturating_sub(3);
        let (head, _) = head_chars(&clause, budget);
        let half = head_chars(head, self.max_chars / 2).0.len();

        let sentence_break = head
            .char_indices()
            .filter(|&(i, c)| i >= half && matches!(c, '.' | ';'))
            .filter(|&(i, _)| head[i + 1..].starts_with(char::is_whitespace))
            .map(|(i, _)| i + 1)
            .last();
        if let Some(end) = sentence_break {
            return head[..end].to_string();
        }

        let cut = match head.rfind(char::is_whitespace) {
            Some(i) if i > 0 => &head[..i],
            _ => head,
        };
        format!("{}...", trim_dangling(cut))
    }
}

/// The rest of the raw match after its modal, continued with the section
/// text that follows the match.
fn action_after(after: &str, following: Option<Section<'_>>) -> String {
    let Some(f) = following else {
        return take_action(after, false);
    };
    let (head, cut) = head_chars(f.text, ACTION_CHARS + 1);
    let joined = format!("{after}{}", sanitize(head));
    take_action(&joined, f.open_ended && !cut)
}

/// Up to 200 chars of action, ending at the first sentence end. Without
/// one, a trailing word that may be partial is dropped. `open_ended` marks
/// text that stops at a window edge rather than at the end of the document.
fn take_action(text: &str, open_ended: bool) -> String {
    let (text, cut) = head_chars(text.trim(), ACTION_CHARS);
    if let Some(end) = sentence_end(text) {
        return text[..end].to_string();
    }
    if cut || open_ended {
        return match text.rfind(char::is_whitespace) {
            Some(i) => text[..i].trim_end().to_string(),
            None if open_ended => String::new(),
            None => text.to_string(),
        };
    }
    text.to_string()
}

fn sentence_end(text: &str) -> Option<usize> {
    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | ';' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        if text[end..].chars().next().is_some_and(|n| !n.is_whitespace()) {
            continue;
        }
        if c == '.' && is_abbreviation(&text[..i]) {
            continue;
        }
        return Some(end);
    }
    None
}

fn is_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("")
        .to_lowercase();
    ABBREVIATIONS.contains(&word.as_str())
}

/// Drop paragraph markers, punctuation and connectives from the front.
fn strip_leading(s: &str) -> &str {
    let mut s = s;
    loop {
        let before = s;
        s = s.trim_start_matches(|c: char| !c.is_alphanumeric());
        if let Some(close) = s.find(')')
            && close <= 4
            && s[..close].chars().all(char::is_alphanumeric)
        {
            s = &s[close + 1..];
        }
        let word_end = s.find(char::is_whitespace).unwrap_or(s.len());
        if LEADING_CONNECTIVES.contains(&s[..word_end].to_lowercase().as_str()) {
            s = &s[word_end..];
        }
        if s == before {
            return s;
        }
    }
}

fn trim_dangling(s: &str) -> &str {
    s.trim_end_matches(|c: char| matches!(c, ',' | ':' | '—' | '–' | '-' | '(') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refiner() -> ClauseRefiner {
        ClauseRefiner::new(300)
    }

    fn whole(text: &str) -> Option<Section<'_>> {
        Some(Section { text, open_ended: false })
    }

    fn clause(raw: &str, section: Option<Section<'_>>, captured: Option<&str>) -> Option<String> {
        refiner().refine(raw, Role::Duty, section, captured).map(|r| r.clause)
    }

    const TRAINING: &str =
        "The employer shall ensure that all employees receive adequate training before commencing hazardous work.";

    #[test]
    fn continues_from_section() {
        assert_eq!(clause("The employer shall", whole(TRAINING), None).as_deref(), Some(TRAINING));
    }

    #[test]
    fn continues_from_the_match_position() {
        let text = "The employer shall keep records. The employer shall provide training.";
        let second = &text[text.rfind("The employer").unwrap()..];
        assert_eq!(
            clause("The employer shall", whole(second), None).as_deref(),
            Some("The employer shall provide training.")
        );
    }

    #[test]
    fn inversion_continues_after_actor() {
        let text = "It shall be the duty of every employer to keep records.";
        assert_eq!(
            clause("It shall be the duty of every employer", whole(text), None).as_deref(),
            Some(text)
        );
    }

    #[test]
    fn captured_action_wins() {
        let r = refiner()
            .refine("The Agency must ", Role::Responsibility, None, Some("publish a report."))
            .unwrap();
        assert_eq!(r.subject, "The Agency");
        assert_eq!(r.modal, "must");
        assert_eq!(r.clause, "The Agency must publish a report.");
    }

    #[test]
    fn subject_trimmed_to_sentence_start() {
        let raw = "the notice expires. The occupier shall";
        let r = refiner().refine(raw, Role::Duty, None, Some("remove the waste.")).unwrap();
        assert_eq!(r.subject, "The occupier");
    }

    #[test]
    fn subject_strips_markers_and_connectives() {
        let r = refiner().refine("(2) and the owner may", Role::Right, None, Some("appeal.")).unwrap();
        assert_eq!(r.subject, "the owner");
        assert_eq!(r.clause, "the owner may appeal.");
    }

    #[test]
    fn last_modal_is_used() {
        let r = refiner()
            .refine("where the inspector may enter, the occupier must", Role::Duty, None, Some("assist."))
            .unwrap();
        assert_eq!(r.modal, "must");
        assert!(r.subject.ends_with("the occupier"));
    }

    #[test]
    fn no_modal_treated_as_action() {
        let r = refiner().refine("keep a register of notices", Role::Duty, None, None).unwrap();
        assert_eq!(r.subject, "");
        assert_eq!(r.clause, "keep a register of notices...");
    }

    #[test]
    fn blank_input_is_none() {
        assert!(clause("   ", None, None).is_none());
        assert!(clause(",", None, None).is_none());
    }

    #[test]
    fn abbreviation_does_not_end_action() {
        let section = "The employer shall comply with s. 3 of the Act. Then more.";
        assert_eq!(
            clause("The employer shall", whole(section), None).as_deref(),
            Some("The employer shall comply with s. 3 of the Act.")
        );
    }

    #[test]
    fn unfinished_action_gets_ellipsis() {
        let got = clause("The employer shall", whole("The employer shall, so far as is reasonably practicable,"), None);
        assert_eq!(got.as_deref(), Some("The employer shall, so far as is reasonably practicable..."));
    }

    #[test]
    fn window_edge_drops_partial_word() {
        let text = "The employer shall keep the registers and the recor";
        let edge = Some(Section { text, open_ended: true });
        assert_eq!(
            clause("The employer shall", edge, None).as_deref(),
            Some("The employer shall keep the registers and the...")
        );
        // Same text at the real end of the document is kept whole.
        assert_eq!(
            clause("The employer shall", whole(text), None).as_deref(),
            Some("The employer shall keep the registers and the recor...")
        );
    }

    #[test]
    fn captured_action_at_window_edge_drops_partial_word() {
        let text = "The Agency must publish a rep";
        let edge = Some(Section { text, open_ended: true });
        let r = refiner().refine("The Agency must ", Role::Responsibility, edge, Some("publish a rep")).unwrap();
        assert_eq!(r.clause, "The Agency must publish a...");

        let longer = "The Agency must publish a rep and more";
        let edge = Some(Section { text: longer, open_ended: true });
        let r = refiner().refine("The Agency must ", Role::Responsibility, edge, Some("publish a rep")).unwrap();
        assert_eq!(r.clause, "The Agency must publish a rep...");
    }

    #[test]
    fn long_clause_bounded_at_word() {
        let words: Vec<String> = (0..120).map(|i| format!("word{i}")).collect();
        let original = words.join(" ");
        let clause = refiner().bound(original.clone());
        assert!(clause.chars().count() <= 300);
        let body = clause.strip_suffix("...").unwrap();
        assert!(original.starts_with(body));
        assert_eq!(original.as_bytes()[body.len()], b' ');
    }

    #[test]
    fn long_clause_prefers_late_sentence_break() {
        let first = "a".repeat(200);
        let clause = refiner().bound(format!("{first}. {}", "b ".repeat(100)));
        assert_eq!(clause, format!("{first}."));
    }

    #[test]
    fn refined_clauses_never_exceed_bound() {
        let section = format!("The employer shall {}", "ensure safety and ".repeat(40));
        let got = clause("The employer shall", whole(&section), None).unwrap();
        assert!(got.chars().count() <= 300);
        assert!(got.ends_with("..."));
        assert!(!got.ends_with(" ..."));
    }

    #[test]
    fn control_characters_removed() {
        let r = refiner().refine("The employer\u{0}shall", Role::Duty, None, Some("act\u{FFFD}now.")).unwrap();
        assert_eq!(r.clause, "The employer shall act now.");
    }
}
