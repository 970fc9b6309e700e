//! Vertical card display for classified provisions.
//!
//! Renders a `DutyTypeResult` as a grouped, human-readable card: categories,
//! holders per role, then the refined clauses with their confidence.

use std::fmt::Write as _;

use drrp_core::{DutyTypeResult, Role, RoleMatch};

const MAX_LIST_ITEMS: usize = 10;
const MAX_CLAUSE_CHARS: usize = 120;

// ── Public API ──

/// Print one classified provision as a card.
pub fn print_card(name: &str, result: &DutyTypeResult, review_below: Option<f32>) {
    print!("{}", render_card(name, result, review_below));
}

/// Render the card to a string.
pub fn render_card(name: &str, result: &DutyTypeResult, review_below: Option<f32>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {name} ===");
    let _ = writeln!(out);

    let types: Vec<&str> = result.duty_type.iter().map(|t| t.as_str()).collect();
    section(&mut out, "Classification", &[("duty_type", types.join("; "))]);

    let holders: Vec<(&str, String)> = Role::ALL
        .iter()
        .filter(|r| !result.holders(**r).is_empty())
        .map(|r| (holder_column(*r), truncate_list(result.holders(*r))))
        .collect();
    section(&mut out, "Holders", &holders);

    let any_matches = Role::ALL.iter().any(|r| !result.matches(*r).is_empty());
    if any_matches {
        let _ = writeln!(out, "DRRP Detail");
        for role in Role::ALL {
            match_list(&mut out, role, result.matches(role), review_below);
        }
        let _ = writeln!(out);
    }
    out
}

/// One line per actor label, in catalogue order.
pub fn print_labels(header: &str, labels: &[String]) {
    println!("{header} ({}):", labels.len());
    for label in labels {
        println!("  {label}");
    }
    println!();
}

// ── Section rendering ──

fn section(out: &mut String, header: &str, rows: &[(&str, String)]) {
    if rows.is_empty() {
        return;
    }
    let _ = writeln!(out, "{header}");
    for (name, value) in rows {
        let _ = writeln!(out, "  {:<26} {}", name, value);
    }
    let _ = writeln!(out);
}

fn match_list(out: &mut String, role: Role, matches: &[RoleMatch], review_below: Option<f32>) {
    if matches.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {} ({}):", role.as_str(), matches.len());
    for m in matches.iter().take(MAX_LIST_ITEMS) {
        let flag = match review_below {
            Some(t) if m.needs_review(t) => "  [review]",
            _ => "",
        };
        let _ = writeln!(
            out,
            "    holder: {:<20}  confidence: {:.2}{}",
            m.holder, m.confidence, flag
        );
        let _ = writeln!(out, "      {}", shorten(&m.clause, MAX_CLAUSE_CHARS));
    }
    if matches.len() > MAX_LIST_ITEMS {
        let _ = writeln!(out, "    ... and {} more", matches.len() - MAX_LIST_ITEMS);
    }
}

// ── Helpers ──

fn holder_column(role: Role) -> &'static str {
    match role {
        Role::Duty => "duty_holder",
        Role::Right => "rights_holder",
        Role::Responsibility => "responsibility_holder",
        Role::Power => "power_holder",
    }
}

fn truncate_list(items: &[String]) -> String {
    let shown: Vec<&str> = items.iter().take(MAX_LIST_ITEMS).map(String::as_str).collect();
    let mut line = shown.join(", ");
    if items.len() > MAX_LIST_ITEMS {
        let _ = write!(line, " ... and {} more", items.len() - MAX_LIST_ITEMS);
    }
    line
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drrp_core::DutyType;

    fn employer_duty(confidence: f32) -> RoleMatch {
        RoleMatch {
            holder: "Org: Employer".into(),
            role: Role::Duty,
            raw_match: "The employer shall".into(),
            captured_action: Some("keep records.".into()),
            clause: "The employer shall keep records.".into(),
            confidence,
        }
    }

    #[test]
    fn card_has_header_sections_and_clause() {
        let mut result = DutyTypeResult {
            duty_type: vec![DutyType::Duty, DutyType::Offence],
            ..DutyTypeResult::default()
        };
        result.set_role(Role::Duty, vec!["Org: Employer".into()], vec![employer_duty(0.6)]);

        let card = render_card("reg 3", &result, None);
        assert!(card.starts_with("=== reg 3 ===\n"));
        assert!(card.contains("Classification\n"));
        assert!(card.contains("Duty; Offence"));
        assert!(card.contains(&format!("  {:<26} {}", "duty_holder", "Org: Employer")));
        assert!(card.contains("  Duty (1):"));
        assert!(card.contains("confidence: 0.60"));
        assert!(card.contains("      The employer shall keep records."));
        assert!(!card.contains("[review]"));
    }

    #[test]
    fn empty_sections_are_skipped() {
        let result = DutyTypeResult {
            duty_type: vec![DutyType::DEFAULT],
            ..DutyTypeResult::default()
        };
        let card = render_card("s.1", &result, None);
        assert!(!card.contains("Holders"));
        assert!(!card.contains("DRRP Detail"));
    }

    #[test]
    fn low_confidence_flagged_for_review() {
        let mut result = DutyTypeResult::default();
        result.set_role(Role::Duty, vec!["Org: Employer".into()], vec![employer_duty(0.25)]);
        let card = render_card("s.1", &result, Some(0.5));
        assert!(card.contains("[review]"));
    }

    #[test]
    fn long_lists_are_truncated() {
        let items: Vec<String> = (0..13).map(|i| format!("Org: {i}")).collect();
        let line = truncate_list(&items);
        assert!(line.ends_with(" ... and 3 more"));
        assert!(line.contains("Org: 9"));
        assert!(!line.contains("Org: 10"));
    }

    #[test]
    fn shorten_respects_char_limit() {
        assert_eq!(shorten("short", 10), "short");
        let long = "é".repeat(50);
        let out = shorten(&long, 20);
        assert_eq!(out.chars().count(), 20);
        assert!(out.ends_with("..."));
    }
}
