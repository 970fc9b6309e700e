//! Role pattern generators.
//!
//! Given an actor's fragment source, each generator returns an ordered list
//! of regex sources for one role. Governed actors get Duty (`shall`/`must`)
//! and Right (`may`) families; government actors get Responsibility and
//! Power. Government patterns come in two variants: `Legacy`, where every
//! match ends at the modal, and `Bounded`, which caps the gap before the
//! modal and captures the action phrase after it as `action`.
//!
//! Lookbehinds in `fancy-regex` must be fixed-width, so object-position
//! guards are written as a run of single-phrase lookbehinds.

use std::ops::Range;

use drrp_core::{PatternVariant, Role};
use fancy_regex::Regex;
use tracing::warn;

use crate::catalogue::build_regex;
use crate::error::PatternError;

const DET: &str = r"(?:[Tt]he|[Aa]n|[Aa]|[Ee]very|[Ee]ach|[Aa]ny|[Ss]uch|[Tt]hat|[Tt]his|[Tt]hose|[Nn]o|[Aa]ll|[Ee]ither)";

/// The actor is not the object of a preposition ("send it to the employer").
const GUARD: &str = concat!(
    r"(?<!to )(?<!by )(?<!of )(?<!for )(?<!from )(?<!with )(?<!on )(?<!upon )(?<!against )",
    r"(?<!to the )(?<!by the )(?<!of the )(?<!for the )(?<!from the )(?<!with the )(?<!on the )",
    r"(?<!to an )(?<!by an )(?<!of an )(?<!to a )(?<!by a )(?<!of a )",
    r"(?<!to any )(?<!by any )(?<!of any )(?<!to every )(?<!of every )",
);

/// `shall`/`must` that is not a passive or a definitional verb.
const OBLIGATION_NEG: &str = concat!(
    r"(?!\s+(?:not\s+)?be\s+(?:entitled|consulted|notified|informed|deemed|treated|regarded|taken|",
    r"given|sent|served|paid|exempt(?:ed)?|guilty|construed|read|prescribed|specified|",
    r"liable\s+(?:on|to\s+(?:a\s+)?(?:fine|penalty|imprisonment)))\b)",
    r"(?!\s+(?:have\s+effect|apply|not\s+apply|come\s+into|cease|continue\s+to\s+have\s+effect|include|mean)\b)",
);

/// `may` that grants something rather than denying it or acting on the actor.
const PERMISSION_NEG: &str = concat!(
    r"(?!\s+not\b)",
    r"(?!\s+(?:only\s+)?be\s+(?:required|directed|prescribed|specified|served|given|made|liable|guilty|",
    r"prosecuted|convicted|imposed|cited|issued|revoked|varied|extended|treated|deemed)\b)",
    r"(?!\s+(?:include|apply)\b)",
);

/// A pattern source plus whether its matches are blanked before the next
/// pattern runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePattern {
    pub source: String,
    pub remove_on_match: bool,
}

impl RolePattern {
    fn removing(source: String) -> Self {
        Self { source, remove_on_match: true }
    }

    fn keeping(source: String) -> Self {
        Self { source, remove_on_match: false }
    }
}

#[derive(Debug)]
pub struct CompiledRolePattern {
    pub regex: Regex,
    pub remove_on_match: bool,
}

/// One pattern match in a working text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub range: Range<usize>,
    pub raw: String,
    /// Bytes of `raw` before the action capture (all of it when none).
    pub head_len: usize,
    pub action: Option<String>,
}

impl Hit {
    /// The part of the match that ends at the modal.
    pub fn head(&self) -> &str {
        &self.raw[..self.head_len]
    }
}

impl CompiledRolePattern {
    /// Every non-overlapping hit. Execution errors end the scan.
    pub fn hits(&self, text: &str, label: &str) -> Vec<Hit> {
        let mut hits = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let caps = match caps {
                Ok(caps) => caps,
                Err(source) => {
                    let err = PatternError::Runtime { label: label.to_string(), source };
                    warn!(error = %err, "role scan aborted");
                    break;
                }
            };
            let Some(whole) = caps.get(0) else { continue };
            let (head_len, action) = match caps.name("action") {
                Some(a) if !a.as_str().trim().is_empty() => {
                    (a.start() - whole.start(), Some(a.as_str().to_string()))
                }
                _ => (whole.as_str().len(), None),
            };
            hits.push(Hit {
                range: whole.start()..whole.end(),
                raw: whole.as_str().to_string(),
                head_len,
                action,
            });
        }
        hits
    }
}

/// Patterns for `role` and an actor fragment source.
///
/// The variant only affects government roles; governed roles have a single
/// family.
pub fn role_patterns(role: Role, actor: &str, variant: PatternVariant, gap: usize) -> Vec<RolePattern> {
    match (role, variant) {
        (Role::Duty, _) => duty_patterns(actor),
        (Role::Right, _) => right_patterns(actor),
        (Role::Responsibility, PatternVariant::Legacy) => responsibility_patterns(actor),
        (Role::Power, PatternVariant::Legacy) => power_patterns(actor),
        (Role::Responsibility, PatternVariant::Bounded) => bounded_responsibility_patterns(actor, gap),
        (Role::Power, PatternVariant::Bounded) => bounded_power_patterns(actor, gap),
    }
}

/// Compile `patterns` for the actor `label`. Sources that fail to compile
/// are logged and dropped.
pub fn compile(label: &str, patterns: Vec<RolePattern>, backtrack_limit: usize) -> Vec<CompiledRolePattern> {
    patterns
        .into_iter()
        .filter_map(|p| match build_regex(&p.source, backtrack_limit) {
            Ok(regex) => Some(CompiledRolePattern { regex, remove_on_match: p.remove_on_match }),
            Err(source) => {
                let err = PatternError::Compile { label: label.to_string(), source };
                warn!(error = %err, "skipping role pattern");
                None
            }
        })
        .collect()
}

// ── Governed: Duty and Right ──

pub fn duty_patterns(actor: &str) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let mut out = governed_common(&a, "(?:shall|must)", OBLIGATION_NEG);
    out.extend([
        // It shall be the duty of every employer
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\b(?:shall|must)\s+be\s+the\s+(?:duty|responsibility|obligation)\s+of\s+{DET}\s+{a}\b"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:is|are)\s+(?:required|obliged|under\s+a\s+duty)\s+to\b"
        )),
        RolePattern::keeping(format!(r"{GUARD}\b{DET}\s+{a}\s+owes?\s+a\s+duty\b")),
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:is|are)\s+liable\s+(?:to|for)\b(?!\s+(?:a\s+)?(?:fine|penalty|imprisonment|conviction|prosecution)\b)"
        )),
    ]);
    out
}

pub fn right_patterns(actor: &str) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let mut out = governed_common(&a, "may", PERMISSION_NEG);
    out.extend([
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:shall\s+be|is|are)\s+entitled\s+to\b"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:shall\s+have|has|have)\s+(?:the\s+)?right\s+(?:to|of)\b"
        )),
        RolePattern::keeping(format!(
            r"\b(?:shall|may)\s+be\s+lawful\s+for\s+{DET}\s+{a}\b"
        )),
        // Any person aggrieved by the decision may
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+aggrieved\s+[^.;:]{{1,200}}?\s+may\b{PERMISSION_NEG}"
        )),
    ]);
    out
}

fn governed_common(a: &str, m: &str, neg: &str) -> Vec<RolePattern> {
    vec![
        // The employer shall
        RolePattern::removing(format!(r"{GUARD}\b{DET}\s+{a}\s+{m}\b{neg}")),
        // Employers shall
        RolePattern::removing(format!(r"{GUARD}\b{a}\s+{m}\b{neg}")),
        // The employer concerned shall
        RolePattern::removing(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:concerned|in\s+question|so\s+notified)\s+{m}\b{neg}"
        )),
        // The employer also shall
        RolePattern::removing(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:also|further|then|thereupon|accordingly|nevertheless)\s+{m}\b{neg}"
        )),
        // The employer, having consulted the representatives, shall
        RolePattern::keeping(format!(r"{GUARD}\b{DET}\s+{a}\s*,[^.;:]{{1,200}}?,\s*{m}\b{neg}")),
        // The employer who employs five or more employees shall
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:who|which|that|whose)\s+[^.;:]{{1,200}}?\s+{m}\b{neg}"
        )),
        // The employer (within the meaning of section 2) shall
        RolePattern::keeping(format!(r"{GUARD}\b{DET}\s+{a}\s*\([^)]{{1,150}}\)\s*{m}\b{neg}")),
        // The employer of a person at work shall
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:of|for|at|in|on)\s+[^.;:,]{{1,120}}?\s+{m}\b{neg}"
        )),
        // Any employer and any self-employed person shall
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:and|or)\s+{DET}\s+[\w-]+(?:\s+[\w-]+)?\s+{m}\b{neg}"
        )),
        // Where an employer ... he shall
        RolePattern::keeping(format!(r"{GUARD}\b{a}\b[^.;]{{0,200}}?\b(?:he|she|they)\s+{m}\b{neg}")),
        // The employer—\n(a) shall
        RolePattern::keeping(format!(
            r"\b{DET}\s+{a}[^.\n]{{0,120}}?[—–-]\s*\n\s*(?:\(\w{{1,4}}\)\s*)?{m}\b{neg}"
        )),
    ]
}

// ── Government: Responsibility and Power ──

pub fn responsibility_patterns(actor: &str) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let mut out = government_common(&a, "(?:shall|must)", OBLIGATION_NEG, "{1,200}");
    out.extend([
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\b(?:shall|must)\s+be\s+the\s+(?:duty|responsibility)\s+of\s+(?:{DET}\s+)?{a}\b"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:has|have|is\s+under)\s+a\s+duty\s+to\b"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:is|are)\s+(?:required\s+to|responsible\s+for)\b"
        )),
        // There shall be a duty on the Agency
        RolePattern::keeping(format!(
            r"\b[Tt]here\s+(?:shall|must)\s+be\s+a\s+duty\s+(?:on|upon)\s+(?:{DET}\s+)?{a}\b"
        )),
    ]);
    out
}

pub fn power_patterns(actor: &str) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let mut out = government_common(&a, "may", PERMISSION_NEG, "{1,200}");
    out.extend([
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:shall\s+have|has|have)\s+(?:the\s+)?power\s+to\b"
        )),
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\b(?:shall|may)\s+be\s+lawful\s+for\s+(?:{DET}\s+)?{a}\b"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:is|are)\s+(?:empowered|authori[sz]ed)\s+to\b"
        )),
        // It shall be for the Secretary of State to
        RolePattern::keeping(format!(r"(?:\b[Ii]t\s+)?\bshall\s+be\s+for\s+(?:{DET}\s+)?{a}\s+to\b")),
    ]);
    out
}

fn government_common(a: &str, m: &str, neg: &str, gap: &str) -> Vec<RolePattern> {
    vec![
        // The Agency shall
        RolePattern::removing(format!(r"{GUARD}\b{DET}\s+{a}\s+{m}\b{neg}")),
        // Ministers may / HMRC must
        RolePattern::removing(format!(r"{GUARD}\b{a}\s+{m}\b{neg}")),
        RolePattern::removing(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:also|further|then|thereupon|accordingly)\s+{m}\b{neg}"
        )),
        // The authority concerned must
        RolePattern::removing(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:concerned|in\s+question)\s+{m}\b{neg}"
        )),
        // The Secretary of State, if satisfied that ..., may
        RolePattern::keeping(format!(r"{GUARD}\b(?:{DET}\s+)?{a}\s*,[^.;:]{gap}?,\s*{m}\b{neg}")),
        // The authority for the area in which the site is situated must
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:of|for|in)\s+[^.;:,]{gap}?\s+{m}\b{neg}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:who|which|that)\s+[^.;:]{gap}?\s+{m}\b{neg}"
        )),
        RolePattern::keeping(format!(r"{GUARD}\b(?:{DET}\s+)?{a}\s*\([^)]{{1,150}}\)\s*{m}\b{neg}")),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:and|or)\s+{DET}\s+[\w-]+(?:\s+[\w-]+)?\s+{m}\b{neg}"
        )),
        // Where the Agency ... it may
        RolePattern::keeping(format!(r"{GUARD}\b{a}\b[^.;]{gap}?\b(?:he|she|it|they)\s+{m}\b{neg}")),
        RolePattern::keeping(format!(
            r"\b(?:{DET}\s+)?{a}[^.\n]{{0,120}}?[—–-]\s*\n\s*(?:\(\w{{1,4}}\)\s*)?{m}\b{neg}"
        )),
    ]
}

/// Action capture: up to ~200 chars, ending on a whole word, with an
/// optional closing `.` or `;`.
fn action(prefix: &str) -> String {
    format!(r"\s+(?P<action>{prefix}[^.;:\n]{{0,199}}\w(?!\w)[.;]?)")
}

pub fn bounded_responsibility_patterns(actor: &str, gap: usize) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let m = "(?:shall|must)";
    let mut out = bounded_common(&a, m, OBLIGATION_NEG, gap);
    out.extend([
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\b(?:shall|must)\s+(?P<action>be\s+the\s+(?:duty|responsibility)\s+of\s+(?:{DET}\s+)?{a}\b(?:[^.;:\n]{{0,160}}\w(?!\w))?[.;]?)"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:has|have|is\s+under)\s+a\s+duty{}",
            action(r"to\s+")
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:is|are)\s+required{}",
            action(r"to\s+")
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:is|are)\s+responsible{}",
            action(r"for\s+")
        )),
        RolePattern::keeping(format!(
            r"\b[Tt]here\s+(?:shall|must)\s+(?P<action>be\s+a\s+duty\s+(?:on|upon)\s+(?:{DET}\s+)?{a}\b(?:[^.;:\n]{{0,160}}\w(?!\w))?[.;]?)"
        )),
    ]);
    out
}

pub fn bounded_power_patterns(actor: &str, gap: usize) -> Vec<RolePattern> {
    let a = format!("(?i:{actor})");
    let mut out = bounded_common(&a, "may", PERMISSION_NEG, gap);
    out.extend([
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:shall\s+have|has|have)\s+(?:the\s+)?power{}",
            action(r"to\s+")
        )),
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\b(?:shall|may)\s+be\s+lawful\s+for\s+(?:{DET}\s+)?{a}\b(?:[^.;:\n]{{0,160}}\w(?!\w))?[.;]?"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:is|are)\s+(?:empowered|authori[sz]ed){}",
            action(r"to\s+")
        )),
        RolePattern::keeping(format!(
            r"(?:\b[Ii]t\s+)?\bshall\s+(?P<action>be\s+for\s+(?:{DET}\s+)?{a}\s+to\s+[^.;:\n]{{0,160}}\w(?!\w)[.;]?)"
        )),
    ]);
    out
}

fn bounded_common(a: &str, m: &str, neg: &str, gap: usize) -> Vec<RolePattern> {
    let act = action("");
    vec![
        RolePattern::removing(format!(r"{GUARD}\b{DET}\s+{a}\s+{m}\b{neg}{act}")),
        RolePattern::removing(format!(r"{GUARD}\b{a}\s+{m}\b{neg}{act}")),
        RolePattern::removing(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:also|further|then|thereupon|accordingly)\s+{m}\b{neg}{act}"
        )),
        RolePattern::removing(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:concerned|in\s+question)\s+{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s*,[^.;:]{{1,{gap}}}?,\s*{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b{DET}\s+{a}\s+(?:of|for|in)\s+[^.;:,]{{1,{gap}}}?\s+{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:who|which|that)\s+[^.;:]{{1,{gap}}}?\s+{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s*\([^)]{{1,{gap}}}\)\s*{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b(?:{DET}\s+)?{a}\s+(?:and|or)\s+{DET}\s+[\w-]+(?:\s+[\w-]+)?\s+{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"{GUARD}\b{a}\b[^.;]{{0,{gap}}}?\b(?:he|she|it|they)\s+{m}\b{neg}{act}"
        )),
        RolePattern::keeping(format!(
            r"\b(?:{DET}\s+)?{a}[^.\n]{{0,{gap}}}?[—–-]\s*\n\s*(?:\(\w{{1,4}}\)\s*)?{m}\b{neg}{act}"
        )),
    ]
}
