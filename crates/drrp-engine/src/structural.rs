//! Non-DRRP provision categories and amendment detection.
//!
//! These are plain `regex` rules with no lookaround, so they run in linear
//! time regardless of input.

use drrp_core::DutyType;
use regex::Regex;
use tracing::trace;

use crate::windowing::linear;

const UNIT: &str = r"(?:sub-?)?(?:section|paragraph|regulation|article|rule|schedule|definition)s?";

/// Recognises provisions that amend other legislation.
#[derive(Debug)]
pub struct AmendmentDetector {
    rules: Vec<Regex>,
}

impl AmendmentDetector {
    pub fn new() -> Self {
        let target = format!(r#"(?:{UNIT}|the\s+words?|["“‘'])"#);
        Self::from_rules(&[
            format!(r"(?i)\b(?:for|in\s+place\s+of)\s+(?:the\s+)?{target}[^.]{{0,300}}?\bsubstitute\b"),
            format!(r"(?i)\b(?:after|before)\s+(?:the\s+)?{target}[^.]{{0,300}}?\binsert\b"),
            format!(r#"(?i)\b(?:omit|leave\s+out)\s+(?:the\s+)?(?:{UNIT}\b|words?\b|["“‘'(])"#),
            r"(?i)\b(?:is|are)\s+(?:hereby\s+)?amended\s+(?:as\s+follows|in\s+accordance\s+with)\b".to_string(),
            r"(?i)\bshall\s+be\s+(?:inserted|substituted|omitted)\b".to_string(),
            r"(?i)\bthere\s+(?:is|are|shall\s+be)\s+(?:inserted|substituted)\b".to_string(),
        ])
    }

    /// Rules that fail to compile are logged and left out.
    fn from_rules(sources: &[String]) -> Self {
        Self {
            rules: sources.iter().filter_map(|s| linear("amendment rules", s)).collect(),
        }
    }

    pub fn is_amendment(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.is_match(text))
    }
}

impl Default for AmendmentDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword rules for the non-role categories.
#[derive(Debug)]
pub struct StructuralClassifier {
    rules: Vec<(DutyType, Regex)>,
}

impl StructuralClassifier {
    pub fn new() -> Self {
        Self::from_rules(&[
            (
                DutyType::EnactmentCitationCommencement,
                r"(?i)\bmay\s+be\s+cited\s+as\b|\bcomes?\s+into\s+(?:force|operation)\b|\bcame\s+into\s+force\b|\bcommencement\b",
            ),
            (
                DutyType::InterpretationDefinition,
                r#"(?i)["“‘'][^"”’']{1,80}["”’']\s+(?:means|includes|has\s+the\s+(?:same\s+)?meaning)\b|\bhas\s+the\s+same\s+meaning\s+as\b|\bin\s+th(?:is|ese)\s+(?:regulations?|act|order|part|section|schedule)[^.]{0,40}\bmeans\b|\bshall\s+be\s+construed\b"#,
            ),
            (
                DutyType::ApplicationScope,
                r"(?i)\b(?:this|these)\s+(?:regulations?|act|order|part|section|schedule)\s+(?:shall\s+)?(?:not\s+)?appl(?:y|ies)\b|\bdoes\s+not\s+apply\b|\bapplies\s+(?:to|in\s+relation\s+to)\b",
            ),
            (
                DutyType::Extent,
                r"(?i)\bextends?\s+to\s+(?:England|Wales|Scotland|Northern\s+Ireland|Great\s+Britain|the\s+United\s+Kingdom)\b|\bextent\b",
            ),
            (
                DutyType::Exemption,
                r"(?i)\bexempt(?:ed|ion)?\b|\bshall\s+not\s+apply\s+to\b",
            ),
            (
                DutyType::ChargeFee,
                r"(?i)\bfees?\b|\bcharges?\s+(?:payable|for|in\s+respect\s+of)\b|\bmay\s+(?:make|impose)\s+(?:a\s+)?charges?\b",
            ),
            (
                DutyType::Offence,
                r"(?i)\b(?:commits?|guilty\s+of)\s+an\s+offence\b|\boffences?\b|\bliable\s+on\s+(?:summary\s+)?conviction\b",
            ),
            (
                DutyType::EnforcementProsecution,
                r"(?i)\b(?:enforcement|prohibition|improvement)\s+notices?\b|\bprosecut(?:e|ed|ion|ions)\b|\benforce(?:d|ment)?\b",
            ),
            (
                DutyType::DefenceAppeal,
                r"(?i)\b(?:it\s+(?:is|shall\s+be)\s+a\s+)?defence\b|\bappeal(?:s|ed)?\b",
            ),
            (
                DutyType::RepealRevocation,
                r"(?i)\b(?:is|are)\s+(?:hereby\s+)?(?:repealed|revoked)\b|\brepeals?\b|\brevocations?\b",
            ),
            (
                DutyType::PowerConferred,
                r"(?i)\bmay\s+by\s+(?:regulations|order|rules)\b|\bpowers?\s+to\s+make\s+(?:regulations|orders|rules)\b|\bin\s+exercise\s+of\s+the\s+powers\b|\bpowers\s+conferred\s+by\b",
            ),
            (
                DutyType::TransitionalArrangement,
                r"(?i)\btransitional\b|\bsaving\s+provisions?\b|\bsavings\b",
            ),
        ])
    }

    /// Rules that fail to compile are logged and left out.
    fn from_rules(rules: &[(DutyType, &str)]) -> Self {
        Self {
            rules: rules
                .iter()
                .filter_map(|(t, src)| linear("structural rules", src).map(|re| (*t, re)))
                .collect(),
        }
    }

    /// Every structural category whose rule matches, in priority order.
    pub fn classify(&self, text: &str) -> Vec<DutyType> {
        let found: Vec<DutyType> = self
            .rules
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(t, _)| *t)
            .collect();
        trace!(categories = found.len(), "structural rules applied");
        found
    }
}

impl Default for StructuralClassifier {
    fn default() -> Self {
        Self::new()
    }
}
