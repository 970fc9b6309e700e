//! Outbox records handed to the review and polishing pipeline.

use serde::{Deserialize, Serialize};

use crate::role::RoleMatch;

/// A rough DRRP annotation from the regex-based detection.
///
/// One per refined clause; the polishing pipeline consumes these in
/// descending confidence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub law_name: String,
    pub provision: String,
    /// Lowercase role name: `duty`, `right`, `responsibility` or `power`.
    pub drrp_type: String,
    pub holder: String,
    pub source_text: String,
    pub confidence: f32,
    /// ISO 8601 timestamp string.
    pub scraped_at: String,
}

impl Annotation {
    pub fn from_role_match(
        law_name: &str,
        provision: &str,
        role_match: &RoleMatch,
        scraped_at: &str,
    ) -> Self {
        Self {
            law_name: law_name.to_string(),
            provision: provision.to_string(),
            drrp_type: role_match.role.as_str().to_ascii_lowercase(),
            holder: role_match.holder.clone(),
            source_text: role_match.clause.clone(),
            confidence: role_match.confidence,
            scraped_at: scraped_at.to_string(),
        }
    }
}

/// Build outbox annotations for every match, highest confidence first.
pub fn annotations<'a>(
    law_name: &str,
    provision: &str,
    matches: impl IntoIterator<Item = &'a RoleMatch>,
    scraped_at: &str,
) -> Vec<Annotation> {
    let mut out: Vec<Annotation> = matches
        .into_iter()
        .map(|m| Annotation::from_role_match(law_name, provision, m, scraped_at))
        .collect();
    out.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
