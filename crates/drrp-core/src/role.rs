//! DRRP roles and the matches that substantiate them.

use serde::{Deserialize, Serialize};

/// Which actor catalogue a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Crown, ministers, agencies, authorities, courts.
    Government,
    /// Private-sector and individual actors regulated by the law.
    Governed,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Governed => "governed",
        }
    }
}

/// The four DRRP roles an actor can hold in a provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Obligation on a governed actor.
    Duty,
    /// Permission or entitlement of a governed actor.
    Right,
    /// Obligation on a government actor.
    Responsibility,
    /// Discretionary authority of a government actor.
    Power,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Duty, Role::Right, Role::Responsibility, Role::Power];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duty => "Duty",
            Self::Right => "Right",
            Self::Responsibility => "Responsibility",
            Self::Power => "Power",
        }
    }

    /// Catalogue whose actors can hold this role.
    pub fn side(&self) -> Side {
        match self {
            Self::Duty | Self::Right => Side::Governed,
            Self::Responsibility | Self::Power => Side::Government,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One substantiated role finding.
///
/// Produced per successful pattern execution and deduplicated by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    /// Catalogue label of the actor, e.g. `"Org: Employer"`.
    pub holder: String,
    pub role: Role,
    /// Text matched by the role pattern, before refinement.
    pub raw_match: String,
    /// Text following the modal when the pattern captured it directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_action: Option<String>,
    /// Refined "Subject Modal Action" clause, never empty.
    pub clause: String,
    /// Heuristic confidence in `[0.0, 0.85]`.
    pub confidence: f32,
}

impl RoleMatch {
    /// Whether the match falls below a review threshold.
    pub fn needs_review(&self, threshold: f32) -> bool {
        self.confidence < threshold
    }
}
