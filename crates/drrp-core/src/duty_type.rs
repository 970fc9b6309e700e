//! Duty-type categories and the per-provision classification result.

use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleMatch};

/// Output category of a provision.
///
/// Declaration order is output priority: roles first, then the structural
/// categories, then the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyType {
    Amendment,
    Duty,
    Right,
    Responsibility,
    Power,
    #[serde(rename = "Enactment, Citation, Commencement")]
    EnactmentCitationCommencement,
    #[serde(rename = "Interpretation, Definition")]
    InterpretationDefinition,
    #[serde(rename = "Application, Scope")]
    ApplicationScope,
    Extent,
    Exemption,
    #[serde(rename = "Charge, Fee")]
    ChargeFee,
    Offence,
    #[serde(rename = "Enforcement, Prosecution")]
    EnforcementProsecution,
    #[serde(rename = "Defence, Appeal")]
    DefenceAppeal,
    #[serde(rename = "Repeal, Revocation")]
    RepealRevocation,
    #[serde(rename = "Power Conferred")]
    PowerConferred,
    #[serde(rename = "Transitional Arrangement")]
    TransitionalArrangement,
    #[serde(rename = "Process, Rule, Constraint, Condition")]
    ProcessRuleConstraintCondition,
}

impl DutyType {
    /// Category applied when nothing else matched.
    pub const DEFAULT: DutyType = DutyType::ProcessRuleConstraintCondition;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amendment => "Amendment",
            Self::Duty => "Duty",
            Self::Right => "Right",
            Self::Responsibility => "Responsibility",
            Self::Power => "Power",
            Self::EnactmentCitationCommencement => "Enactment, Citation, Commencement",
            Self::InterpretationDefinition => "Interpretation, Definition",
            Self::ApplicationScope => "Application, Scope",
            Self::Extent => "Extent",
            Self::Exemption => "Exemption",
            Self::ChargeFee => "Charge, Fee",
            Self::Offence => "Offence",
            Self::EnforcementProsecution => "Enforcement, Prosecution",
            Self::DefenceAppeal => "Defence, Appeal",
            Self::RepealRevocation => "Repeal, Revocation",
            Self::PowerConferred => "Power Conferred",
            Self::TransitionalArrangement => "Transitional Arrangement",
            Self::ProcessRuleConstraintCondition => "Process, Rule, Constraint, Condition",
        }
    }
}

impl From<Role> for DutyType {
    fn from(role: Role) -> Self {
        match role {
            Role::Duty => Self::Duty,
            Role::Right => Self::Right,
            Role::Responsibility => Self::Responsibility,
            Role::Power => Self::Power,
        }
    }
}

impl std::fmt::Display for DutyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one provision.
///
/// Field names follow the DRRP columns of the legislation table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DutyTypeResult {
    pub duty_type: Vec<DutyType>,
    pub duty_holder: Vec<String>,
    pub rights_holder: Vec<String>,
    pub responsibility_holder: Vec<String>,
    pub power_holder: Vec<String>,
    pub duties: Vec<RoleMatch>,
    pub rights: Vec<RoleMatch>,
    pub responsibilities: Vec<RoleMatch>,
    pub powers: Vec<RoleMatch>,
}

impl DutyTypeResult {
    /// Result for an amending provision: exactly `[Amendment]`, nothing else.
    pub fn amendment() -> Self {
        Self {
            duty_type: vec![DutyType::Amendment],
            ..Self::default()
        }
    }

    pub fn holders(&self, role: Role) -> &[String] {
        match role {
            Role::Duty => &self.duty_holder,
            Role::Right => &self.rights_holder,
            Role::Responsibility => &self.responsibility_holder,
            Role::Power => &self.power_holder,
        }
    }

    pub fn matches(&self, role: Role) -> &[RoleMatch] {
        match role {
            Role::Duty => &self.duties,
            Role::Right => &self.rights,
            Role::Responsibility => &self.responsibilities,
            Role::Power => &self.powers,
        }
    }

    /// Store the holders and matches found for `role`.
    pub fn set_role(&mut self, role: Role, holders: Vec<String>, matches: Vec<RoleMatch>) {
        match role {
            Role::Duty => {
                self.duty_holder = holders;
                self.duties = matches;
            }
            Role::Right => {
                self.rights_holder = holders;
                self.rights = matches;
            }
            Role::Responsibility => {
                self.responsibility_holder = holders;
                self.responsibilities = matches;
            }
            Role::Power => {
                self.power_holder = holders;
                self.powers = matches;
            }
        }
    }

    /// All matches across the four roles, in role order.
    pub fn all_matches(&self) -> impl Iterator<Item = &RoleMatch> {
        Role::ALL.into_iter().flat_map(move |r| self.matches(r).iter())
    }

    /// Matches a review queue should pick up.
    pub fn below_confidence(&self, threshold: f32) -> impl Iterator<Item = &RoleMatch> {
        self.all_matches().filter(move |m| m.needs_review(threshold))
    }

    pub fn is_amendment(&self) -> bool {
        self.duty_type == [DutyType::Amendment]
    }
}
