//! The classification engine: catalogues, patterns and rules built once and
//! shared across calls.

use std::collections::BTreeSet;

use drrp_core::{DutyType, DutyTypeResult, EngineConfig, Role, Side};
use tracing::{debug, info};

use crate::catalogue::ActorCatalogue;
use crate::extract::extract_actors;
use crate::refine::ClauseRefiner;
use crate::resolver::{Resolver, RoleHolders};
use crate::structural::{AmendmentDetector, StructuralClassifier};
use crate::windowing::Windowing;

/// Actor labels already known for a provision, by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentActors {
    pub governed: Vec<String>,
    pub government: Vec<String>,
}

/// Immutable after construction; safe to share across threads.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    government: ActorCatalogue,
    governed: ActorCatalogue,
    windowing: Windowing,
    refiner: ClauseRefiner,
    structural: StructuralClassifier,
    amendment: AmendmentDetector,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let government = ActorCatalogue::government(config.backtrack_limit);
        let governed = ActorCatalogue::governed(config.backtrack_limit);
        info!(
            government = government.len(),
            governed = governed.len(),
            variant = ?config.pattern_variant,
            "engine ready"
        );
        Self {
            windowing: Windowing::new(config.window_before, config.window_after),
            refiner: ClauseRefiner::new(config.max_clause_chars),
            structural: StructuralClassifier::new(),
            amendment: AmendmentDetector::new(),
            government,
            governed,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalogue(&self, side: Side) -> &ActorCatalogue {
        match side {
            Side::Government => &self.government,
            Side::Governed => &self.governed,
        }
    }

    /// Actor labels from one side's catalogue mentioned in `text`.
    pub fn extract_actors(&self, text: &str, side: Side) -> Vec<String> {
        extract_actors(self.catalogue(side), text)
    }

    /// Holders of `role` among `present`, with refined, scored clauses.
    pub fn find_role_holders(&self, role: Role, present: &[String], text: &str) -> RoleHolders {
        let resolver = Resolver {
            catalogue: self.catalogue(role.side()),
            refiner: &self.refiner,
            windowing: &self.windowing,
            config: &self.config,
        };
        resolver.find_role_holders(role, present, text)
    }

    pub fn is_amendment(&self, text: &str) -> bool {
        self.amendment.is_amendment(text)
    }

    /// Classify one provision.
    ///
    /// Amending provisions short-circuit to `Amendment` with no holders.
    /// Otherwise all four roles are resolved (extracting actors from the
    /// text when `present` is `None`) and the structural rules run; the
    /// categories found are deduplicated and sorted by priority, falling
    /// back to the default category when none apply.
    pub fn classify(&self, text: &str, present: Option<&PresentActors>) -> DutyTypeResult {
        if text.trim().is_empty() {
            return DutyTypeResult {
                duty_type: vec![DutyType::DEFAULT],
                ..DutyTypeResult::default()
            };
        }
        if self.amendment.is_amendment(text) {
            debug!("amending provision, skipping role resolution");
            return DutyTypeResult::amendment();
        }

        let extracted;
        let present = match present {
            Some(p) => p,
            None => {
                extracted = PresentActors {
                    governed: self.extract_actors(text, Side::Governed),
                    government: self.extract_actors(text, Side::Government),
                };
                &extracted
            }
        };

        let mut result = DutyTypeResult::default();
        let mut types: BTreeSet<DutyType> = BTreeSet::new();
        for role in Role::ALL {
            let labels = match role.side() {
                Side::Governed => &present.governed,
                Side::Government => &present.government,
            };
            let found = self.find_role_holders(role, labels, text);
            if let Some(t) = found.duty_type {
                types.insert(t);
            }
            result.set_role(role, found.holders, found.matches);
        }

        types.extend(self.structural.classify(text));
        if types.is_empty() {
            types.insert(DutyType::DEFAULT);
        }
        result.duty_type = types.into_iter().collect();
        debug!(categories = result.duty_type.len(), "provision classified");
        result
    }

    /// Classify raw bytes, replacing invalid UTF-8 rather than failing.
    pub fn classify_bytes(&self, bytes: &[u8], present: Option<&PresentActors>) -> DutyTypeResult {
        let text = String::from_utf8_lossy(bytes);
        self.classify(&text, present)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAINING: &str =
        "The employer shall ensure that all employees receive adequate training before commencing hazardous work.";

    #[test]
    fn employer_duty_with_supplied_actors() {
        let engine = Engine::default();
        let present = PresentActors { governed: vec!["Org: Employer".into()], government: vec![] };
        let result = engine.classify(TRAINING, Some(&present));
        assert_eq!(result.duty_type, vec![DutyType::Duty]);
        assert_eq!(result.duty_holder, vec!["Org: Employer"]);
        assert!(result.rights_holder.is_empty());
        assert_eq!(result.duties.len(), 1);
        assert_eq!(result.duties[0].clause, TRAINING);
        assert!((result.duties[0].confidence - 0.60).abs() < 1e-6);
    }

    #[test]
    fn actors_extracted_when_not_supplied() {
        let engine = Engine::default();
        let result = engine.classify(TRAINING, None);
        assert!(result.duty_type.contains(&DutyType::Duty));
        assert!(result.duty_holder.contains(&"Org: Employer".to_string()));
    }

    #[test]
    fn amendment_short_circuits() {
        let engine = Engine::default();
        let result = engine.classify(
            "In section 3, for subsection (2) substitute— (2) The employer shall keep records.",
            None,
        );
        assert_eq!(result.duty_type, vec![DutyType::Amendment]);
        assert!(result.duty_holder.is_empty());
        assert!(result.duties.is_empty());
        assert!(result.all_matches().next().is_none());
    }

    #[test]
    fn bare_substitution_instruction_is_only_amendment() {
        let engine = Engine::default();
        let result = engine.classify("for subsection (2) substitute the following—", None);
        assert_eq!(result.duty_type, vec![DutyType::Amendment]);
        assert!(result.is_amendment());
        assert!(result.all_matches().next().is_none());
    }

    #[test]
    fn repeated_subject_keeps_each_duty() {
        let engine = Engine::default();
        let present = PresentActors { governed: vec!["Org: Employer".into()], government: vec![] };
        let result = engine.classify("The employer shall keep records. The employer shall provide training.", Some(&present));
        let clauses: Vec<&str> = result.duties.iter().map(|m| m.clause.as_str()).collect();
        assert_eq!(clauses, vec!["The employer shall keep records.", "The employer shall provide training."]);
    }

    #[test]
    fn planning_authority_beats_generic_on_shared_modal() {
        let engine = Engine::default();
        let present = PresentActors {
            governed: vec![],
            government: vec!["Gvt: Authority:".into(), "Gvt: Authority: Planning".into()],
        };
        let text = "Where the authority has been consulted, the planning authority, having considered its views, \
                    must publish a statement of its reasons.";

        // Both labels match the same modal on their own.
        let generic = engine.find_role_holders(Role::Responsibility, &present.government[..1], text);
        assert_eq!(generic.holders, vec!["Gvt: Authority:"]);

        let result = engine.classify(text, Some(&present));
        assert_eq!(result.responsibility_holder, vec!["Gvt: Authority: Planning"]);
        assert_eq!(result.responsibilities.len(), 1);
        assert!(result.responsibilities[0].clause.ends_with("must publish a statement of its reasons."));
    }

    #[test]
    fn default_category_when_nothing_matches() {
        let engine = Engine::default();
        let result = engine.classify("Schedule 2 lists the relevant substances.", None);
        assert_eq!(result.duty_type, vec![DutyType::DEFAULT]);
        assert!(result.all_matches().next().is_none());
    }

    #[test]
    fn empty_text_is_not_an_error() {
        let engine = Engine::default();
        let result = engine.classify("", None);
        assert_eq!(result.duty_type, vec![DutyType::DEFAULT]);
        assert!(result.duty_holder.is_empty());
    }

    #[test]
    fn categories_sorted_and_unique() {
        let engine = Engine::default();
        let text = "The Secretary of State may by regulations make provision for fees. \
                    The employer shall keep records. The employer shall keep records.";
        let result = engine.classify(text, None);
        assert!(result.duty_type.windows(2).all(|w| w[0] < w[1]));
        assert!(result.duty_type.contains(&DutyType::Duty));
        assert!(result.duty_type.contains(&DutyType::Power));
        assert!(result.duty_type.contains(&DutyType::PowerConferred));
        assert!(result.duty_type.contains(&DutyType::ChargeFee));
    }

    #[test]
    fn invalid_utf8_is_tolerated() {
        let engine = Engine::default();
        let mut bytes = b"The employer shall keep records".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b" of training.");
        let result = engine.classify_bytes(&bytes, None);
        assert!(result.duty_type.contains(&DutyType::Duty));
        assert!(result.duties.iter().all(|m| !m.clause.contains('\u{FFFD}')));
    }

    #[test]
    fn confidence_and_clause_bounds_hold() {
        let engine = Engine::default();
        let long_action = "take all reasonable steps to ensure the safety of every person ".repeat(8);
        let text = format!(
            "The employer shall {long_action}. The Environment Agency must publish a report. \
             Any person aggrieved by the notice may appeal to the tribunal."
        );
        let result = engine.classify(&text, None);
        assert!(result.all_matches().count() >= 3);
        for m in result.all_matches() {
            assert!((0.0..=0.85).contains(&m.confidence), "{m:?}");
            assert!(m.clause.chars().count() <= 300, "{m:?}");
            assert!(!m.clause.trim().is_empty());
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let engine = Engine::default();
        let text = "The local planning authority must consult the Environment Agency. \
                    The Environment Agency may give advice. Every employer shall co-operate.";
        let first = engine.classify(text, None);
        for _ in 0..3 {
            assert_eq!(engine.classify(text, None), first);
        }
    }

    #[test]
    fn result_serialises_with_table_labels() {
        let engine = Engine::default();
        let result = engine.classify("Schedule 2 lists the relevant substances.", None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duty_type"], serde_json::json!(["Process, Rule, Constraint, Condition"]));
        assert_eq!(json["duty_holder"], serde_json::json!([]));

        let present = PresentActors { governed: vec!["Org: Employer".into()], government: vec![] };
        let json = serde_json::to_value(engine.classify(TRAINING, Some(&present))).unwrap();
        assert_eq!(json["duties"][0]["role"], "Duty");
        assert_eq!(json["duties"][0]["holder"], "Org: Employer");
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
