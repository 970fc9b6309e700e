//! Role-holder resolution: which present actors hold a given role.

use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

use drrp_core::{DutyType, EngineConfig, Role, RoleMatch};
use tracing::{debug, trace};

use crate::catalogue::{ActorCatalogue, ActorCategory};
use crate::patterns::{CompiledRolePattern, Hit, compile, role_patterns};
use crate::preprocess::strip_false_positives;
use crate::refine::{ClauseRefiner, Refined, Section};
use crate::score::score;
use crate::text::blank_spans;
use crate::windowing::{TextWindow, Windowing, actor_in_windows};

const PRONOUN_SUBJECTS: &[&str] = &["he", "she", "it", "they", "there", "who", "which"];
const DEDUP_ACTION_CHARS: usize = 40;

/// Result of resolving one role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleHolders {
    /// Sorted, unique holder labels.
    pub holders: Vec<String>,
    /// The role's category when at least one holder was found.
    pub duty_type: Option<DutyType>,
    pub matches: Vec<RoleMatch>,
}

impl RoleHolders {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Everything resolution needs, borrowed from the engine.
pub struct Resolver<'a> {
    pub catalogue: &'a ActorCatalogue,
    pub refiner: &'a ClauseRefiner,
    pub windowing: &'a Windowing,
    pub config: &'a EngineConfig,
}

struct Candidate {
    key: String,
    role_match: RoleMatch,
}

type ActorPatterns<'c> = (&'c ActorCategory, Vec<CompiledRolePattern>);

impl Resolver<'_> {
    /// Find holders of `role` among the `present` actor labels.
    ///
    /// Labels not in this resolver's catalogue are ignored. Texts longer than
    /// the window threshold are matched inside modal-anchored windows.
    pub fn find_role_holders(&self, role: Role, present: &[String], text: &str) -> RoleHolders {
        if text.trim().is_empty() {
            return RoleHolders::default();
        }
        let actors: Vec<&ActorCategory> = self
            .catalogue
            .present(present)
            .filter(|a| !a.is_pronoun())
            .collect();
        if actors.is_empty() {
            return RoleHolders::default();
        }

        let compiled: Vec<ActorPatterns<'_>> = actors
            .into_iter()
            .map(|a| {
                let patterns = role_patterns(role, &a.source, self.config.pattern_variant, self.config.bounded_gap);
                (a, compile(&a.label, patterns, self.config.backtrack_limit))
            })
            .collect();

        let cleaned = strip_false_positives(text);
        let candidates = if cleaned.chars().count() > self.config.window_threshold {
            let windows = self.windowing.windows(&cleaned);
            debug!(
                role = role.as_str(),
                chars = cleaned.chars().count(),
                windows = windows.len(),
                "matching within modal windows"
            );
            let segments: Vec<Section<'_>> = windows
                .iter()
                .map(|w| Section { text: w.content.as_str(), open_ended: w.end < cleaned.len() })
                .collect();
            self.scan(role, &compiled, &segments, Some(&windows))
        } else {
            self.scan(role, &compiled, &[Section { text: cleaned.as_str(), open_ended: false }], None)
        };

        let matches = dedupe(candidates);
        let holders: Vec<String> = matches
            .iter()
            .map(|m| m.holder.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let duty_type = (!matches.is_empty()).then(|| DutyType::from(role));
        RoleHolders { holders, duty_type, matches }
    }

    /// Run every actor's patterns over each segment in catalogue order.
    ///
    /// Remove-on-match hits are blanked from the segment's working copy so
    /// later, more generic actors cannot claim the same words. Blanking keeps
    /// byte offsets, so each hit is refined against the untouched segment
    /// from its own position.
    fn scan(
        &self,
        role: Role,
        compiled: &[ActorPatterns<'_>],
        segments: &[Section<'_>],
        windows: Option<&[TextWindow]>,
    ) -> Vec<Candidate> {
        let mut working: Vec<String> = segments.iter().map(|s| s.text.to_string()).collect();
        let mut out = Vec::new();

        for (actor, patterns) in compiled {
            if let Some(windows) = windows
                && !actor_in_windows(actor, windows)
            {
                trace!(actor = %actor.label, "actor absent from all windows");
                continue;
            }
            for pattern in patterns {
                for (i, section) in segments.iter().enumerate() {
                    let hits = pattern.hits(&working[i], &actor.label);
                    if hits.is_empty() {
                        continue;
                    }
                    out.extend(hits.iter().filter_map(|h| self.candidate(role, actor, h, *section)));
                    if pattern.remove_on_match {
                        let spans: Vec<Range<usize>> = hits.iter().map(|h| h.range.clone()).collect();
                        working[i] = blank_spans(&working[i], &spans);
                    }
                }
            }
        }
        out
    }

    fn candidate(&self, role: Role, actor: &ActorCategory, hit: &Hit, section: Section<'_>) -> Option<Candidate> {
        let from_hit = section.text.get(hit.range.start..).map(|text| Section { text, ..section });
        let refined = self
            .refiner
            .refine(hit.head(), role, from_hit, hit.action.as_deref())?;
        if !subject_agrees(actor, &refined, &hit.raw) {
            trace!(actor = %actor.label, subject = %refined.subject, "subject does not name actor");
            return None;
        }
        let confidence = score(Some(&refined.clause), hit.action.is_some());
        Some(Candidate {
            key: dedup_key(role, &refined),
            role_match: RoleMatch {
                holder: actor.label.clone(),
                role,
                raw_match: hit.raw.clone(),
                captured_action: hit.action.clone(),
                clause: refined.clause,
                confidence,
            },
        })
    }
}

/// The refined subject must name the actor. A pronoun or empty subject
/// (inversions, continuations) defers to the raw match instead.
fn subject_agrees(actor: &ActorCategory, refined: &Refined, raw: &str) -> bool {
    let subject = refined.subject.trim();
    let last = subject
        .split_whitespace()
        .last()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .unwrap_or_default();
    if subject.is_empty() || PRONOUN_SUBJECTS.contains(&last.as_str()) {
        return actor.mentioned_in(raw);
    }
    actor.mentioned_in(subject)
}

fn normalize(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clauses that share a role, the subject's head noun, the modal and the
/// start of the action are one finding.
fn dedup_key(role: Role, refined: &Refined) -> String {
    let head = refined
        .subject
        .split_whitespace()
        .last()
        .map(normalize)
        .unwrap_or_default();
    let action: String = normalize(&refined.action).chars().take(DEDUP_ACTION_CHARS).collect();
    format!("{}|{}|{}|{}", role.as_str(), head, refined.modal.to_lowercase(), action)
}

/// Collapse candidates sharing a key, keeping the most specific (longest)
/// holder label. First-seen order is preserved.
fn dedupe(candidates: Vec<Candidate>) -> Vec<RoleMatch> {
    let mut out: Vec<RoleMatch> = Vec::with_capacity(candidates.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for Candidate { key, role_match } in candidates {
        match index.get(&key) {
            Some(&i) => {
                if role_match.holder.chars().count() > out[i].holder.chars().count() {
                    out[i] = role_match;
                }
            }
            None => {
                index.insert(key, out.len());
                out.push(role_match);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use drrp_core::PatternVariant;

    const TRAINING: &str =
        "The employer shall ensure that all employees receive adequate training before commencing hazardous work.";

    struct Fixture {
        government: ActorCatalogue,
        governed: ActorCatalogue,
        refiner: ClauseRefiner,
        windowing: Windowing,
        config: EngineConfig,
    }

    impl Fixture {
        fn new(config: EngineConfig) -> Self {
            Self {
                government: ActorCatalogue::government(config.backtrack_limit),
                governed: ActorCatalogue::governed(config.backtrack_limit),
                refiner: ClauseRefiner::new(config.max_clause_chars),
                windowing: Windowing::new(config.window_before, config.window_after),
                config,
            }
        }

        fn resolve(&self, role: Role, present: &[&str], text: &str) -> RoleHolders {
            let catalogue = match role.side() {
                drrp_core::Side::Government => &self.government,
                drrp_core::Side::Governed => &self.governed,
            };
            let resolver = Resolver {
                catalogue,
                refiner: &self.refiner,
                windowing: &self.windowing,
                config: &self.config,
            };
            let present: Vec<String> = present.iter().map(|s| s.to_string()).collect();
            resolver.find_role_holders(role, &present, text)
        }
    }

    fn fixture() -> Fixture {
        Fixture::new(EngineConfig::default())
    }

    #[test]
    fn employer_duty_end_to_end() {
        let found = fixture().resolve(Role::Duty, &["Org: Employer"], TRAINING);
        assert_eq!(found.holders, vec!["Org: Employer"]);
        assert_eq!(found.duty_type, Some(DutyType::Duty));
        assert_eq!(found.matches.len(), 1);
        let m = &found.matches[0];
        assert_eq!(m.clause, TRAINING);
        assert!((m.confidence - 0.60).abs() < 1e-6);
        assert!(m.captured_action.is_none());
    }

    #[test]
    fn specific_authority_wins_over_generic() {
        let found = fixture().resolve(
            Role::Responsibility,
            &["Gvt: Authority:", "Gvt: Authority: Planning"],
            "The planning authority must prepare a local development plan for its area.",
        );
        assert_eq!(found.holders, vec!["Gvt: Authority: Planning"]);
        assert_eq!(found.matches.len(), 1);
        assert_eq!(
            found.matches[0].captured_action.as_deref(),
            Some("prepare a local development plan for its area.")
        );
        assert!((found.matches[0].confidence - 0.85).abs() < 1e-6);
    }

    #[test]
    fn legacy_variant_also_resolves_government() {
        let config = EngineConfig { pattern_variant: PatternVariant::Legacy, ..EngineConfig::default() };
        let found = Fixture::new(config).resolve(
            Role::Power,
            &["Gvt: Secretary of State"],
            "The Secretary of State may by regulations make provision for fees.",
        );
        assert_eq!(found.holders, vec!["Gvt: Secretary of State"]);
        let m = &found.matches[0];
        assert!(m.captured_action.is_none());
        assert_eq!(m.clause, "The Secretary of State may by regulations make provision for fees.");
    }

    #[test]
    fn inversion_resolves_to_actor() {
        let found = fixture().resolve(
            Role::Responsibility,
            &["Gvt: Secretary of State"],
            "It shall be the duty of the Secretary of State to lay a report before Parliament.",
        );
        assert_eq!(found.holders, vec!["Gvt: Secretary of State"]);
        assert_eq!(
            found.matches[0].clause,
            "It shall be the duty of the Secretary of State to lay a report before Parliament."
        );
    }

    #[test]
    fn aggrieved_person_has_right() {
        let found = fixture().resolve(
            Role::Right,
            &["Ind: Person"],
            "Any person aggrieved by the notice may appeal to the tribunal.",
        );
        assert_eq!(found.holders, vec!["Ind: Person"]);
        assert_eq!(found.matches[0].clause, "Any person aggrieved by the notice may appeal to the tribunal.");
    }

    #[test]
    fn absent_actor_or_empty_text() {
        let f = fixture();
        assert!(f.resolve(Role::Duty, &[], TRAINING).is_empty());
        assert!(f.resolve(Role::Duty, &["Org: Occupier"], TRAINING).is_empty());
        assert!(f.resolve(Role::Duty, &["Org: Employer"], "  ").is_empty());
        assert!(f.resolve(Role::Duty, &["Not: A Label"], TRAINING).is_empty());
    }

    #[test]
    fn long_text_is_windowed() {
        let filler = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut doc = String::from("The occupier ");
        while doc.len() < 60_000 {
            doc.push_str(filler);
        }
        doc.push_str(TRAINING);

        let f = fixture();
        assert_eq!(f.windowing.windows(&doc).len(), 1);

        let found = f.resolve(Role::Duty, &["Org: Occupier", "Org: Employer"], &doc);
        assert_eq!(found.holders, vec!["Org: Employer"]);
        assert_eq!(found.matches[0].clause, TRAINING);
    }

    #[test]
    fn repeated_subject_keeps_each_duty() {
        let text = "The employer shall keep records. The employer shall provide training.";
        let found = fixture().resolve(Role::Duty, &["Org: Employer"], text);
        let clauses: Vec<&str> = found.matches.iter().map(|m| m.clause.as_str()).collect();
        assert_eq!(clauses, vec!["The employer shall keep records.", "The employer shall provide training."]);
    }

    #[test]
    fn window_edge_never_splits_a_word() {
        let filler = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut doc = String::new();
        while doc.len() < 60_000 {
            doc.push_str(filler);
        }
        doc.push_str("The employer shall ");
        doc.push_str(&"abcdefghijklmnopqrstuvw ".repeat(20));

        let found = fixture().resolve(Role::Duty, &["Org: Employer"], &doc);
        assert_eq!(found.matches.len(), 1);
        let clause = &found.matches[0].clause;
        let body = clause.strip_suffix("...").unwrap();
        assert_eq!(body.split_whitespace().last(), Some("abcdefghijklmnopqrstuvw"));
    }

    #[test]
    fn dedupe_keeps_longest_label() {
        let m = |holder: &str| RoleMatch {
            holder: holder.into(),
            role: Role::Responsibility,
            raw_match: "the authority must".into(),
            captured_action: None,
            clause: "the authority must act.".into(),
            confidence: 0.5,
        };
        let candidates = vec![
            Candidate { key: "k".into(), role_match: m("Gvt: Authority:") },
            Candidate { key: "other".into(), role_match: m("Gvt: Authority: Local") },
            Candidate { key: "k".into(), role_match: m("Gvt: Authority: Planning") },
        ];
        let out = dedupe(candidates);
        let holders: Vec<&str> = out.iter().map(|m| m.holder.as_str()).collect();
        assert_eq!(holders, vec!["Gvt: Authority: Planning", "Gvt: Authority: Local"]);
    }

    #[test]
    fn dedup_key_ignores_case_and_punctuation() {
        let a = Refined {
            subject: "The planning authority".into(),
            modal: "must".into(),
            action: "prepare a plan.".into(),
            clause: String::new(),
        };
        let b = Refined { subject: "any Authority".into(), modal: "MUST".into(), action: "Prepare a plan".into(), clause: String::new() };
        assert_eq!(dedup_key(Role::Responsibility, &a), dedup_key(Role::Responsibility, &b));
        assert_ne!(dedup_key(Role::Responsibility, &a), dedup_key(Role::Power, &a));
    }

    #[test]
    fn deterministic_output() {
        let text = "The employer shall keep records. Every employee must co-operate with the employer. \
                    The employee may request a copy.";
        let f = fixture();
        let present = ["Ind: Employee", "Org: Employer"];
        let first = f.resolve(Role::Duty, &present, text);
        assert_eq!(first.holders, vec!["Ind: Employee", "Org: Employer"]);
        for _ in 0..3 {
            assert_eq!(f.resolve(Role::Duty, &present, text), first);
        }
    }
}
