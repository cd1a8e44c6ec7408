//! Explanation Engine
//!
//! Explanations are structured records over the scoring state of one
//! advisory run: which gate rules held, what every candidate scored, and
//! how the winner was chosen. They carry no authority of their own; the
//! conclusion is exactly what `advise` returns for the same inputs.

pub mod model;
pub mod rules;

pub use model::{Evidence, Explanation, ExplanationBuilder, RuleApplication, RuleEvaluation};
pub use rules::{RuleDefinition, RuleKind, RuleRegistry, TopologyPenalty};

use crate::advisor::{assess, GATE_RULES};
use crate::observability::Event;
use crate::requirements::ReplicationRequirements;

/// Build the structured explanation for one set of requirements.
pub fn explain(req: &ReplicationRequirements) -> Explanation {
    let registry = RuleRegistry::new();
    let assessment = assess(req);

    let mut builder = Explanation::builder(*req);

    for rule in GATE_RULES.iter() {
        let held = (rule.applies)(req);
        let mut evidence = Evidence::empty();
        for candidate in assessment.candidates.iter() {
            let applied = if candidate.gates_fired.contains(&rule.id) {
                rule.penalty_for(candidate.topology)
            } else {
                0
            };
            evidence.add(candidate.topology.as_str(), applied);
        }
        let description = registry.description(rule.id.as_str());
        let application = if held {
            RuleApplication::satisfied(rule.id.as_str(), description, evidence)
        } else {
            RuleApplication::not_satisfied(rule.id.as_str(), description, evidence)
        };
        builder = builder.rule(application);
    }

    let ranking = assessment.ranking().iter().map(|c| c.topology).collect();
    builder = builder.ranking(ranking);
    for candidate in assessment.candidates {
        builder = builder.candidate(candidate);
    }

    let explanation = builder.conclude(assessment.recommendation);
    tracing::debug!(
        event = Event::ExplainComplete.as_str(),
        rules_fired = explanation.fired_rules().count()
    );
    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::advise;
    use crate::requirements::{
        AvailabilityPriority, ConflictTolerance, Consistency, DataLossTolerance, Regions, Topology,
    };

    fn strong_multi_write() -> ReplicationRequirements {
        ReplicationRequirements::new(
            Regions::MultiWrite,
            Consistency::Strong,
            AvailabilityPriority::Med,
            DataLossTolerance::Bounded,
            ConflictTolerance::None,
        )
    }

    #[test]
    fn test_conclusion_matches_advise() {
        let req = strong_multi_write();
        assert_eq!(explain(&req).conclusion, advise(&req));
    }

    #[test]
    fn test_every_gate_rule_reported() {
        let explanation = explain(&strong_multi_write());
        assert_eq!(explanation.rules_applied.len(), GATE_RULES.len());
        let fired: Vec<&str> = explanation
            .fired_rules()
            .map(|r| r.rule_id.as_str())
            .collect();
        assert_eq!(
            fired,
            vec![
                "MULTI_WRITE_SINGLE_LEADER",
                "MULTI_WRITE_CONFLICT_NONE",
                "STRONG_CROSS_REGION"
            ]
        );
    }

    #[test]
    fn test_evidence_records_applied_penalties() {
        let explanation = explain(&strong_multi_write());
        let conflict = &explanation.rules_applied[1];
        assert_eq!(conflict.evidence.get("LEADER_FOLLOWER").unwrap(), 0);
        assert_eq!(conflict.evidence.get("MULTI_LEADER").unwrap(), -60);
        assert_eq!(conflict.evidence.get("LEADERLESS").unwrap(), -30);
    }

    #[test]
    fn test_rule_that_did_not_hold_is_reported() {
        let explanation = explain(&strong_multi_write());
        let zero_loss = &explanation.rules_applied[2];
        assert_eq!(zero_loss.rule_id, "ZERO_DATA_LOSS_ASYNC");
        assert_eq!(zero_loss.evaluation, RuleEvaluation::False);
        assert!(!zero_loss.is_satisfied());
        assert_eq!(*zero_loss.evidence.get("LEADERLESS").unwrap(), 0);
    }

    #[test]
    fn test_ranking_and_candidates() {
        let explanation = explain(&strong_multi_write());
        assert_eq!(explanation.candidates.len(), 3);
        assert_eq!(
            explanation.ranking,
            vec![Topology::Leaderless, Topology::LeaderFollower, Topology::MultiLeader]
        );
    }
}
