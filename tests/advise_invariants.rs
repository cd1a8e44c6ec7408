//! Advisor Invariant Tests
//!
//! Exhaustive checks over every requirement combination:
//! - Determinism: identical inputs produce identical recommendations
//! - Totality: every combination yields a recommendation
//! - Score consistency: total = gate penalty + axis scores
//! - Selection: the winner holds the maximum total, ties go to the
//!   simplest topology
//! - Quorum presence: quorum iff leaderless

use replication_advisor::advisor::{assess, advise, evaluate_gates, GateId, CandidateEvaluation};
use replication_advisor::explain;
use replication_advisor::requirements::{
    AvailabilityPriority, ConflictTolerance, Consistency, DataLossTolerance, Regions,
    ReplicationRequirements, Topology,
};

const LATENCIES: [Option<u32>; 6] = [None, Some(10), Some(50), Some(51), Some(80), Some(150)];

fn all_requirements() -> Vec<ReplicationRequirements> {
    let mut all = Vec::new();
    for regions in Regions::ALL {
        for consistency in Consistency::ALL {
            for availability in AvailabilityPriority::ALL {
                for loss in DataLossTolerance::ALL {
                    for conflict in ConflictTolerance::ALL {
                        for latency in LATENCIES {
                            all.push(
                                ReplicationRequirements::new(
                                    regions,
                                    consistency,
                                    availability,
                                    loss,
                                    conflict,
                                )
                                .with_latency_target(latency),
                            );
                        }
                    }
                }
            }
        }
    }
    all
}

fn max_score(candidates: &[CandidateEvaluation]) -> i32 {
    candidates.iter().map(|c| c.total_score).max().unwrap()
}

// =============================================================================
// Determinism & Totality
// =============================================================================

/// Repeated calls return identical results.
#[test]
fn test_advise_is_deterministic() {
    for req in all_requirements() {
        assert_eq!(advise(&req), advise(&req));
        assert_eq!(
            serde_json::to_string(&advise(&req)).unwrap(),
            serde_json::to_string(&advise(&req)).unwrap()
        );
    }
}

/// Every combination produces a fully populated recommendation.
#[test]
fn test_advise_is_total() {
    for req in all_requirements() {
        let rec = advise(&req);
        assert!(!rec.tradeoffs.is_empty());
        assert!(!rec.failure_behaviour.is_empty());
        assert!(rec.explanation.starts_with("Recommended "));
    }
}

// =============================================================================
// Score Consistency & Selection
// =============================================================================

/// Totals are recomputable from their parts; exactly one candidate per
/// topology.
#[test]
fn test_score_consistency() {
    for req in all_requirements() {
        let assessment = assess(&req);
        let topologies: Vec<Topology> = assessment.candidates.iter().map(|c| c.topology).collect();
        assert_eq!(topologies, Topology::ALL.to_vec());

        for candidate in assessment.candidates.iter() {
            let axes: i32 = candidate.axis_scores.iter().map(|(_, s)| s).sum();
            assert_eq!(candidate.total_score, candidate.gate_penalty + axes);
            assert_eq!(
                candidate.gate_penalty,
                evaluate_gates(candidate.topology, &req).penalty
            );
        }
    }
}

/// The recommended topology holds the maximum total; ties resolve in
/// complexity order.
#[test]
fn test_winner_has_max_score_and_tie_break() {
    for req in all_requirements() {
        let assessment = assess(&req);
        let best = max_score(&assessment.candidates);
        let expected = assessment
            .candidates
            .iter()
            .filter(|c| c.total_score == best)
            .map(|c| c.topology)
            .min()
            .unwrap();

        assert_eq!(assessment.recommendation.topology, expected);
        assert_eq!(assessment.winner().total_score, best);
    }
}

/// A known leader-follower / leaderless tie resolves to leader-follower.
#[test]
fn test_tie_selects_leader_follower() {
    let req = ReplicationRequirements::new(
        Regions::Single,
        Consistency::Eventual,
        AvailabilityPriority::Med,
        DataLossTolerance::Bounded,
        ConflictTolerance::None,
    );
    let assessment = assess(&req);
    let scores: Vec<i32> = assessment.candidates.iter().map(|c| c.total_score).collect();
    assert_eq!(scores, vec![30, 25, 30]);
    assert_eq!(assessment.recommendation.topology, Topology::LeaderFollower);
}

// =============================================================================
// Gates
// =============================================================================

/// MULTI_WRITE costs leader-follower exactly 60 more than SINGLE.
#[test]
fn test_multi_write_gate_is_exactly_60() {
    for req in all_requirements() {
        let latency_gate_stacks = req.consistency == Consistency::Strong
            && req.latency_target_ms_p99.is_some_and(|ms| ms <= 50);
        if latency_gate_stacks {
            // Only MULTI_WRITE is multi-region here, so the latency gate
            // hits leader-follower on one side.
            continue;
        }
        let single = ReplicationRequirements {
            regions: Regions::Single,
            ..req
        };
        let multi_write = ReplicationRequirements {
            regions: Regions::MultiWrite,
            ..req
        };
        let single_penalty = evaluate_gates(Topology::LeaderFollower, &single).penalty;
        let multi_penalty = evaluate_gates(Topology::LeaderFollower, &multi_write).penalty;
        assert_eq!(multi_penalty - single_penalty, -60);
    }
}

/// Strong consistency with a tight multi-region target costs a further 15.
#[test]
fn test_multi_write_gate_stacks_with_latency_gate() {
    for req in all_requirements() {
        let stacks = req.consistency == Consistency::Strong
            && req.latency_target_ms_p99.is_some_and(|ms| ms <= 50);
        if !stacks {
            continue;
        }
        let single = ReplicationRequirements {
            regions: Regions::Single,
            ..req
        };
        let multi_write = ReplicationRequirements {
            regions: Regions::MultiWrite,
            ..req
        };
        let single_penalty = evaluate_gates(Topology::LeaderFollower, &single).penalty;
        let multi_penalty = evaluate_gates(Topology::LeaderFollower, &multi_write).penalty;
        assert_eq!(multi_penalty - single_penalty, -75);
    }
}

/// The gate is recorded whenever it applies, whatever the consistency.
#[test]
fn test_multi_write_gate_always_fires_for_leader_follower() {
    for req in all_requirements().into_iter().filter(|r| r.regions == Regions::MultiWrite) {
        let outcome = evaluate_gates(Topology::LeaderFollower, &req);
        assert!(outcome.gates_fired.contains(&GateId::MultiWriteSingleLeader));
    }
}

/// Gate penalties are never positive.
#[test]
fn test_gate_penalties_non_positive() {
    for req in all_requirements() {
        for topology in Topology::ALL {
            assert!(evaluate_gates(topology, &req).penalty <= 0);
        }
    }
}

// =============================================================================
// Recommendation shape
// =============================================================================

/// Quorum is present iff the topology is leaderless, and always strict.
#[test]
fn test_quorum_presence() {
    for req in all_requirements() {
        let rec = advise(&req);
        assert_eq!(rec.quorum.is_some(), rec.topology == Topology::Leaderless);
        if let Some(quorum) = rec.quorum {
            assert!(quorum.is_strict());
            let expected_w = if req.data_loss_tolerance == DataLossTolerance::Zero { 3 } else { 2 };
            assert_eq!(quorum.w, expected_w);
        }
    }
}

/// Warnings and trade-offs carry no duplicates.
#[test]
fn test_recommendation_lists_deduplicated() {
    for req in all_requirements() {
        let rec = advise(&req);
        for list in [&rec.warnings, &rec.tradeoffs] {
            let mut seen = std::collections::HashSet::new();
            assert!(list.iter().all(|item| seen.insert(item)));
        }
    }
}

/// The explanation's conclusion is the advisor's recommendation.
#[test]
fn test_explain_agrees_with_advise() {
    for req in all_requirements().into_iter().step_by(7) {
        let explanation = explain(&req);
        assert_eq!(explanation.conclusion, advise(&req));
        assert_eq!(explanation.ranking[0], explanation.conclusion.topology);
    }
}
