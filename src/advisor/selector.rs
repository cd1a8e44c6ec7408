//! Selector
//!
//! Picks the candidate with the strictly greatest total score. Equal totals
//! resolve to the topology with the lower operational complexity:
//! LEADER_FOLLOWER, then MULTI_LEADER, then LEADERLESS.

use std::cmp::Ordering;

use super::candidate::CandidateEvaluation;

/// Ordering under which the best candidate sorts first.
fn rank_order(a: &CandidateEvaluation, b: &CandidateEvaluation) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| a.topology.cmp(&b.topology))
}

/// Select the winning candidate from the full candidate set.
pub fn select(candidates: &[CandidateEvaluation; 3]) -> &CandidateEvaluation {
    let [first, rest @ ..] = candidates;
    rest.iter().fold(first, |best, candidate| {
        if rank_order(candidate, best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

/// All candidates, best first.
pub fn rank(candidates: &[CandidateEvaluation]) -> Vec<&CandidateEvaluation> {
    let mut ranked: Vec<&CandidateEvaluation> = candidates.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::axes::AxisScores;
    use crate::requirements::Topology;

    fn candidate(topology: Topology, total_score: i32) -> CandidateEvaluation {
        CandidateEvaluation {
            topology,
            total_score,
            gate_penalty: 0,
            axis_scores: AxisScores {
                consistency_fit: total_score,
                availability_fit: 0,
                latency_fit: 0,
                conflict_risk: 0,
            },
            gates_fired: Vec::new(),
            warnings: Vec::new(),
            key_reasons: Vec::new(),
        }
    }

    #[test]
    fn test_select_highest_score() {
        let candidates = [
            candidate(Topology::LeaderFollower, 10),
            candidate(Topology::MultiLeader, 30),
            candidate(Topology::Leaderless, 20),
        ];
        assert_eq!(select(&candidates).topology, Topology::MultiLeader);
    }

    #[test]
    fn test_three_way_tie_prefers_leader_follower() {
        let candidates = [
            candidate(Topology::Leaderless, 25),
            candidate(Topology::MultiLeader, 25),
            candidate(Topology::LeaderFollower, 25),
        ];
        assert_eq!(select(&candidates).topology, Topology::LeaderFollower);
    }

    #[test]
    fn test_tie_between_multi_leader_and_leaderless() {
        let candidates = [
            candidate(Topology::LeaderFollower, -40),
            candidate(Topology::Leaderless, 12),
            candidate(Topology::MultiLeader, 12),
        ];
        assert_eq!(select(&candidates).topology, Topology::MultiLeader);
    }

    #[test]
    fn test_negative_scores_still_select() {
        let candidates = [
            candidate(Topology::LeaderFollower, -29),
            candidate(Topology::MultiLeader, -69),
            candidate(Topology::Leaderless, -19),
        ];
        assert_eq!(select(&candidates).topology, Topology::Leaderless);
    }

    #[test]
    fn test_rank_orders_best_first() {
        let candidates = [
            candidate(Topology::LeaderFollower, 5),
            candidate(Topology::MultiLeader, 9),
            candidate(Topology::Leaderless, 5),
        ];
        let ranked: Vec<Topology> = rank(&candidates).iter().map(|c| c.topology).collect();
        assert_eq!(
            ranked,
            vec![Topology::MultiLeader, Topology::LeaderFollower, Topology::Leaderless]
        );
    }
}
