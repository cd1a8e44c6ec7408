//! Recommendation Builder
//!
//! Maps the winning topology to concrete operational policies and compiles
//! the human-readable warnings, trade-offs and explanation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::candidate::CandidateEvaluation;
use super::quorum::Quorum;
use crate::requirements::{Consistency, ReplicationRequirements, Topology};

/// How data moves between replicas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplicationMode {
    PrimaryBackup,
    MultiPrimary,
    Quorum,
}

/// Where reads are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadPolicy {
    LeaderRead,
    ReplicaReadAllowed,
    LocalRead,
    QuorumRead,
}

/// Who accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    SingleWriter,
    MultiWriter,
    QuorumWrite,
}

impl fmt::Display for ReplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PrimaryBackup => "primary-backup",
            Self::MultiPrimary => "multi-primary",
            Self::Quorum => "quorum",
        })
    }
}

impl fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeaderRead => "leader-read",
            Self::ReplicaReadAllowed => "replica-read-allowed",
            Self::LocalRead => "local-read",
            Self::QuorumRead => "quorum-read",
        })
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SingleWriter => "single-writer",
            Self::MultiWriter => "multi-writer",
            Self::QuorumWrite => "quorum-write",
        })
    }
}

/// The advisor's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationRecommendation {
    pub topology: Topology,
    pub replication_mode: ReplicationMode,
    pub read_policy: ReadPolicy,
    pub write_policy: WritePolicy,
    /// Present iff `topology` is `LEADERLESS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quorum: Option<Quorum>,
    pub warnings: Vec<String>,
    pub tradeoffs: Vec<String>,
    pub failure_behaviour: String,
    pub explanation: String,
}

/// Policies implied by a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyPolicies {
    pub replication_mode: ReplicationMode,
    pub read_policy: ReadPolicy,
    pub write_policy: WritePolicy,
    pub quorum: Option<Quorum>,
}

impl TopologyPolicies {
    pub fn for_topology(topology: Topology, req: &ReplicationRequirements) -> Self {
        match topology {
            Topology::LeaderFollower => Self {
                replication_mode: ReplicationMode::PrimaryBackup,
                read_policy: if req.consistency == Consistency::Strong {
                    ReadPolicy::LeaderRead
                } else {
                    ReadPolicy::ReplicaReadAllowed
                },
                write_policy: WritePolicy::SingleWriter,
                quorum: None,
            },
            Topology::MultiLeader => Self {
                replication_mode: ReplicationMode::MultiPrimary,
                read_policy: ReadPolicy::LocalRead,
                write_policy: WritePolicy::MultiWriter,
                quorum: None,
            },
            Topology::Leaderless => Self {
                replication_mode: ReplicationMode::Quorum,
                read_policy: ReadPolicy::QuorumRead,
                write_policy: WritePolicy::QuorumWrite,
                quorum: Some(Quorum::for_data_loss(req.data_loss_tolerance)),
            },
        }
    }
}

/// What happens to the deployment when a node or link fails.
pub fn failure_behaviour(topology: Topology) -> &'static str {
    match topology {
        Topology::LeaderFollower => {
            "Unavailable for writes if the leader is unreachable until failover completes; replicas keep serving reads."
        }
        Topology::MultiLeader => {
            "Every leader keeps accepting writes through a partition; conflicting writes are reconciled after it heals."
        }
        Topology::Leaderless => {
            "Reads and writes succeed while R and W replicas respond; stale replicas converge through read repair and anti-entropy."
        }
    }
}

/// Trade-offs inherent to a topology, independent of requirements.
pub fn inherent_tradeoffs(topology: Topology) -> &'static [&'static str] {
    match topology {
        Topology::LeaderFollower => &[
            "A single writer rules out write conflicts but caps write throughput at one node.",
            "Writers outside the leader's region pay a cross-region round trip.",
            "Replica reads may be stale unless routed to the leader.",
        ],
        Topology::MultiLeader => &[
            "Writes are accepted locally in every region at the cost of conflict resolution.",
            "Leaders converge asynchronously, so regions can observe divergent values.",
        ],
        Topology::Leaderless => &[
            "There is no failover step; any replica can serve a request within quorum.",
            "Every read and write waits on a quorum of replicas.",
            "Convergence depends on versioning, read repair and anti-entropy.",
        ],
    }
}

/// Build the recommendation for `winner`. `ranked` is every candidate, best
/// first, and must include the winner.
pub fn build_recommendation(
    req: &ReplicationRequirements,
    winner: &CandidateEvaluation,
    ranked: &[&CandidateEvaluation],
) -> ReplicationRecommendation {
    let policies = TopologyPolicies::for_topology(winner.topology, req);

    let warnings = dedup_preserving_order(winner.warnings.iter().cloned());
    let tradeoffs = dedup_preserving_order(
        inherent_tradeoffs(winner.topology)
            .iter()
            .map(|t| t.to_string())
            .chain(winner.key_reasons.iter().cloned()),
    );

    ReplicationRecommendation {
        topology: winner.topology,
        replication_mode: policies.replication_mode,
        read_policy: policies.read_policy,
        write_policy: policies.write_policy,
        quorum: policies.quorum,
        warnings,
        tradeoffs,
        failure_behaviour: failure_behaviour(winner.topology).to_string(),
        explanation: explain_selection(winner, ranked),
    }
}

fn explain_selection(winner: &CandidateEvaluation, ranked: &[&CandidateEvaluation]) -> String {
    let axes: Vec<String> = winner
        .axis_scores
        .iter()
        .map(|(axis, score)| format!("{}={}", axis, score))
        .collect();

    let mut lines = vec![format!(
        "Recommended {} with total score {} ({}; gate penalty {}).",
        winner.topology,
        winner.total_score,
        axes.join(", "),
        winner.gate_penalty
    )];

    let reasons = dedup_preserving_order(winner.key_reasons.iter().cloned());
    if reasons.is_empty() {
        lines.push("No gate penalties applied.".to_string());
    } else {
        lines.extend(reasons);
    }

    for other in ranked.iter().filter(|c| c.topology != winner.topology) {
        let detail = if other.key_reasons.is_empty() {
            "no gate penalties".to_string()
        } else {
            other.key_reasons.join("; ")
        };
        lines.push(format!(
            "{} scored {} ({}).",
            other.topology, other.total_score, detail
        ));
    }

    lines.join("\n")
}

fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::candidate::evaluate_candidates;
    use crate::advisor::selector::rank;
    use crate::requirements::{AvailabilityPriority, ConflictTolerance, DataLossTolerance, Regions};

    fn req(consistency: Consistency, loss: DataLossTolerance) -> ReplicationRequirements {
        ReplicationRequirements::new(
            Regions::Single,
            consistency,
            AvailabilityPriority::Med,
            loss,
            ConflictTolerance::Low,
        )
    }

    #[test]
    fn test_leader_follower_read_policy_follows_consistency() {
        let strong = TopologyPolicies::for_topology(
            Topology::LeaderFollower,
            &req(Consistency::Strong, DataLossTolerance::Bounded),
        );
        assert_eq!(strong.read_policy, ReadPolicy::LeaderRead);
        assert_eq!(strong.write_policy, WritePolicy::SingleWriter);
        assert_eq!(strong.replication_mode, ReplicationMode::PrimaryBackup);
        assert!(strong.quorum.is_none());

        let session = TopologyPolicies::for_topology(
            Topology::LeaderFollower,
            &req(Consistency::Session, DataLossTolerance::Bounded),
        );
        assert_eq!(session.read_policy, ReadPolicy::ReplicaReadAllowed);
    }

    #[test]
    fn test_multi_leader_policies() {
        let p = TopologyPolicies::for_topology(
            Topology::MultiLeader,
            &req(Consistency::Eventual, DataLossTolerance::Bounded),
        );
        assert_eq!(p.replication_mode, ReplicationMode::MultiPrimary);
        assert_eq!(p.read_policy, ReadPolicy::LocalRead);
        assert_eq!(p.write_policy, WritePolicy::MultiWriter);
        assert!(p.quorum.is_none());
    }

    #[test]
    fn test_leaderless_quorum_follows_data_loss() {
        let bounded = TopologyPolicies::for_topology(
            Topology::Leaderless,
            &req(Consistency::Eventual, DataLossTolerance::Bounded),
        );
        assert_eq!(bounded.quorum, Some(Quorum { n: 3, r: 2, w: 2 }));

        let zero = TopologyPolicies::for_topology(
            Topology::Leaderless,
            &req(Consistency::Eventual, DataLossTolerance::Zero),
        );
        assert_eq!(zero.quorum, Some(Quorum { n: 3, r: 2, w: 3 }));
        assert_eq!(zero.read_policy, ReadPolicy::QuorumRead);
        assert_eq!(zero.write_policy, WritePolicy::QuorumWrite);
    }

    #[test]
    fn test_policy_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReadPolicy::ReplicaReadAllowed).unwrap(),
            "\"replica-read-allowed\""
        );
        assert_eq!(ReplicationMode::PrimaryBackup.to_string(), "primary-backup");
        assert_eq!(WritePolicy::QuorumWrite.to_string(), "quorum-write");
    }

    #[test]
    fn test_dedup_preserves_first_occurrence() {
        let items = vec!["b", "a", "b", "c", "a"].into_iter().map(String::from);
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_build_uses_winner_warnings() {
        let r = req(Consistency::Strong, DataLossTolerance::Zero);
        let candidates = evaluate_candidates(&r);
        let ranked = rank(&candidates);
        let winner = ranked[0];
        let rec = build_recommendation(&r, winner, &ranked);

        assert_eq!(rec.topology, Topology::LeaderFollower);
        assert_eq!(rec.warnings, winner.warnings);
        assert_eq!(rec.tradeoffs.len(), inherent_tradeoffs(Topology::LeaderFollower).len());
        assert!(rec.explanation.starts_with("Recommended LEADER_FOLLOWER"));
        assert!(rec.explanation.contains("No gate penalties applied."));
        assert!(rec.explanation.contains("LEADERLESS scored"));
    }

    #[test]
    fn test_quorum_omitted_from_json_when_absent() {
        let r = req(Consistency::Strong, DataLossTolerance::Bounded);
        let candidates = evaluate_candidates(&r);
        let ranked = rank(&candidates);
        let rec = build_recommendation(&r, ranked[0], &ranked);
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("quorum").is_none());
        assert_eq!(json["replicationMode"], "primary-backup");
        assert_eq!(json["failureBehaviour"], failure_behaviour(Topology::LeaderFollower));
    }
}
