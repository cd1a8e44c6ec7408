//! Gate Evaluator
//!
//! Gates are hard or strongly weighted rules that penalize a topology for a
//! specific requirement combination, independent of the axis scores.
//!
//! - Every rule is evaluated independently; penalties are cumulative
//! - A gate is recorded for a topology only when it carries a penalty for it
//! - Warnings describe the requirement combination, so some are emitted for
//!   topologies the rule does not penalize

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::requirements::{
    ConflictTolerance, Consistency, DataLossTolerance, Regions, ReplicationRequirements, Topology,
};

pub const BIG_PENALTY: i32 = -60;
pub const MED_PENALTY: i32 = -30;
pub const SMALL_PENALTY: i32 = -15;

/// p99 targets at or below this are unrealistic for strong cross-region setups.
pub const UNREALISTIC_LATENCY_MS: u32 = 50;

/// Stable gate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateId {
    /// Writes in several regions against a single-writer topology.
    MultiWriteSingleLeader,
    /// Writes in several regions with no tolerance for conflicts.
    MultiWriteConflictNone,
    /// Zero data loss against asynchronously converging topologies.
    ZeroDataLossAsync,
    /// Strong consistency across regions.
    StrongCrossRegion,
    /// Tight p99 with strong consistency across regions.
    UnrealisticLatency,
}

impl GateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultiWriteSingleLeader => "MULTI_WRITE_SINGLE_LEADER",
            Self::MultiWriteConflictNone => "MULTI_WRITE_CONFLICT_NONE",
            Self::ZeroDataLossAsync => "ZERO_DATA_LOSS_ASYNC",
            Self::StrongCrossRegion => "STRONG_CROSS_REGION",
            Self::UnrealisticLatency => "UNREALISTIC_LATENCY",
        }
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gate rule as data.
///
/// `penalties` and `warnings` are indexed by [`Topology::index`].
#[derive(Debug, Clone, Copy)]
pub struct GateRule {
    pub id: GateId,
    pub description: &'static str,
    pub applies: fn(&ReplicationRequirements) -> bool,
    pub penalties: [i32; 3],
    pub warnings: [Option<&'static str>; 3],
}

impl GateRule {
    /// Penalty this rule carries for a topology, whether or not it fires.
    pub fn penalty_for(&self, topology: Topology) -> i32 {
        self.penalties[topology.index()]
    }

    /// Warning this rule emits for a topology when it fires.
    pub fn warning_for(&self, topology: Topology) -> Option<&'static str> {
        self.warnings[topology.index()]
    }
}

const MULTI_WRITE_LF_WARNING: &str = "Multi-region writes are difficult with leader-follower unless writes are centralized to one region.";
const MULTI_WRITE_ML_WARNING: &str = "Multi-leader with multi-region writes can create conflicts; a conflict-free data model or centralized writes may be required.";
const MULTI_WRITE_LL_WARNING: &str = "Leaderless setups need conflict resolution (versioning/repair). If conflicts are unacceptable, consider centralizing writes.";
const ZERO_LOSS_WARNING: &str = "Zero data loss tolerance typically requires synchronous/majority acknowledgement; async replication increases risk under failures.";
const STRONG_CROSS_REGION_WARNING: &str = "Strong consistency across regions increases write latency and/or reduces availability under partitions.";
const UNREALISTIC_LATENCY_WARNING: &str = "P99 <= 50ms with strong consistency across multiple regions is usually unrealistic without relaxing constraints.";

/// Every gate rule, in evaluation order.
pub static GATE_RULES: [GateRule; 5] = [
    GateRule {
        id: GateId::MultiWriteSingleLeader,
        description: "MULTI_WRITE penalizes LEADER_FOLLOWER (single write region assumption)",
        applies: |req| req.regions == Regions::MultiWrite,
        penalties: [BIG_PENALTY, 0, 0],
        warnings: [Some(MULTI_WRITE_LF_WARNING), None, None],
    },
    GateRule {
        id: GateId::MultiWriteConflictNone,
        description: "CONFLICT_NONE + MULTI_WRITE penalizes MULTI_LEADER and LEADERLESS",
        applies: |req| {
            req.regions == Regions::MultiWrite && req.conflict_tolerance == ConflictTolerance::None
        },
        penalties: [0, BIG_PENALTY, MED_PENALTY],
        warnings: [None, Some(MULTI_WRITE_ML_WARNING), Some(MULTI_WRITE_LL_WARNING)],
    },
    GateRule {
        id: GateId::ZeroDataLossAsync,
        description: "ZERO data loss penalizes asynchronously converging topologies",
        applies: |req| req.data_loss_tolerance == DataLossTolerance::Zero,
        penalties: [0, SMALL_PENALTY, SMALL_PENALTY],
        warnings: [Some(ZERO_LOSS_WARNING); 3],
    },
    GateRule {
        id: GateId::StrongCrossRegion,
        description: "STRONG consistency across regions penalizes MULTI_LEADER and LEADERLESS",
        applies: |req| req.consistency == Consistency::Strong && req.regions.is_multi_region(),
        penalties: [0, MED_PENALTY, SMALL_PENALTY],
        warnings: [Some(STRONG_CROSS_REGION_WARNING); 3],
    },
    GateRule {
        id: GateId::UnrealisticLatency,
        description: "P99 <= 50ms with STRONG consistency across regions penalizes every topology",
        applies: |req| {
            req.latency_target_ms_p99
                .is_some_and(|ms| ms <= UNREALISTIC_LATENCY_MS)
                && req.regions.is_multi_region()
                && req.consistency == Consistency::Strong
        },
        penalties: [SMALL_PENALTY; 3],
        warnings: [Some(UNREALISTIC_LATENCY_WARNING); 3],
    },
];

/// Look up a gate rule by id.
pub fn gate_rule(id: GateId) -> &'static GateRule {
    // GATE_RULES holds exactly one rule per id, in declaration order.
    match id {
        GateId::MultiWriteSingleLeader => &GATE_RULES[0],
        GateId::MultiWriteConflictNone => &GATE_RULES[1],
        GateId::ZeroDataLossAsync => &GATE_RULES[2],
        GateId::StrongCrossRegion => &GATE_RULES[3],
        GateId::UnrealisticLatency => &GATE_RULES[4],
    }
}

/// Gate evaluation result for one topology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateOutcome {
    /// Sum of fired penalties, always <= 0.
    pub penalty: i32,
    pub gates_fired: Vec<GateId>,
    pub warnings: Vec<String>,
    pub reasons: Vec<String>,
}

impl GateOutcome {
    /// Penalty contributed by a single fired gate, if it fired.
    pub fn penalty_of(&self, id: GateId, topology: Topology) -> Option<i32> {
        self.gates_fired
            .contains(&id)
            .then(|| gate_rule(id).penalty_for(topology))
    }
}

/// Apply every gate rule to one topology.
pub fn evaluate_gates(topology: Topology, req: &ReplicationRequirements) -> GateOutcome {
    let mut outcome = GateOutcome::default();

    for rule in GATE_RULES.iter().filter(|rule| (rule.applies)(req)) {
        let penalty = rule.penalty_for(topology);
        if penalty != 0 {
            outcome.penalty += penalty;
            outcome.gates_fired.push(rule.id);
        }
        if let Some(warning) = rule.warning_for(topology) {
            outcome.warnings.push(warning.to_string());
        }
    }

    if !outcome.gates_fired.is_empty() {
        let applied: Vec<String> = outcome
            .gates_fired
            .iter()
            .map(|id| format!("{} ({})", id, gate_rule(*id).penalty_for(topology)))
            .collect();
        outcome
            .reasons
            .push(format!("Gate penalties applied: {}", applied.join("; ")));
    }

    outcome
}
