//! Axis Scorer
//!
//! Four independent fitness dimensions, each a pure and total function of
//! (topology, requirements). Scores sit roughly on a 0-10 scale; higher is
//! a better fit. Weighting lives in the tables below, indexed by enum
//! ordinal, so every value is auditable in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::requirements::{Consistency, ReplicationRequirements, Topology};

/// p99 targets at or below this are considered tight.
pub const TIGHT_LATENCY_MS: u32 = 80;

/// Scoring axis, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    ConsistencyFit,
    AvailabilityFit,
    LatencyFit,
    ConflictRisk,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::ConsistencyFit,
        Axis::AvailabilityFit,
        Axis::LatencyFit,
        Axis::ConflictRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::ConsistencyFit => "consistencyFit",
            Axis::AvailabilityFit => "availabilityFit",
            Axis::LatencyFit => "latencyFit",
            Axis::ConflictRisk => "conflictRisk",
        }
    }

    /// Score one topology on this axis.
    pub fn score(&self, topology: Topology, req: &ReplicationRequirements) -> i32 {
        match self {
            Axis::ConsistencyFit => score_consistency_fit(topology, req),
            Axis::AvailabilityFit => score_availability_fit(topology, req),
            Axis::LatencyFit => score_latency_fit(topology, req),
            Axis::ConflictRisk => score_conflict_risk(topology, req),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-axis scores for one topology. Field order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScores {
    pub consistency_fit: i32,
    pub availability_fit: i32,
    pub latency_fit: i32,
    pub conflict_risk: i32,
}

impl AxisScores {
    /// Score every axis.
    pub fn evaluate(topology: Topology, req: &ReplicationRequirements) -> Self {
        Self {
            consistency_fit: Axis::ConsistencyFit.score(topology, req),
            availability_fit: Axis::AvailabilityFit.score(topology, req),
            latency_fit: Axis::LatencyFit.score(topology, req),
            conflict_risk: Axis::ConflictRisk.score(topology, req),
        }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::ConsistencyFit => self.consistency_fit,
            Axis::AvailabilityFit => self.availability_fit,
            Axis::LatencyFit => self.latency_fit,
            Axis::ConflictRisk => self.conflict_risk,
        }
    }

    /// (axis, score) pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i32)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    pub fn sum(&self) -> i32 {
        self.iter().map(|(_, score)| score).sum()
    }
}

// Rows: consistency (STRONG, SESSION, EVENTUAL). Columns: topology.
const CONSISTENCY_FIT: [[i32; 3]; 3] = [
    [10, 3, 6],
    [8, 6, 7],
    [6, 8, 9],
];

const AVAILABILITY_BASE: [i32; 3] = [6, 8, 9];

// Rows: priority (HIGH, MED, LOW). Columns: topology.
const AVAILABILITY_ADJUST: [[i32; 3]; 3] = [
    [-2, 1, 1],
    [0, 0, 0],
    [-1, -1, -1],
];

// Indexed by regions (SINGLE, MULTI_READ, MULTI_WRITE), then latency class,
// then topology. Classes: strong+tight, strong+relaxed, tight, relaxed.
// Single-region rows ignore consistency.
const LATENCY_FIT: [[[i32; 3]; 4]; 3] = [
    [[9, 7, 7], [8, 7, 8], [9, 7, 7], [8, 7, 8]],
    [[4, 7, 7], [5, 7, 7], [5, 7, 7], [6, 7, 7]],
    [[4, 8, 7], [5, 8, 7], [5, 8, 7], [6, 8, 7]],
];

// Rows: conflict tolerance (NONE, LOW, HIGH). Columns: topology.
const CONFLICT_RISK: [[i32; 3]; 3] = [
    [10, 2, 4],
    [10, 4, 6],
    [10, 6, 7],
];

pub fn score_consistency_fit(topology: Topology, req: &ReplicationRequirements) -> i32 {
    CONSISTENCY_FIT[req.consistency.index()][topology.index()]
}

pub fn score_availability_fit(topology: Topology, req: &ReplicationRequirements) -> i32 {
    AVAILABILITY_BASE[topology.index()]
        + AVAILABILITY_ADJUST[req.availability_priority.index()][topology.index()]
}

pub fn score_latency_fit(topology: Topology, req: &ReplicationRequirements) -> i32 {
    let tight = req.effective_latency_ms() <= TIGHT_LATENCY_MS;
    let class = match (req.consistency == Consistency::Strong, tight) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    };
    LATENCY_FIT[req.regions.index()][class][topology.index()]
}

/// Higher is safer.
pub fn score_conflict_risk(topology: Topology, req: &ReplicationRequirements) -> i32 {
    CONFLICT_RISK[req.conflict_tolerance.index()][topology.index()]
}
