//! Requirement Model
//!
//! The validated, fully-typed description of what a deployment needs.
//! Every required field is a closed enumeration; only the latency target
//! and the workload descriptor may be absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Replication architecture style.
///
/// Declaration order is also the tie-break order: ascending operational
/// complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topology {
    /// Single writer, read replicas.
    LeaderFollower,
    /// Multiple accepting writers, async convergence.
    MultiLeader,
    /// No designated leader, read/write quorums.
    Leaderless,
}

impl Topology {
    /// The fixed candidate set, in tie-break order.
    pub const ALL: [Topology; 3] = [
        Topology::LeaderFollower,
        Topology::MultiLeader,
        Topology::Leaderless,
    ];

    /// Row index into scoring tables.
    pub const fn index(self) -> usize {
        match self {
            Topology::LeaderFollower => 0,
            Topology::MultiLeader => 1,
            Topology::Leaderless => 2,
        }
    }

    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::LeaderFollower => "LEADER_FOLLOWER",
            Topology::MultiLeader => "MULTI_LEADER",
            Topology::Leaderless => "LEADERLESS",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the data lives and where writes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regions {
    /// One region, one writer.
    Single,
    /// Multiple read regions, a single write region.
    MultiRead,
    /// Multiple regions accept writes.
    MultiWrite,
}

impl Regions {
    pub const ALL: [Regions; 3] = [Regions::Single, Regions::MultiRead, Regions::MultiWrite];

    pub const fn index(self) -> usize {
        match self {
            Regions::Single => 0,
            Regions::MultiRead => 1,
            Regions::MultiWrite => 2,
        }
    }

    /// True for any deployment spanning more than one region.
    pub fn is_multi_region(&self) -> bool {
        !matches!(self, Regions::Single)
    }
}

/// Required read consistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Consistency {
    Strong,
    Session,
    Eventual,
}

impl Consistency {
    pub const ALL: [Consistency; 3] = [
        Consistency::Strong,
        Consistency::Session,
        Consistency::Eventual,
    ];

    pub const fn index(self) -> usize {
        match self {
            Consistency::Strong => 0,
            Consistency::Session => 1,
            Consistency::Eventual => 2,
        }
    }
}

/// How much the deployment values staying available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityPriority {
    High,
    Med,
    Low,
}

impl AvailabilityPriority {
    pub const ALL: [AvailabilityPriority; 3] = [
        AvailabilityPriority::High,
        AvailabilityPriority::Med,
        AvailabilityPriority::Low,
    ];

    pub const fn index(self) -> usize {
        match self {
            AvailabilityPriority::High => 0,
            AvailabilityPriority::Med => 1,
            AvailabilityPriority::Low => 2,
        }
    }
}

/// Acceptable loss of acknowledged writes under failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataLossTolerance {
    /// No acknowledged write may be lost.
    Zero,
    /// A bounded window of recent writes may be lost.
    Bounded,
}

impl DataLossTolerance {
    pub const ALL: [DataLossTolerance; 2] = [DataLossTolerance::Zero, DataLossTolerance::Bounded];
}

/// Tolerance for concurrent conflicting writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictTolerance {
    None,
    Low,
    High,
}

impl ConflictTolerance {
    pub const ALL: [ConflictTolerance; 3] = [
        ConflictTolerance::None,
        ConflictTolerance::Low,
        ConflictTolerance::High,
    ];

    pub const fn index(self) -> usize {
        match self {
            ConflictTolerance::None => 0,
            ConflictTolerance::Low => 1,
            ConflictTolerance::High => 2,
        }
    }
}

/// Workload shape.
///
/// Carried through for forward compatibility; no scoring rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Workload {
    ReadHeavy,
    WriteHeavy,
    Balanced,
}

/// Validated replication requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<Workload>,
    pub regions: Regions,
    pub consistency: Consistency,
    pub availability_priority: AvailabilityPriority,
    /// p99 target in milliseconds. `None` means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_target_ms_p99: Option<u32>,
    pub data_loss_tolerance: DataLossTolerance,
    pub conflict_tolerance: ConflictTolerance,
}

impl ReplicationRequirements {
    /// Latency assumed for scoring when no target is given.
    pub const DEFAULT_LATENCY_MS: u32 = 150;

    /// Create requirements with no workload and no latency target.
    pub fn new(
        regions: Regions,
        consistency: Consistency,
        availability_priority: AvailabilityPriority,
        data_loss_tolerance: DataLossTolerance,
        conflict_tolerance: ConflictTolerance,
    ) -> Self {
        Self {
            workload: None,
            regions,
            consistency,
            availability_priority,
            latency_target_ms_p99: None,
            data_loss_tolerance,
            conflict_tolerance,
        }
    }

    /// Set the p99 latency target.
    pub fn with_latency_target(mut self, latency_ms: Option<u32>) -> Self {
        self.latency_target_ms_p99 = latency_ms;
        self
    }

    /// Set the workload descriptor.
    pub fn with_workload(mut self, workload: Workload) -> Self {
        self.workload = Some(workload);
        self
    }

    /// Latency used for scoring. Never surfaced as a real target.
    pub fn effective_latency_ms(&self) -> u32 {
        self.latency_target_ms_p99.unwrap_or(Self::DEFAULT_LATENCY_MS)
    }
}
