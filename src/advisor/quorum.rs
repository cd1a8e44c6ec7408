//! Quorum sizing for leaderless deployments.

use serde::{Deserialize, Serialize};

use crate::requirements::DataLossTolerance;

/// Replica count recommended for leaderless deployments.
pub const DEFAULT_REPLICAS: u32 = 3;

/// Smallest strict majority of `n`.
pub const fn majority(n: u32) -> u32 {
    n / 2 + 1
}

/// Replica count with read and write quorums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quorum {
    pub n: u32,
    pub r: u32,
    pub w: u32,
}

impl Quorum {
    /// Majority reads and writes over `DEFAULT_REPLICAS`. Zero data loss
    /// requires acknowledgement from every replica.
    pub fn for_data_loss(tolerance: DataLossTolerance) -> Self {
        let n = DEFAULT_REPLICAS;
        let w = match tolerance {
            DataLossTolerance::Zero => n,
            DataLossTolerance::Bounded => majority(n),
        };
        Self {
            n,
            r: majority(n),
            w,
        }
    }

    /// Read and write quorums overlap (R + W > N), so reads observe the
    /// latest acknowledged write.
    pub fn is_strict(&self) -> bool {
        self.r + self.w > self.n
    }

    /// Replicas that may be unreachable while writes still succeed.
    pub fn write_fault_tolerance(&self) -> u32 {
        self.n - self.w
    }
}
