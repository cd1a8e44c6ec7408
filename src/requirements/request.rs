//! Raw Requirements Request
//!
//! The unvalidated shape a caller submits. Every field is optional here so
//! that a missing field is reported by name instead of as a generic
//! deserialization failure.
//!
//! Validation is:
//! - Fail-fast (first missing field wins)
//! - Deterministic (fields checked in declaration order)
//! - Completed before any scoring starts

use serde::{Deserialize, Serialize};

use super::errors::{InvalidRequirementError, RequirementResult};
use super::model::{
    AvailabilityPriority, ConflictTolerance, Consistency, DataLossTolerance, Regions,
    ReplicationRequirements, Workload,
};

/// A requirements request as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsRequest {
    #[serde(default)]
    pub workload: Option<Workload>,
    #[serde(default)]
    pub regions: Option<Regions>,
    #[serde(default)]
    pub consistency: Option<Consistency>,
    #[serde(default)]
    pub availability_priority: Option<AvailabilityPriority>,
    #[serde(default)]
    pub latency_target_ms_p99: Option<u32>,
    #[serde(default)]
    pub data_loss_tolerance: Option<DataLossTolerance>,
    #[serde(default)]
    pub conflict_tolerance: Option<ConflictTolerance>,
}

impl RequirementsRequest {
    /// Validate into scorable requirements.
    pub fn validate(self) -> RequirementResult<ReplicationRequirements> {
        let regions = required(self.regions, "regions")?;
        let consistency = required(self.consistency, "consistency")?;
        let availability_priority =
            required(self.availability_priority, "availabilityPriority")?;
        let data_loss_tolerance = required(self.data_loss_tolerance, "dataLossTolerance")?;
        let conflict_tolerance = required(self.conflict_tolerance, "conflictTolerance")?;

        Ok(ReplicationRequirements {
            workload: self.workload,
            regions,
            consistency,
            availability_priority,
            latency_target_ms_p99: self.latency_target_ms_p99,
            data_loss_tolerance,
            conflict_tolerance,
        })
    }
}

impl TryFrom<RequirementsRequest> for ReplicationRequirements {
    type Error = InvalidRequirementError;

    fn try_from(request: RequirementsRequest) -> RequirementResult<Self> {
        request.validate()
    }
}

impl From<ReplicationRequirements> for RequirementsRequest {
    fn from(req: ReplicationRequirements) -> Self {
        Self {
            workload: req.workload,
            regions: Some(req.regions),
            consistency: Some(req.consistency),
            availability_priority: Some(req.availability_priority),
            latency_target_ms_p99: req.latency_target_ms_p99,
            data_loss_tolerance: Some(req.data_loss_tolerance),
            conflict_tolerance: Some(req.conflict_tolerance),
        }
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> RequirementResult<T> {
    value.ok_or(InvalidRequirementError::missing(field))
}
