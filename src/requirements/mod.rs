//! Requirement Model
//!
//! - `ReplicationRequirements`: validated, fully-typed input to the advisor
//! - `RequirementsRequest`: raw caller input, validated fail-fast
//! - `InvalidRequirementError`: the only failure class

mod errors;
mod model;
mod request;

pub use errors::{InvalidRequirementError, RequirementResult};
pub use model::{
    AvailabilityPriority, ConflictTolerance, Consistency, DataLossTolerance, Regions,
    ReplicationRequirements, Topology, Workload,
};
pub use request::RequirementsRequest;
