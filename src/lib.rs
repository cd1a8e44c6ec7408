//! replication-advisor - A deterministic, explainable replication topology advisor
//!
//! Given validated replication requirements, every call evaluates the three
//! candidate topologies (leader-follower, multi-leader, leaderless), applies
//! gate penalties and axis scores, selects a winner and maps it to
//! operational policies.
//!
//! ```ignore
//! use replication_advisor::advise;
//! use replication_advisor::requirements::*;
//!
//! let req = ReplicationRequirements::new(
//!     Regions::Single,
//!     Consistency::Strong,
//!     AvailabilityPriority::Med,
//!     DataLossTolerance::Zero,
//!     ConflictTolerance::None,
//! );
//! assert_eq!(advise(&req).topology, Topology::LeaderFollower);
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod explain;
pub mod observability;
pub mod requirements;

pub use advisor::{advise, advise_request, assess, Assessment, ReplicationRecommendation};
pub use explain::explain;
pub use requirements::{InvalidRequirementError, ReplicationRequirements, RequirementsRequest};
