//! Candidate Evaluation and Selection Engine
//!
//! Data flows strictly forward:
//!
//! ```text
//! requirements -> {gates, axes} -> candidate -> selector -> recommendation
//! ```
//!
//! - Every call evaluates all three topologies, never a subset
//! - Gates penalize, they never skip axis scoring
//! - No state survives a call; every function here is pure and re-entrant

pub mod axes;
pub mod candidate;
pub mod gates;
pub mod quorum;
pub mod recommendation;
pub mod selector;

pub use axes::{Axis, AxisScores};
pub use candidate::{evaluate_candidates, CandidateEvaluation};
pub use gates::{evaluate_gates, gate_rule, GateId, GateOutcome, GateRule, GATE_RULES};
pub use quorum::Quorum;
pub use recommendation::{ReadPolicy, ReplicationMode, ReplicationRecommendation, WritePolicy};
pub use selector::{rank, select};

use crate::observability::Event;
use crate::requirements::{RequirementResult, RequirementsRequest, ReplicationRequirements};

/// Everything one advisory run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub requirements: ReplicationRequirements,
    /// One evaluation per topology, in tie-break order.
    pub candidates: [CandidateEvaluation; 3],
    pub recommendation: ReplicationRecommendation,
}

impl Assessment {
    /// Candidates, best first.
    pub fn ranking(&self) -> Vec<&CandidateEvaluation> {
        rank(&self.candidates)
    }

    /// The evaluation the recommendation was built from.
    pub fn winner(&self) -> &CandidateEvaluation {
        select(&self.candidates)
    }
}

/// Evaluate every topology and keep the intermediate evaluations.
pub fn assess(req: &ReplicationRequirements) -> Assessment {
    tracing::debug!(
        event = Event::AdviseStart.as_str(),
        regions = ?req.regions,
        consistency = ?req.consistency,
        availability_priority = ?req.availability_priority,
        latency_target_ms_p99 = ?req.latency_target_ms_p99
    );

    let candidates = evaluate_candidates(req);
    let winner = select(&candidates);
    let ranked = rank(&candidates);
    let recommendation = recommendation::build_recommendation(req, winner, &ranked);

    tracing::info!(
        event = Event::WinnerSelected.as_str(),
        topology = %winner.topology,
        total_score = winner.total_score,
        warnings = recommendation.warnings.len()
    );

    Assessment {
        requirements: *req,
        candidates,
        recommendation,
    }
}

/// Recommend a topology for validated requirements.
pub fn advise(req: &ReplicationRequirements) -> ReplicationRecommendation {
    assess(req).recommendation
}

/// Validate a raw request, then advise. Validation completes before any
/// candidate is scored.
pub fn advise_request(request: RequirementsRequest) -> RequirementResult<ReplicationRecommendation> {
    let req = request.validate().map_err(|e| {
        tracing::warn!(
            event = Event::RequestRejected.as_str(),
            code = e.code(),
            field = e.field()
        );
        e
    })?;
    Ok(advise(&req))
}
