//! Candidate Aggregator
//!
//! Combines the gate penalty and the four axis scores of one topology into
//! a single `CandidateEvaluation`. Candidates share no state, so the order
//! in which topologies are evaluated never changes a result.

use serde::{Deserialize, Serialize};

use super::axes::AxisScores;
use super::gates::{evaluate_gates, GateId};
use crate::observability::Event;
use crate::requirements::{ReplicationRequirements, Topology};

/// Evaluation of one topology against one set of requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEvaluation {
    pub topology: Topology,
    /// `gate_penalty` plus the sum of all axis scores. May be negative.
    pub total_score: i32,
    pub gate_penalty: i32,
    pub axis_scores: AxisScores,
    pub gates_fired: Vec<GateId>,
    pub warnings: Vec<String>,
    pub key_reasons: Vec<String>,
}

impl CandidateEvaluation {
    /// Evaluate a single topology. Gates never short-circuit axis scoring.
    pub fn evaluate(topology: Topology, req: &ReplicationRequirements) -> Self {
        let gates = evaluate_gates(topology, req);
        let axis_scores = AxisScores::evaluate(topology, req);

        Self {
            topology,
            total_score: gates.penalty + axis_scores.sum(),
            gate_penalty: gates.penalty,
            axis_scores,
            gates_fired: gates.gates_fired,
            warnings: gates.warnings,
            key_reasons: gates.reasons,
        }
    }

    /// Recompute the total from its parts.
    pub fn recomputed_total(&self) -> i32 {
        self.gate_penalty + self.axis_scores.sum()
    }

    pub fn is_gated(&self) -> bool {
        !self.gates_fired.is_empty()
    }
}

/// Evaluate the full, fixed candidate set in tie-break order.
pub fn evaluate_candidates(req: &ReplicationRequirements) -> [CandidateEvaluation; 3] {
    Topology::ALL.map(|topology| {
        let candidate = CandidateEvaluation::evaluate(topology, req);
        tracing::debug!(
            event = Event::CandidateEvaluated.as_str(),
            topology = %candidate.topology,
            total_score = candidate.total_score,
            gate_penalty = candidate.gate_penalty,
            gates_fired = candidate.gates_fired.len()
        );
        candidate
    })
}
