//! Rule Registry
//!
//! Every rule referenced in an explanation has a stable identifier and a
//! documented effect. Gate rules are taken straight from the gate table so
//! the registry can never drift from what is scored.

use serde::Serialize;

use crate::advisor::{Axis, GateRule, GATE_RULES};
use crate::requirements::Topology;

/// Rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Penalizing rule applied before summing.
    Gate,
    /// Weighted fitness dimension.
    Axis,
}

/// Per-topology penalty of a gate rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopologyPenalty {
    pub topology: Topology,
    pub penalty: i32,
}

/// A registered rule definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDefinition {
    pub rule_id: String,
    pub kind: RuleKind,
    pub description: String,
    /// Empty for axis rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub penalties: Vec<TopologyPenalty>,
}

impl RuleDefinition {
    fn from_gate(rule: &GateRule) -> Self {
        Self {
            rule_id: rule.id.as_str().to_string(),
            kind: RuleKind::Gate,
            description: rule.description.to_string(),
            penalties: Topology::ALL
                .iter()
                .filter(|t| rule.penalty_for(**t) != 0)
                .map(|t| TopologyPenalty {
                    topology: *t,
                    penalty: rule.penalty_for(*t),
                })
                .collect(),
        }
    }

    fn from_axis(axis: Axis) -> Self {
        let description = match axis {
            Axis::ConsistencyFit => "How well the topology delivers the required read consistency",
            Axis::AvailabilityFit => "How well the topology stays available, weighted by priority",
            Axis::LatencyFit => "How well the topology meets the p99 target across the region layout",
            Axis::ConflictRisk => "How safe the topology is from write conflicts (higher is safer)",
        };
        Self {
            rule_id: axis.as_str().to_string(),
            kind: RuleKind::Axis,
            description: description.to_string(),
            penalties: Vec::new(),
        }
    }
}

/// Registry of all documented rules, gates first, in evaluation order.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<RuleDefinition>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Create a new registry with all known rules.
    pub fn new() -> Self {
        let rules = GATE_RULES
            .iter()
            .map(RuleDefinition::from_gate)
            .chain(Axis::ALL.iter().map(|axis| RuleDefinition::from_axis(*axis)))
            .collect();
        Self { rules }
    }

    /// Get a rule by ID.
    pub fn get(&self, rule_id: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|rule| rule.rule_id == rule_id)
    }

    /// Check if a rule exists.
    pub fn contains(&self, rule_id: &str) -> bool {
        self.get(rule_id).is_some()
    }

    /// Get rule description for use in explanations.
    pub fn description(&self, rule_id: &str) -> String {
        self.get(rule_id)
            .map(|r| r.description.clone())
            .unwrap_or_else(|| format!("Unknown rule: {}", rule_id))
    }

    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    pub fn gates(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.iter().filter(|rule| rule.kind == RuleKind::Gate)
    }
}
