//! Explanation Object Model
//!
//! Every explanation has the same shape:
//! - inputs: the requirements as scored
//! - rules_applied: [ { rule_id, description, evaluation, evidence } ]
//! - candidates: every topology evaluation, in tie-break order
//! - ranking: topologies, best first
//! - conclusion: the recommendation
//!
//! Evidence is raw scoring state, never interpretation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::advisor::{CandidateEvaluation, ReplicationRecommendation};
use crate::requirements::{ReplicationRequirements, Topology};

/// Rule evaluation result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleEvaluation {
    /// Rule condition was satisfied.
    True,
    /// Rule condition was not satisfied.
    False,
}

/// Evidence for a rule application.
///
/// Keys are kept sorted so identical inputs serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Evidence {
    #[serde(flatten)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Evidence {
    /// Create empty evidence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add evidence entry.
    pub fn add(&mut self, key: impl Into<String>, value: impl Serialize) {
        self.data
            .insert(key.into(), serde_json::to_value(value).unwrap_or_default());
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

/// Rule application record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleApplication {
    /// Stable rule identifier (e.g., "MULTI_WRITE_SINGLE_LEADER").
    pub rule_id: String,
    pub description: String,
    pub evaluation: RuleEvaluation,
    pub evidence: Evidence,
}

impl RuleApplication {
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
        evaluation: RuleEvaluation,
        evidence: Evidence,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            description: description.into(),
            evaluation,
            evidence,
        }
    }

    /// Create a rule application with true evaluation.
    pub fn satisfied(rule_id: impl Into<String>, description: impl Into<String>, evidence: Evidence) -> Self {
        Self::new(rule_id, description, RuleEvaluation::True, evidence)
    }

    /// Create a rule application with false evaluation.
    pub fn not_satisfied(rule_id: impl Into<String>, description: impl Into<String>, evidence: Evidence) -> Self {
        Self::new(rule_id, description, RuleEvaluation::False, evidence)
    }

    pub fn is_satisfied(&self) -> bool {
        self.evaluation == RuleEvaluation::True
    }
}

/// Complete explanation object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Explanation {
    pub inputs: ReplicationRequirements,
    /// Rules applied in order.
    pub rules_applied: Vec<RuleApplication>,
    pub candidates: Vec<CandidateEvaluation>,
    pub ranking: Vec<Topology>,
    pub conclusion: ReplicationRecommendation,
}

impl Explanation {
    /// Create a new explanation builder.
    pub fn builder(inputs: ReplicationRequirements) -> ExplanationBuilder {
        ExplanationBuilder::new(inputs)
    }

    /// Rules whose condition held for the inputs.
    pub fn fired_rules(&self) -> impl Iterator<Item = &RuleApplication> {
        self.rules_applied.iter().filter(|rule| rule.is_satisfied())
    }
}

/// Builder for constructing explanations.
pub struct ExplanationBuilder {
    inputs: ReplicationRequirements,
    rules_applied: Vec<RuleApplication>,
    candidates: Vec<CandidateEvaluation>,
    ranking: Vec<Topology>,
}

impl ExplanationBuilder {
    /// Create a new builder.
    pub fn new(inputs: ReplicationRequirements) -> Self {
        Self {
            inputs,
            rules_applied: Vec::new(),
            candidates: Vec::new(),
            ranking: Vec::new(),
        }
    }

    /// Add rule application.
    pub fn rule(mut self, rule: RuleApplication) -> Self {
        self.rules_applied.push(rule);
        self
    }

    /// Add a candidate evaluation.
    pub fn candidate(mut self, candidate: CandidateEvaluation) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Set the ranking, best first.
    pub fn ranking(mut self, ranking: Vec<Topology>) -> Self {
        self.ranking = ranking;
        self
    }

    /// Build with the final recommendation.
    pub fn conclude(self, recommendation: ReplicationRecommendation) -> Explanation {
        Explanation {
            inputs: self.inputs,
            rules_applied: self.rules_applied,
            candidates: self.candidates,
            ranking: self.ranking,
            conclusion: recommendation,
        }
    }
}
