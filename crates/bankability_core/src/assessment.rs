//! Risk assessment: inputs plus the values derived from them.
//!
//! Invariant: `risk_score` and `contingency` are only ever produced by
//! [`RiskAssessment::new`]. Changing an input goes through a `with_*` method
//! that rebuilds the whole assessment, so derived values cannot drift.

use serde::{Deserialize, Serialize};

use crate::contingency::compute_contingency;
use crate::impact::ImpactCost;
use crate::level::RiskLevel;
use crate::likelihood::Likelihood;
use crate::policy::QuantificationPolicy;
use crate::score::compute_risk_score;

/// Raw assessment inputs, as submitted from a form or loaded from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub likelihood: Likelihood,
    pub impact_cost: ImpactCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    likelihood: Likelihood,
    impact_cost: ImpactCost,
    risk_score: f64,
    contingency: f64,
}

impl RiskAssessment {
    pub fn new(likelihood: Likelihood, impact_cost: ImpactCost, policy: &QuantificationPolicy) -> Self {
        Self {
            likelihood,
            impact_cost,
            risk_score: compute_risk_score(likelihood, impact_cost, policy),
            contingency: compute_contingency(likelihood, impact_cost, policy),
        }
    }

    pub fn from_input(input: AssessmentInput, policy: &QuantificationPolicy) -> Self {
        Self::new(input.likelihood, input.impact_cost, policy)
    }

    pub fn likelihood(&self) -> Likelihood {
        self.likelihood
    }

    pub fn impact_cost(&self) -> ImpactCost {
        self.impact_cost
    }

    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    pub fn contingency(&self) -> f64 {
        self.contingency
    }

    pub fn input(&self) -> AssessmentInput {
        AssessmentInput {
            likelihood: self.likelihood,
            impact_cost: self.impact_cost,
        }
    }

    pub fn level(&self, policy: &QuantificationPolicy) -> RiskLevel {
        policy.classify(self.risk_score)
    }

    pub fn with_likelihood(&self, likelihood: Likelihood, policy: &QuantificationPolicy) -> Self {
        Self::new(likelihood, self.impact_cost, policy)
    }

    pub fn with_impact_cost(&self, impact_cost: ImpactCost, policy: &QuantificationPolicy) -> Self {
        Self::new(self.likelihood, impact_cost, policy)
    }
}
