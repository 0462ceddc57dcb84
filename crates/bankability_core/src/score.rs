//! Risk scorer.
//!
//! - Continuous: `probability * impact_cost`, a monetary figure.
//! - Bucketed: `likelihood_factor * impact_factor`, both in {1, 2, 3}, so 1..=9.

use serde::{Deserialize, Serialize};

use crate::impact::ImpactCost;
use crate::likelihood::{Likelihood, LikelihoodLabel};
use crate::policy::QuantificationPolicy;

/// Which score formula a policy applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringModel {
    #[default]
    Continuous,
    Bucketed,
}

/// Impact-cost cut-offs for the bucketed impact factor.
///
/// `impact < medium_from` → 1, `impact < high_from` → 2, else 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactorThresholds {
    pub medium_from: f64,
    pub high_from: f64,
}

impl Default for ImpactFactorThresholds {
    fn default() -> Self {
        Self {
            medium_from: 10_000.0,
            high_from: 50_000.0,
        }
    }
}

pub fn continuous_score(probability: f64, impact: ImpactCost) -> f64 {
    probability * impact.value()
}

pub fn likelihood_factor(band: LikelihoodLabel) -> u8 {
    match band {
        LikelihoodLabel::Low => 1,
        LikelihoodLabel::Medium => 2,
        LikelihoodLabel::High => 3,
    }
}

pub fn impact_factor(impact: ImpactCost, thresholds: &ImpactFactorThresholds) -> u8 {
    let v = impact.value();
    if v < thresholds.medium_from {
        1
    } else if v < thresholds.high_from {
        2
    } else {
        3
    }
}

/// Score a likelihood/impact pair under the policy's scoring model.
pub fn compute_risk_score(
    likelihood: Likelihood,
    impact: ImpactCost,
    policy: &QuantificationPolicy,
) -> f64 {
    match policy.scoring {
        ScoringModel::Continuous => {
            continuous_score(likelihood.probability(&policy.probabilities), impact)
        }
        ScoringModel::Bucketed => {
            let lf = likelihood_factor(likelihood.band(&policy.probabilities));
            let imf = impact_factor(impact, &policy.impact_factors);
            f64::from(lf * imf)
        }
    }
}
