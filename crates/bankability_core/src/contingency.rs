//! Contingency calculator.
//!
//! - PercentageOfImpact: `impact * pct(band)`, rounded to whole currency units.
//! - ScoreAsContingency: `probability * impact`, unrounded.
//!
//! Both are non-negative for any validated input.

use serde::{Deserialize, Serialize};

use crate::impact::ImpactCost;
use crate::likelihood::{Likelihood, LikelihoodLabel};
use crate::policy::QuantificationPolicy;
use crate::score::continuous_score;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContingencyModel {
    #[default]
    PercentageOfImpact,
    ScoreAsContingency,
}

/// Share of the impact cost reserved per likelihood band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContingencyPercentages {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ContingencyPercentages {
    fn default() -> Self {
        Self {
            low: 0.25,
            medium: 0.5,
            high: 0.75,
        }
    }
}

impl ContingencyPercentages {
    pub fn of(&self, band: LikelihoodLabel) -> f64 {
        match band {
            LikelihoodLabel::Low => self.low,
            LikelihoodLabel::Medium => self.medium,
            LikelihoodLabel::High => self.high,
        }
    }
}

/// Recommended monetary reserve for a likelihood/impact pair.
pub fn compute_contingency(
    likelihood: Likelihood,
    impact: ImpactCost,
    policy: &QuantificationPolicy,
) -> f64 {
    let raw = match policy.contingency {
        ContingencyModel::PercentageOfImpact => {
            let pct = policy
                .contingency_pct
                .of(likelihood.band(&policy.probabilities));
            (impact.value() * pct).round()
        }
        ContingencyModel::ScoreAsContingency => {
            continuous_score(likelihood.probability(&policy.probabilities), impact)
        }
    };
    raw.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(v: f64) -> ImpactCost {
        ImpactCost::new(v).unwrap()
    }

    #[test]
    fn test_percentage_of_impact_by_label() {
        let policy = QuantificationPolicy::default();
        assert_eq!(compute_contingency(Likelihood::LOW, cost(50_000.0), &policy), 12_500.0);
        assert_eq!(compute_contingency(Likelihood::MEDIUM, cost(50_000.0), &policy), 25_000.0);
        assert_eq!(compute_contingency(Likelihood::HIGH, cost(50_000.0), &policy), 37_500.0);
    }

    #[test]
    fn test_percentage_of_impact_rounds_to_whole_units() {
        let policy = QuantificationPolicy::default();
        assert_eq!(compute_contingency(Likelihood::LOW, cost(10.0), &policy), 3.0);
        assert_eq!(compute_contingency(Likelihood::HIGH, cost(1.0), &policy), 1.0);
    }

    #[test]
    fn test_percentage_likelihood_uses_its_band() {
        let policy = QuantificationPolicy::default();
        let l = Likelihood::percentage(65.0).unwrap();
        assert_eq!(compute_contingency(l, cost(1_000.0), &policy), 750.0);
    }

    #[test]
    fn test_score_as_contingency_matches_continuous_score() {
        let policy = QuantificationPolicy {
            contingency: ContingencyModel::ScoreAsContingency,
            ..QuantificationPolicy::default()
        };
        let c = compute_contingency(Likelihood::HIGH, cost(100_000.0), &policy);
        assert!((c - 70_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_impact_gives_zero_contingency() {
        for model in [
            ContingencyModel::PercentageOfImpact,
            ContingencyModel::ScoreAsContingency,
        ] {
            let policy = QuantificationPolicy {
                contingency: model,
                ..QuantificationPolicy::default()
            };
            assert_eq!(compute_contingency(Likelihood::HIGH, ImpactCost::ZERO, &policy), 0.0);
        }
    }
}
