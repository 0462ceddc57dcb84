//! Aggregates over a collection of assessments. Empty input yields zeros.

use serde::{Deserialize, Serialize};

use crate::assessment::RiskAssessment;
use crate::level::RiskLevel;
use crate::policy::QuantificationPolicy;

/// Count of assessments per level. Always partitions its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

pub fn total_contingency<'a>(assessments: impl IntoIterator<Item = &'a RiskAssessment>) -> f64 {
    assessments.into_iter().map(RiskAssessment::contingency).sum()
}

pub fn total_impact<'a>(assessments: impl IntoIterator<Item = &'a RiskAssessment>) -> f64 {
    assessments
        .into_iter()
        .map(|a| a.impact_cost().value())
        .sum()
}

pub fn total_risk_score<'a>(assessments: impl IntoIterator<Item = &'a RiskAssessment>) -> f64 {
    assessments.into_iter().map(RiskAssessment::risk_score).sum()
}

pub fn risk_distribution<'a>(
    assessments: impl IntoIterator<Item = &'a RiskAssessment>,
    policy: &QuantificationPolicy,
) -> RiskDistribution {
    assessments
        .into_iter()
        .fold(RiskDistribution::default(), |mut acc, a| {
            acc.record(a.level(policy));
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::ImpactCost;
    use crate::likelihood::Likelihood;

    #[test]
    fn test_empty_collection_is_all_zero() {
        let policy = QuantificationPolicy::default();
        let empty: Vec<RiskAssessment> = Vec::new();
        assert_eq!(total_contingency(&empty), 0.0);
        assert_eq!(total_impact(&empty), 0.0);
        assert_eq!(total_risk_score(&empty), 0.0);
        assert_eq!(risk_distribution(&empty, &policy), RiskDistribution::default());
    }

    #[test]
    fn test_distribution_and_totals() {
        let policy = QuantificationPolicy::default();
        let a = |l: Likelihood, c: f64| RiskAssessment::new(l, ImpactCost::new(c).unwrap(), &policy);
        let assessments = vec![
            a(Likelihood::HIGH, 100_000.0),   // 70k -> Low
            a(Likelihood::MEDIUM, 400_000.0), // 200k -> Medium
            a(Likelihood::HIGH, 1_000_000.0), // 700k -> High
            a(Likelihood::LOW, 0.0),          // 0 -> Low
        ];
        let dist = risk_distribution(&assessments, &policy);
        assert_eq!(
            dist,
            RiskDistribution {
                low: 2,
                medium: 1,
                high: 1
            }
        );
        assert_eq!(dist.total(), assessments.len());
        assert_eq!(
            total_contingency(&assessments),
            75_000.0 + 200_000.0 + 750_000.0
        );
        assert_eq!(total_impact(&assessments), 1_500_000.0);
    }
}
