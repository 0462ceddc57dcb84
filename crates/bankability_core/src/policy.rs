//! Quantification policy.
//!
//! One policy fixes the formula set for a whole register: scoring model,
//! contingency model, and the constants those models read. Call sites never
//! pick formulas on their own.

use serde::{Deserialize, Serialize};

use crate::contingency::{ContingencyModel, ContingencyPercentages};
use crate::error::PolicyError;
use crate::level::{LevelThresholds, RiskLevel, classify};
use crate::likelihood::LabelProbabilities;
use crate::score::{ImpactFactorThresholds, ScoringModel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantificationPolicy {
    pub scoring: ScoringModel,
    pub contingency: ContingencyModel,
    pub probabilities: LabelProbabilities,
    pub impact_factors: ImpactFactorThresholds,
    pub contingency_pct: ContingencyPercentages,
    pub monetary_levels: LevelThresholds,
    pub bucketed_levels: LevelThresholds,
}

impl Default for QuantificationPolicy {
    /// Continuous score, percentage-of-impact contingency, monetary levels.
    fn default() -> Self {
        Self {
            scoring: ScoringModel::Continuous,
            contingency: ContingencyModel::PercentageOfImpact,
            probabilities: LabelProbabilities::default(),
            impact_factors: ImpactFactorThresholds::default(),
            contingency_pct: ContingencyPercentages::default(),
            monetary_levels: LevelThresholds::MONETARY,
            bucketed_levels: LevelThresholds::BUCKETED,
        }
    }
}

impl QuantificationPolicy {
    /// Bucketed 1..=9 scoring with percentage-of-impact contingency.
    pub fn bucketed() -> Self {
        Self {
            scoring: ScoringModel::Bucketed,
            ..Self::default()
        }
    }

    /// Level thresholds matching the active scoring model's scale.
    pub fn level_thresholds(&self) -> &LevelThresholds {
        match self.scoring {
            ScoringModel::Continuous => &self.monetary_levels,
            ScoringModel::Bucketed => &self.bucketed_levels,
        }
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        classify(score, self.level_thresholds())
    }

    /// Reject contradictory constants before any risk is scored with them.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let p = &self.probabilities;
        fraction("low_probability", p.low)?;
        fraction("medium_probability", p.medium)?;
        fraction("high_probability", p.high)?;
        if !(p.low < p.medium && p.medium < p.high) {
            return Err(PolicyError::Ordering(
                "label probabilities must be strictly increasing Low < Medium < High",
            ));
        }

        let c = &self.contingency_pct;
        fraction("low_contingency_pct", c.low)?;
        fraction("medium_contingency_pct", c.medium)?;
        fraction("high_contingency_pct", c.high)?;
        if !(c.low <= c.medium && c.medium <= c.high) {
            return Err(PolicyError::Ordering(
                "contingency percentages must be non-decreasing Low <= Medium <= High",
            ));
        }

        cutoffs(
            "impact_medium_from_usd",
            "impact_high_from_usd",
            self.impact_factors.medium_from,
            self.impact_factors.high_from,
        )?;
        cutoffs(
            "monetary_medium_from_usd",
            "monetary_high_from_usd",
            self.monetary_levels.medium_from,
            self.monetary_levels.high_from,
        )?;
        cutoffs(
            "bucketed_medium_from",
            "bucketed_high_from",
            self.bucketed_levels.medium_from,
            self.bucketed_levels.high_from,
        )?;
        Ok(())
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        tracing::debug!("policy fraction rejected field={field} value={value}");
        Err(PolicyError::FractionOutOfRange { field, value })
    }
}

fn cutoffs(
    medium_field: &'static str,
    high_field: &'static str,
    medium_from: f64,
    high_from: f64,
) -> Result<(), PolicyError> {
    for (field, value) in [(medium_field, medium_from), (high_field, high_from)] {
        if !value.is_finite() || value < 0.0 {
            return Err(PolicyError::InvalidAmount { field, value });
        }
    }
    if medium_from < high_from {
        Ok(())
    } else {
        Err(PolicyError::Ordering(
            "medium cut-off must be strictly below high cut-off",
        ))
    }
}
