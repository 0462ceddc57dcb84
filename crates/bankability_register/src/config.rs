//! Quantification parameters and their defaults.
//!
//! Every numeric tunable of the quantification policy is a [`ConfigParam`]
//! with a default. A missing value takes the default; a present value that is
//! non-finite, negative, or outside its valid range fails closed.

use bankability_core::{
    ContingencyModel, ContingencyPercentages, ImpactFactorThresholds, LabelProbabilities,
    LevelThresholds, PolicyError, QuantificationPolicy, ScoringModel,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    // Likelihood mapping
    LowProbability,
    MediumProbability,
    HighProbability,

    // Bucketed impact factor cut-offs
    ImpactMediumFromUsd,
    ImpactHighFromUsd,

    // Percentage-of-impact contingency
    LowContingencyPct,
    MediumContingencyPct,
    HighContingencyPct,

    // Level thresholds
    MonetaryMediumFromUsd,
    MonetaryHighFromUsd,
    BucketedMediumFrom,
    BucketedHighFrom,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config fail-closed: '{param_name}' {reason}")]
    InvalidValue {
        param_name: &'static str,
        reason: &'static str,
    },
    #[error("config fail-closed: {0}")]
    Policy(#[from] PolicyError),
    #[error("malformed config document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn param_default(param: ConfigParam) -> f64 {
    match param {
        ConfigParam::LowProbability => 0.3,
        ConfigParam::MediumProbability => 0.5,
        ConfigParam::HighProbability => 0.7,

        ConfigParam::ImpactMediumFromUsd => 10_000.0,
        ConfigParam::ImpactHighFromUsd => 50_000.0,

        ConfigParam::LowContingencyPct => 0.25,
        ConfigParam::MediumContingencyPct => 0.5,
        ConfigParam::HighContingencyPct => 0.75,

        ConfigParam::MonetaryMediumFromUsd => 100_000.0,
        ConfigParam::MonetaryHighFromUsd => 500_000.0,
        ConfigParam::BucketedMediumFrom => 3.0,
        ConfigParam::BucketedHighFrom => 6.0,
    }
}

/// snake_case key used in config documents.
pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::LowProbability => "low_probability",
        ConfigParam::MediumProbability => "medium_probability",
        ConfigParam::HighProbability => "high_probability",
        ConfigParam::ImpactMediumFromUsd => "impact_medium_from_usd",
        ConfigParam::ImpactHighFromUsd => "impact_high_from_usd",
        ConfigParam::LowContingencyPct => "low_contingency_pct",
        ConfigParam::MediumContingencyPct => "medium_contingency_pct",
        ConfigParam::HighContingencyPct => "high_contingency_pct",
        ConfigParam::MonetaryMediumFromUsd => "monetary_medium_from_usd",
        ConfigParam::MonetaryHighFromUsd => "monetary_high_from_usd",
        ConfigParam::BucketedMediumFrom => "bucketed_medium_from",
        ConfigParam::BucketedHighFrom => "bucketed_high_from",
    }
}

/// Whether the parameter is a fraction in `[0, 1]` rather than an amount.
fn is_fraction(param: ConfigParam) -> bool {
    matches!(
        param,
        ConfigParam::LowProbability
            | ConfigParam::MediumProbability
            | ConfigParam::HighProbability
            | ConfigParam::LowContingencyPct
            | ConfigParam::MediumContingencyPct
            | ConfigParam::HighContingencyPct
    )
}

/// Expected number of ConfigParam variants. Bump together with ALL_PARAMS.
pub const EXPECTED_PARAM_COUNT: usize = 12;

pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::LowProbability,
    ConfigParam::MediumProbability,
    ConfigParam::HighProbability,
    ConfigParam::ImpactMediumFromUsd,
    ConfigParam::ImpactHighFromUsd,
    ConfigParam::LowContingencyPct,
    ConfigParam::MediumContingencyPct,
    ConfigParam::HighContingencyPct,
    ConfigParam::MonetaryMediumFromUsd,
    ConfigParam::MonetaryHighFromUsd,
    ConfigParam::BucketedMediumFrom,
    ConfigParam::BucketedHighFrom,
];

/// Resolve one parameter: explicit value wins, otherwise the default.
pub fn resolve_config_value(param: ConfigParam, value: Option<f64>) -> Result<f64, ConfigError> {
    let Some(v) = value else {
        return Ok(param_default(param));
    };
    let fail = |reason: &'static str| -> Result<f64, ConfigError> {
        tracing::warn!(param = param_name(param), value = v, "config value rejected: {reason}");
        Err(ConfigError::InvalidValue {
            param_name: param_name(param),
            reason,
        })
    };
    if !v.is_finite() {
        return fail("is non-finite (NaN or Infinity)");
    }
    if v < 0.0 {
        return fail("is negative");
    }
    if is_fraction(param) && v > 1.0 {
        return fail("is a fraction and must not exceed 1");
    }
    Ok(v)
}

/// Register configuration document. Omitted keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterConfig {
    pub scoring_model: ScoringModel,
    pub contingency_model: ContingencyModel,
    pub low_probability: Option<f64>,
    pub medium_probability: Option<f64>,
    pub high_probability: Option<f64>,
    pub impact_medium_from_usd: Option<f64>,
    pub impact_high_from_usd: Option<f64>,
    pub low_contingency_pct: Option<f64>,
    pub medium_contingency_pct: Option<f64>,
    pub high_contingency_pct: Option<f64>,
    pub monetary_medium_from_usd: Option<f64>,
    pub monetary_high_from_usd: Option<f64>,
    pub bucketed_medium_from: Option<f64>,
    pub bucketed_high_from: Option<f64>,
}

impl RegisterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Explicitly configured value for `param`, if any.
    pub fn value(&self, param: ConfigParam) -> Option<f64> {
        match param {
            ConfigParam::LowProbability => self.low_probability,
            ConfigParam::MediumProbability => self.medium_probability,
            ConfigParam::HighProbability => self.high_probability,
            ConfigParam::ImpactMediumFromUsd => self.impact_medium_from_usd,
            ConfigParam::ImpactHighFromUsd => self.impact_high_from_usd,
            ConfigParam::LowContingencyPct => self.low_contingency_pct,
            ConfigParam::MediumContingencyPct => self.medium_contingency_pct,
            ConfigParam::HighContingencyPct => self.high_contingency_pct,
            ConfigParam::MonetaryMediumFromUsd => self.monetary_medium_from_usd,
            ConfigParam::MonetaryHighFromUsd => self.monetary_high_from_usd,
            ConfigParam::BucketedMediumFrom => self.bucketed_medium_from,
            ConfigParam::BucketedHighFrom => self.bucketed_high_from,
        }
    }

    fn resolve(&self, param: ConfigParam) -> Result<f64, ConfigError> {
        resolve_config_value(param, self.value(param))
    }

    /// Build a validated policy from this document.
    pub fn resolve_policy(&self) -> Result<QuantificationPolicy, ConfigError> {
        let policy = QuantificationPolicy {
            scoring: self.scoring_model,
            contingency: self.contingency_model,
            probabilities: LabelProbabilities {
                low: self.resolve(ConfigParam::LowProbability)?,
                medium: self.resolve(ConfigParam::MediumProbability)?,
                high: self.resolve(ConfigParam::HighProbability)?,
            },
            impact_factors: ImpactFactorThresholds {
                medium_from: self.resolve(ConfigParam::ImpactMediumFromUsd)?,
                high_from: self.resolve(ConfigParam::ImpactHighFromUsd)?,
            },
            contingency_pct: ContingencyPercentages {
                low: self.resolve(ConfigParam::LowContingencyPct)?,
                medium: self.resolve(ConfigParam::MediumContingencyPct)?,
                high: self.resolve(ConfigParam::HighContingencyPct)?,
            },
            monetary_levels: LevelThresholds {
                medium_from: self.resolve(ConfigParam::MonetaryMediumFromUsd)?,
                high_from: self.resolve(ConfigParam::MonetaryHighFromUsd)?,
            },
            bucketed_levels: LevelThresholds {
                medium_from: self.resolve(ConfigParam::BucketedMediumFrom)?,
                high_from: self.resolve(ConfigParam::BucketedHighFrom)?,
            },
        };
        policy.validate()?;
        Ok(policy)
    }
}
