//! Likelihood mapper.
//!
//! A likelihood is either a qualitative label or a percentage in `[0, 100]`.
//! [`Likelihood::probability`] is the single normalization point onto `[0, 1]`;
//! [`Likelihood::band`] projects any likelihood back onto a label so that the
//! label-keyed formulas (bucketed score, percentage contingency) accept both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuantifyError;

/// Qualitative likelihood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LikelihoodLabel {
    Low,
    Medium,
    High,
}

impl LikelihoodLabel {
    pub const ALL: [LikelihoodLabel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for LikelihoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikelihoodLabel {
    type Err = QuantifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QuantifyError::UnknownLikelihood {
                input: s.to_string(),
            })
    }
}

/// Percentage in `[0, 100]`. Construction is the only validation point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Result<Self, QuantifyError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            tracing::debug!("likelihood percentage rejected value={value}");
            Err(QuantifyError::LikelihoodOutOfRange { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = QuantifyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

/// Probability assigned to each label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelProbabilities {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for LabelProbabilities {
    fn default() -> Self {
        Self {
            low: 0.3,
            medium: 0.5,
            high: 0.7,
        }
    }
}

impl LabelProbabilities {
    pub fn of(&self, label: LikelihoodLabel) -> f64 {
        match label {
            LikelihoodLabel::Low => self.low,
            LikelihoodLabel::Medium => self.medium,
            LikelihoodLabel::High => self.high,
        }
    }

    /// Band a raw probability using the midpoints between label probabilities.
    ///
    /// Each label's own probability always falls inside its own band.
    pub fn band_of(&self, probability: f64) -> LikelihoodLabel {
        let low_medium = (self.low + self.medium) / 2.0;
        let medium_high = (self.medium + self.high) / 2.0;
        if probability < low_medium {
            LikelihoodLabel::Low
        } else if probability < medium_high {
            LikelihoodLabel::Medium
        } else {
            LikelihoodLabel::High
        }
    }
}

/// Likelihood as entered on a risk form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Likelihood {
    Label(LikelihoodLabel),
    Percentage(Percentage),
}

impl Likelihood {
    pub const LOW: Likelihood = Likelihood::Label(LikelihoodLabel::Low);
    pub const MEDIUM: Likelihood = Likelihood::Label(LikelihoodLabel::Medium);
    pub const HIGH: Likelihood = Likelihood::Label(LikelihoodLabel::High);

    /// Validated percentage likelihood.
    pub fn percentage(value: f64) -> Result<Self, QuantifyError> {
        Percentage::new(value).map(Self::Percentage)
    }

    /// Probability in `[0, 1]`.
    pub fn probability(&self, probabilities: &LabelProbabilities) -> f64 {
        match self {
            Self::Label(label) => probabilities.of(*label),
            Self::Percentage(p) => p.value() / 100.0,
        }
    }

    /// Label band for label-keyed formulas.
    pub fn band(&self, probabilities: &LabelProbabilities) -> LikelihoodLabel {
        match self {
            Self::Label(label) => *label,
            Self::Percentage(_) => probabilities.band_of(self.probability(probabilities)),
        }
    }
}

impl From<LikelihoodLabel> for Likelihood {
    fn from(label: LikelihoodLabel) -> Self {
        Self::Label(label)
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "{label}"),
            Self::Percentage(p) => write!(f, "{}%", p.value()),
        }
    }
}

/// Parses form text: a label (any case) or a number with an optional `%`.
impl FromStr for Likelihood {
    type Err = QuantifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(label) = s.parse::<LikelihoodLabel>() {
            return Ok(Self::Label(label));
        }
        let numeric = s.trim().trim_end_matches('%').trim_end();
        match numeric.parse::<f64>() {
            Ok(value) => Self::percentage(value),
            Err(_) => Err(QuantifyError::UnknownLikelihood {
                input: s.to_string(),
            }),
        }
    }
}
