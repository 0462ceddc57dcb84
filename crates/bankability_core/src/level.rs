//! Risk level classifier.
//!
//! Lower bucket is exclusive of its upper bound: `score < medium_from` is Low,
//! `score < high_from` is Medium, everything else is High.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub medium_from: f64,
    pub high_from: f64,
}

impl LevelThresholds {
    /// Thresholds for monetary (continuous) scores.
    pub const MONETARY: LevelThresholds = LevelThresholds {
        medium_from: 100_000.0,
        high_from: 500_000.0,
    };

    /// Thresholds for the 1..=9 bucketed scale. High starts at 6.
    pub const BUCKETED: LevelThresholds = LevelThresholds {
        medium_from: 3.0,
        high_from: 6.0,
    };
}

pub fn classify(score: f64, thresholds: &LevelThresholds) -> RiskLevel {
    if score < thresholds.medium_from {
        RiskLevel::Low
    } else if score < thresholds.high_from {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
