use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuantifyError;

/// Monetary impact of a risk materialising. Finite and non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ImpactCost(f64);

impl ImpactCost {
    pub const ZERO: ImpactCost = ImpactCost(0.0);

    pub fn new(value: f64) -> Result<Self, QuantifyError> {
        if value.is_finite() && value >= 0.0 {
            // Normalise -0.0 so downstream sums never print a negative zero.
            Ok(Self(value + 0.0))
        } else {
            tracing::debug!("impact cost rejected value={value}");
            Err(QuantifyError::InvalidImpactCost { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ImpactCost {
    type Error = QuantifyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImpactCost> for f64 {
    fn from(cost: ImpactCost) -> Self {
        cost.0
    }
}

impl fmt::Display for ImpactCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
