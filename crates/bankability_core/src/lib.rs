#![forbid(unsafe_code)]

pub mod aggregate;
pub mod assessment;
pub mod contingency;
pub mod error;
pub mod impact;
pub mod level;
pub mod likelihood;
pub mod money;
pub mod policy;
pub mod score;

pub use aggregate::{
    RiskDistribution, risk_distribution, total_contingency, total_impact, total_risk_score,
};
pub use assessment::{AssessmentInput, RiskAssessment};
pub use contingency::{ContingencyModel, ContingencyPercentages, compute_contingency};
pub use error::{PolicyError, QuantifyError};
pub use level::{LevelThresholds, RiskLevel, classify};
pub use impact::ImpactCost;
pub use likelihood::{LabelProbabilities, Likelihood, LikelihoodLabel, Percentage};
pub use money::{format_usd, format_usd_whole};
pub use policy::QuantificationPolicy;
pub use score::{ImpactFactorThresholds, ScoringModel, compute_risk_score};
