//! Register-level figures shown on the risk dashboard.

use std::collections::BTreeMap;

use bankability_core::{
    QuantificationPolicy, RiskDistribution, RiskLevel, risk_distribution, total_contingency,
    total_impact,
};
use serde::Serialize;

use crate::risk::{MitigationStatus, Risk};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSummary {
    pub total_risks: usize,
    /// Risks classified High under the register's policy.
    pub high_attention: usize,
    /// Risks whose mitigation is Done.
    pub mitigated: usize,
    pub total_impact: f64,
    pub total_contingency: f64,
    pub residual_contingency: f64,
    pub distribution: RiskDistribution,
}

pub fn summarize<'a>(
    risks: impl IntoIterator<Item = &'a Risk>,
    policy: &QuantificationPolicy,
) -> RegisterSummary {
    let risks: Vec<&Risk> = risks.into_iter().collect();
    let assessments: Vec<_> = risks.iter().map(|r| *r.assessment()).collect();
    let residual: Vec<_> = risks
        .iter()
        .map(|r| r.residual_assessment(policy))
        .collect();
    let distribution = risk_distribution(&assessments, policy);

    RegisterSummary {
        total_risks: risks.len(),
        high_attention: distribution.count(RiskLevel::High),
        mitigated: risks
            .iter()
            .filter(|r| r.mitigation().status == MitigationStatus::Done)
            .count(),
        total_impact: total_impact(&assessments),
        total_contingency: total_contingency(&assessments),
        residual_contingency: total_contingency(&residual),
        distribution,
    }
}

/// Risks grouped by mitigation status. Every status has a column, even if empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBoard<'a> {
    columns: BTreeMap<MitigationStatus, Vec<&'a Risk>>,
}

impl<'a> StatusBoard<'a> {
    pub fn column(&self, status: MitigationStatus) -> &[&'a Risk] {
        self.columns.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns in workflow order: Not Started, In Progress, Done.
    pub fn columns(&self) -> impl Iterator<Item = (MitigationStatus, &[&'a Risk])> {
        self.columns.iter().map(|(s, v)| (*s, v.as_slice()))
    }
}

pub fn status_board<'a>(risks: impl IntoIterator<Item = &'a Risk>) -> StatusBoard<'a> {
    let mut columns: BTreeMap<MitigationStatus, Vec<&'a Risk>> = MitigationStatus::ALL
        .into_iter()
        .map(|s| (s, Vec::new()))
        .collect();
    for risk in risks {
        columns
            .entry(risk.mitigation().status)
            .or_default()
            .push(risk);
    }
    StatusBoard { columns }
}
