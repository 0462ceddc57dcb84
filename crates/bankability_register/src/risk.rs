//! Risk register entity types.

use std::fmt;

use bankability_core::{
    AssessmentInput, ImpactCost, Likelihood, QuantificationPolicy, RiskAssessment,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegisterError;

/// Risk category. Unknown names are kept as custom categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    Technical,
    Financial,
    Regulatory,
    Environmental,
    Social,
    Operational,
    Commercial,
    Legal,
    Custom(String),
}

impl RiskCategory {
    pub const BUILT_IN: [RiskCategory; 8] = [
        Self::Technical,
        Self::Financial,
        Self::Regulatory,
        Self::Environmental,
        Self::Social,
        Self::Operational,
        Self::Commercial,
        Self::Legal,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Technical => "Technical",
            Self::Financial => "Financial",
            Self::Regulatory => "Regulatory",
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Operational => "Operational",
            Self::Commercial => "Commercial",
            Self::Legal => "Legal",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for RiskCategory {
    fn from(name: String) -> Self {
        Self::BUILT_IN
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or(Self::Custom(name))
    }
}

impl From<&str> for RiskCategory {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<RiskCategory> for String {
    fn from(category: RiskCategory) -> Self {
        match category {
            RiskCategory::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project lifecycle stage in which a risk was identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectStage {
    Feasibility,
    #[serde(rename = "Pre-Financing")]
    PreFinancing,
    #[serde(rename = "Pre-Development")]
    PreDevelopment,
    Development,
    Construction,
    Operations,
}

impl ProjectStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feasibility => "Feasibility",
            Self::PreFinancing => "Pre-Financing",
            Self::PreDevelopment => "Pre-Development",
            Self::Development => "Development",
            Self::Construction => "Construction",
            Self::Operations => "Operations",
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MitigationStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl MitigationStatus {
    pub const ALL: [MitigationStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for MitigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remediation plan and the risk expected to remain once it is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationPlan {
    pub description: String,
    pub status: MitigationStatus,
    pub residual_likelihood: Likelihood,
    pub residual_impact_cost: ImpactCost,
    pub owner: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskComment {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when a risk is first recorded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub owner: String,
    pub category: RiskCategory,
    pub stage: ProjectStage,
    pub date_identified: NaiveDate,
    pub assessment: AssessmentInput,
    pub mitigation: MitigationPlan,
    #[serde(default)]
    pub created_by: String,
}

impl RiskDraft {
    pub fn from_json(json: &str) -> Result<Self, RegisterError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Partial mitigation update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MitigationPatch {
    pub description: Option<String>,
    pub status: Option<MitigationStatus>,
    pub residual_likelihood: Option<Likelihood>,
    pub residual_impact_cost: Option<ImpactCost>,
    pub owner: Option<String>,
    /// `Some(None)` clears the due date.
    pub due_date: Option<Option<NaiveDate>>,
}

impl MitigationPatch {
    pub fn status(status: MitigationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    fn apply(self, plan: &mut MitigationPlan) {
        if let Some(v) = self.description {
            plan.description = v;
        }
        if let Some(v) = self.status {
            plan.status = v;
        }
        if let Some(v) = self.residual_likelihood {
            plan.residual_likelihood = v;
        }
        if let Some(v) = self.residual_impact_cost {
            plan.residual_impact_cost = v;
        }
        if let Some(v) = self.owner {
            plan.owner = v;
        }
        if let Some(v) = self.due_date {
            plan.due_date = v;
        }
    }
}

/// Partial risk update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub category: Option<RiskCategory>,
    pub stage: Option<ProjectStage>,
    pub date_identified: Option<NaiveDate>,
    pub likelihood: Option<Likelihood>,
    pub impact_cost: Option<ImpactCost>,
    pub mitigation: Option<MitigationPatch>,
}

impl RiskPatch {
    /// Whether applying this patch requires a new assessment.
    pub fn touches_assessment(&self) -> bool {
        self.likelihood.is_some() || self.impact_cost.is_some()
    }
}

/// Parse likelihood and impact as typed into a form.
pub fn assessment_from_form(
    likelihood: &str,
    impact_cost: f64,
) -> Result<AssessmentInput, RegisterError> {
    Ok(AssessmentInput {
        likelihood: likelihood.parse()?,
        impact_cost: ImpactCost::new(impact_cost)?,
    })
}

/// A recorded risk.
///
/// Fields are read-only outside the crate: the register owns id, timestamps,
/// version and the derived assessment values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    id: Uuid,
    title: String,
    description: String,
    owner: String,
    category: RiskCategory,
    stage: ProjectStage,
    date_identified: NaiveDate,
    assessment: RiskAssessment,
    mitigation: MitigationPlan,
    comments: Vec<RiskComment>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Risk {
    pub(crate) fn from_draft(
        draft: RiskDraft,
        id: Uuid,
        now: DateTime<Utc>,
        policy: &QuantificationPolicy,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            owner: draft.owner,
            category: draft.category,
            stage: draft.stage,
            date_identified: draft.date_identified,
            assessment: RiskAssessment::from_input(draft.assessment, policy),
            mitigation: draft.mitigation,
            comments: Vec::new(),
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    /// Merge `patch`, reassessing only when likelihood or impact changed.
    pub(crate) fn apply_patch(
        &mut self,
        patch: RiskPatch,
        now: DateTime<Utc>,
        policy: &QuantificationPolicy,
    ) {
        if patch.touches_assessment() {
            let likelihood = patch.likelihood.unwrap_or(self.assessment.likelihood());
            let impact = patch.impact_cost.unwrap_or(self.assessment.impact_cost());
            self.assessment = RiskAssessment::new(likelihood, impact, policy);
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.owner {
            self.owner = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.stage {
            self.stage = v;
        }
        if let Some(v) = patch.date_identified {
            self.date_identified = v;
        }
        if let Some(m) = patch.mitigation {
            m.apply(&mut self.mitigation);
        }
        self.touch(now);
    }

    pub(crate) fn push_comment(&mut self, comment: RiskComment, now: DateTime<Utc>) {
        self.comments.push(comment);
        self.touch(now);
    }

    pub(crate) fn reassess(&mut self, policy: &QuantificationPolicy) {
        self.assessment = RiskAssessment::from_input(self.assessment.input(), policy);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version += 1;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn category(&self) -> &RiskCategory {
        &self.category
    }

    pub fn stage(&self) -> ProjectStage {
        self.stage
    }

    pub fn date_identified(&self) -> NaiveDate {
        self.date_identified
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    pub fn mitigation(&self) -> &MitigationPlan {
        &self.mitigation
    }

    pub fn comments(&self) -> &[RiskComment] {
        &self.comments
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Assessment of what remains once the mitigation plan is carried out.
    pub fn residual_assessment(&self, policy: &QuantificationPolicy) -> RiskAssessment {
        RiskAssessment::new(
            self.mitigation.residual_likelihood,
            self.mitigation.residual_impact_cost,
            policy,
        )
    }
}
