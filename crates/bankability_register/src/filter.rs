//! Register list filters. Every set criterion must match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::risk::{MitigationStatus, ProjectStage, Risk, RiskCategory};

/// Inclusive date window on `date_identified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskFilter {
    pub category: Option<RiskCategory>,
    pub stage: Option<ProjectStage>,
    pub owner: Option<String>,
    pub mitigation_status: Option<MitigationStatus>,
    pub date_range: Option<DateRange>,
    /// Case-insensitive substring over title, description and owner.
    pub search: Option<String>,
}

impl RiskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: RiskCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn stage(mut self, stage: ProjectStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn mitigation_status(mut self, status: MitigationStatus) -> Self {
        self.mitigation_status = Some(status);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange { start, end });
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Number of criteria that actually constrain the list.
    pub fn active_count(&self) -> usize {
        [
            self.category.is_some(),
            self.stage.is_some(),
            non_blank(&self.owner).is_some(),
            self.mitigation_status.is_some(),
            self.date_range.is_some(),
            non_blank(&self.search).is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, risk: &Risk) -> bool {
        if self.category.as_ref().is_some_and(|c| c != risk.category()) {
            return false;
        }
        if self.stage.is_some_and(|s| s != risk.stage()) {
            return false;
        }
        if non_blank(&self.owner).is_some_and(|o| o != risk.owner().trim()) {
            return false;
        }
        if self
            .mitigation_status
            .is_some_and(|s| s != risk.mitigation().status)
        {
            return false;
        }
        if self
            .date_range
            .is_some_and(|r| !r.contains(risk.date_identified()))
        {
            return false;
        }
        if let Some(term) = non_blank(&self.search) {
            let term = term.to_lowercase();
            let hit = [risk.title(), risk.description(), risk.owner()]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
