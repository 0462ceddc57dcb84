#![allow(dead_code)]

use std::cell::Cell;

use bankability_core::{AssessmentInput, ImpactCost, Likelihood, QuantificationPolicy};
use bankability_register::{
    Clock, MitigationPlan, MitigationStatus, ProjectStage, RiskCategory, RiskDraft, RiskRegister,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Test clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

pub fn register() -> RiskRegister<ManualClock> {
    RiskRegister::with_clock(QuantificationPolicy::default(), ManualClock::new()).unwrap()
}

pub fn bucketed_register() -> RiskRegister<ManualClock> {
    RiskRegister::with_clock(QuantificationPolicy::bucketed(), ManualClock::new()).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn cost(v: f64) -> ImpactCost {
    ImpactCost::new(v).unwrap()
}

/// Baseline draft: Medium likelihood, 50k impact, regulatory, not started.
pub fn permit_delay() -> RiskDraft {
    RiskDraft {
        title: "Permit Delay".to_string(),
        description: "Regulatory permits delayed beyond the expected timeline".to_string(),
        owner: "Alex Wong".to_string(),
        category: RiskCategory::Regulatory,
        stage: ProjectStage::PreDevelopment,
        date_identified: date(2026, 3, 1),
        assessment: AssessmentInput {
            likelihood: Likelihood::MEDIUM,
            impact_cost: cost(50_000.0),
        },
        mitigation: MitigationPlan {
            description: "Engage with regulators early".to_string(),
            status: MitigationStatus::NotStarted,
            residual_likelihood: Likelihood::LOW,
            residual_impact_cost: cost(15_000.0),
            owner: "Alex Wong".to_string(),
            due_date: None,
        },
        created_by: "System".to_string(),
    }
}

pub fn draft(
    title: &str,
    category: RiskCategory,
    likelihood: Likelihood,
    impact: f64,
    status: MitigationStatus,
) -> RiskDraft {
    let mut d = permit_delay();
    d.title = title.to_string();
    d.category = category;
    d.assessment = AssessmentInput {
        likelihood,
        impact_cost: cost(impact),
    };
    d.mitigation.status = status;
    d
}
