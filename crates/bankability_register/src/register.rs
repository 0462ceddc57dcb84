//! In-memory risk register.
//!
//! Invariants:
//! - Every stored risk's assessment was computed with the register's policy.
//! - `version` starts at 1 and grows by exactly one per accepted mutation.
//! - A rejected mutation leaves the register, its events and its risks untouched.

use std::io;

use bankability_core::QuantificationPolicy;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, RegisterConfig};
use crate::error::RegisterError;
use crate::events::RegisterEvent;
use crate::export::{ExportOptions, export_csv};
use crate::filter::RiskFilter;
use crate::risk::{Risk, RiskComment, RiskDraft, RiskPatch};
use crate::summary::{RegisterSummary, StatusBoard, status_board, summarize};

/// Counters for register mutations.
#[derive(Debug, Default)]
pub struct RegisterMetrics {
    added_total: u64,
    updated_total: u64,
    deleted_total: u64,
    rejected_total: u64,
}

impl RegisterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn added_total(&self) -> u64 {
        self.added_total
    }

    pub fn updated_total(&self) -> u64 {
        self.updated_total
    }

    pub fn deleted_total(&self) -> u64 {
        self.deleted_total
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total
    }

    fn record_added(&mut self) {
        self.added_total += 1;
    }

    fn record_updated(&mut self) {
        self.updated_total += 1;
    }

    fn record_deleted(&mut self) {
        self.deleted_total += 1;
    }

    fn record_rejected(&mut self) {
        self.rejected_total += 1;
    }
}

pub struct RiskRegister<C: Clock = SystemClock> {
    policy: QuantificationPolicy,
    clock: C,
    risks: Vec<Risk>,
    events: Vec<RegisterEvent>,
    metrics: RegisterMetrics,
}

impl RiskRegister<SystemClock> {
    pub fn new(policy: QuantificationPolicy) -> Result<Self, RegisterError> {
        Self::with_clock(policy, SystemClock)
    }
}

impl Default for RiskRegister<SystemClock> {
    fn default() -> Self {
        Self::from_validated(QuantificationPolicy::default(), SystemClock)
    }
}

impl<C: Clock> RiskRegister<C> {
    pub fn with_clock(policy: QuantificationPolicy, clock: C) -> Result<Self, RegisterError> {
        policy.validate()?;
        Ok(Self::from_validated(policy, clock))
    }

    /// Build a register whose policy comes from a config document.
    pub fn from_config(config: &RegisterConfig, clock: C) -> Result<Self, ConfigError> {
        Ok(Self::from_validated(config.resolve_policy()?, clock))
    }

    fn from_validated(policy: QuantificationPolicy, clock: C) -> Self {
        Self {
            policy,
            clock,
            risks: Vec::new(),
            events: Vec::new(),
            metrics: RegisterMetrics::new(),
        }
    }

    pub fn policy(&self) -> &QuantificationPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn metrics(&self) -> &RegisterMetrics {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Record a new risk and compute its initial assessment.
    pub fn add(&mut self, draft: RiskDraft) -> Result<&Risk, RegisterError> {
        if draft.title.trim().is_empty() {
            return Err(self.reject(RegisterError::EmptyTitle));
        }

        let id = Uuid::new_v4();
        let risk = Risk::from_draft(draft, id, self.clock.now(), &self.policy);
        tracing::info!(
            risk_id = %id,
            score = risk.assessment().risk_score(),
            contingency = risk.assessment().contingency(),
            "risk added"
        );
        self.events.push(RegisterEvent::Added {
            id,
            title: risk.title().to_string(),
        });
        self.metrics.record_added();
        self.risks.push(risk);
        Ok(&self.risks[self.risks.len() - 1])
    }

    /// Merge a partial update into an existing risk.
    pub fn update(&mut self, id: Uuid, patch: RiskPatch) -> Result<&Risk, RegisterError> {
        let Some(idx) = self.position(id) else {
            return Err(self.reject(RegisterError::NotFound(id)));
        };
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(self.reject(RegisterError::EmptyTitle));
        }

        let reassessed = patch.touches_assessment();
        let now = self.clock.now();
        let risk = &mut self.risks[idx];
        risk.apply_patch(patch, now, &self.policy);
        tracing::info!(
            risk_id = %id,
            version = risk.version(),
            reassessed,
            "risk updated"
        );
        self.events.push(RegisterEvent::Updated {
            id,
            title: risk.title().to_string(),
            version: risk.version(),
            reassessed,
        });
        self.metrics.record_updated();
        Ok(&self.risks[idx])
    }

    /// Append a comment. Counts as an update for versioning.
    pub fn add_comment(
        &mut self,
        id: Uuid,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<&RiskComment, RegisterError> {
        let Some(idx) = self.position(id) else {
            return Err(self.reject(RegisterError::NotFound(id)));
        };
        let now = self.clock.now();
        let comment = RiskComment {
            id: Uuid::new_v4(),
            content: content.into(),
            author: author.into(),
            created_at: now,
            updated_at: now,
        };
        let comment_id = comment.id;
        let risk = &mut self.risks[idx];
        risk.push_comment(comment, now);
        tracing::info!(risk_id = %id, %comment_id, version = risk.version(), "comment added");
        self.events.push(RegisterEvent::CommentAdded {
            id,
            comment_id,
            version: risk.version(),
        });
        self.metrics.record_updated();
        let comments = self.risks[idx].comments();
        Ok(&comments[comments.len() - 1])
    }

    /// Remove a risk permanently and return it.
    pub fn delete(&mut self, id: Uuid) -> Result<Risk, RegisterError> {
        let Some(idx) = self.position(id) else {
            return Err(self.reject(RegisterError::NotFound(id)));
        };
        let risk = self.risks.remove(idx);
        tracing::info!(risk_id = %id, "risk deleted");
        self.events.push(RegisterEvent::Deleted {
            id,
            title: risk.title().to_string(),
        });
        self.metrics.record_deleted();
        Ok(risk)
    }

    pub fn get(&self, id: Uuid) -> Option<&Risk> {
        self.risks.iter().find(|r| r.id() == id)
    }

    /// All risks in insertion order.
    pub fn list(&self) -> &[Risk] {
        &self.risks
    }

    pub fn list_filtered(&self, filter: &RiskFilter) -> Vec<&Risk> {
        self.risks.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Swap the quantification policy and reassess every stored risk under it.
    ///
    /// Reassessment changes derived values only, so versions are not bumped.
    pub fn replace_policy(&mut self, policy: QuantificationPolicy) -> Result<(), RegisterError> {
        if let Err(err) = policy.validate() {
            return Err(self.reject(err.into()));
        }
        self.policy = policy;
        for risk in &mut self.risks {
            risk.reassess(&self.policy);
        }
        let reassessed = self.risks.len();
        tracing::info!(reassessed, scoring = ?self.policy.scoring, "quantification policy replaced");
        self.events.push(RegisterEvent::PolicyReplaced { reassessed });
        Ok(())
    }

    pub fn summary(&self) -> RegisterSummary {
        summarize(&self.risks, &self.policy)
    }

    pub fn status_board(&self) -> StatusBoard<'_> {
        status_board(&self.risks)
    }

    /// Write the register as CSV; returns the number of data rows written.
    pub fn export_csv<W: io::Write>(
        &self,
        options: &ExportOptions,
        writer: W,
    ) -> Result<usize, RegisterError> {
        export_csv(&self.risks, &self.policy, options, writer)
    }

    /// Take all pending change notifications. Draining clears the buffer.
    pub fn drain_events(&mut self) -> Vec<RegisterEvent> {
        std::mem::take(&mut self.events)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.risks.iter().position(|r| r.id() == id)
    }

    fn reject(&mut self, err: RegisterError) -> RegisterError {
        self.metrics.record_rejected();
        tracing::debug!("register mutation rejected: {err}");
        err
    }
}
