//! Dashboard summary and mitigation-status board.

mod common;

use bankability_core::{Likelihood, RiskDistribution};
use bankability_register::{MitigationStatus, RiskCategory};
use common::{bucketed_register, draft, register};

#[test]
fn test_empty_register_summary_is_zeroed() {
    let reg = register();
    let summary = reg.summary();
    assert_eq!(summary.total_risks, 0);
    assert_eq!(summary.high_attention, 0);
    assert_eq!(summary.mitigated, 0);
    assert_eq!(summary.total_contingency, 0.0);
    assert_eq!(summary.distribution, RiskDistribution::default());
}

#[test]
fn test_summary_totals_and_distribution() {
    let mut reg = register();
    // 0.5 * 50k = 25k -> Low; contingency 25k.
    reg.add(draft("A", RiskCategory::Regulatory, Likelihood::MEDIUM, 50_000.0, MitigationStatus::Done))
        .unwrap();
    // 0.7 * 400k = 280k -> Medium; contingency 300k.
    reg.add(draft("B", RiskCategory::Technical, Likelihood::HIGH, 400_000.0, MitigationStatus::InProgress))
        .unwrap();
    // 0.7 * 1M = 700k -> High; contingency 750k.
    reg.add(draft("C", RiskCategory::Financial, Likelihood::HIGH, 1_000_000.0, MitigationStatus::NotStarted))
        .unwrap();

    let summary = reg.summary();
    assert_eq!(summary.total_risks, 3);
    assert_eq!(
        summary.distribution,
        RiskDistribution {
            low: 1,
            medium: 1,
            high: 1
        }
    );
    assert_eq!(summary.distribution.total(), summary.total_risks);
    assert_eq!(summary.high_attention, 1);
    assert_eq!(summary.mitigated, 1);
    assert_eq!(summary.total_impact, 1_450_000.0);
    assert_eq!(summary.total_contingency, 25_000.0 + 300_000.0 + 750_000.0);
    // Residual for every draft: Low, 15k -> 3_750 each.
    assert_eq!(summary.residual_contingency, 3.0 * 3_750.0);
}

#[test]
fn test_bucketed_high_attention_starts_at_six() {
    let mut reg = bucketed_register();
    // Medium x impact 50k (factor 3) = 6.
    reg.add(draft("A", RiskCategory::Regulatory, Likelihood::MEDIUM, 50_000.0, MitigationStatus::NotStarted))
        .unwrap();
    // Medium x impact 20k (factor 2) = 4.
    reg.add(draft("B", RiskCategory::Regulatory, Likelihood::MEDIUM, 20_000.0, MitigationStatus::NotStarted))
        .unwrap();
    // Low x impact 5k (factor 1) = 1.
    reg.add(draft("C", RiskCategory::Regulatory, Likelihood::LOW, 5_000.0, MitigationStatus::NotStarted))
        .unwrap();

    let summary = reg.summary();
    assert_eq!(summary.high_attention, 1);
    assert_eq!(
        summary.distribution,
        RiskDistribution {
            low: 1,
            medium: 1,
            high: 1
        }
    );
}

#[test]
fn test_status_board_has_every_column() {
    let mut reg = register();
    reg.add(draft("A", RiskCategory::Legal, Likelihood::LOW, 1.0, MitigationStatus::Done))
        .unwrap();
    reg.add(draft("B", RiskCategory::Legal, Likelihood::LOW, 1.0, MitigationStatus::Done))
        .unwrap();

    let board = reg.status_board();
    let columns: Vec<(MitigationStatus, usize)> =
        board.columns().map(|(s, risks)| (s, risks.len())).collect();
    assert_eq!(
        columns,
        vec![
            (MitigationStatus::NotStarted, 0),
            (MitigationStatus::InProgress, 0),
            (MitigationStatus::Done, 2),
        ]
    );
    let done: Vec<&str> = board
        .column(MitigationStatus::Done)
        .iter()
        .map(|r| r.title())
        .collect();
    assert_eq!(done, vec!["A", "B"]);
}
