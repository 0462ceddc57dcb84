//! Worked examples from the risk register screens.

use bankability_core::{
    ContingencyModel, ImpactCost, Likelihood, QuantificationPolicy, RiskAssessment, RiskLevel,
    compute_contingency, compute_risk_score, format_usd,
};

fn cost(v: f64) -> ImpactCost {
    ImpactCost::new(v).unwrap()
}

#[test]
fn test_permit_delay_bucketed_with_percentage_contingency() {
    // Medium likelihood, 50k impact, bucketed scoring.
    let policy = QuantificationPolicy::bucketed();
    let a = RiskAssessment::new(Likelihood::MEDIUM, cost(50_000.0), &policy);
    // Strict cut-off: 50_000 is not < 50_000, impact factor 3.
    assert_eq!(a.risk_score(), 6.0);
    assert_eq!(a.level(&policy), RiskLevel::High);
    assert_eq!(a.contingency(), 25_000.0);
    assert_eq!(format_usd(a.contingency()), "$25,000.00");
}

#[test]
fn test_bucketed_medium_below_upper_cutoff_scores_four() {
    let policy = QuantificationPolicy::bucketed();
    let a = RiskAssessment::new(Likelihood::MEDIUM, cost(25_000.0), &policy);
    assert_eq!(a.risk_score(), 4.0);
    assert_eq!(a.level(&policy), RiskLevel::Medium);
    assert_eq!(a.contingency(), 12_500.0);
}

#[test]
fn test_continuous_high_100k_is_low_level() {
    let policy = QuantificationPolicy::default();
    let a = RiskAssessment::new(Likelihood::HIGH, cost(100_000.0), &policy);
    assert!((a.risk_score() - 70_000.0).abs() < 1e-6);
    assert_eq!(policy.classify(a.risk_score()), RiskLevel::Low);
}

#[test]
fn test_score_as_contingency_policy() {
    let policy = QuantificationPolicy {
        contingency: ContingencyModel::ScoreAsContingency,
        ..QuantificationPolicy::default()
    };
    let l = Likelihood::percentage(20.0).unwrap();
    let score = compute_risk_score(l, cost(1_000_000.0), &policy);
    let contingency = compute_contingency(l, cost(1_000_000.0), &policy);
    assert!((score - 200_000.0).abs() < 1e-6);
    assert_eq!(score, contingency);
    assert_eq!(policy.classify(score), RiskLevel::Medium);
}
