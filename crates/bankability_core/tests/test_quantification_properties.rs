//! Property checks over the quantification functions.

use bankability_core::{
    ContingencyModel, ImpactCost, Likelihood, LikelihoodLabel, QuantificationPolicy,
    RiskAssessment, ScoringModel, compute_contingency, compute_risk_score, risk_distribution,
    total_contingency,
};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = LikelihoodLabel> {
    prop_oneof![
        Just(LikelihoodLabel::Low),
        Just(LikelihoodLabel::Medium),
        Just(LikelihoodLabel::High),
    ]
}

fn likelihood() -> impl Strategy<Value = Likelihood> {
    prop_oneof![
        label().prop_map(Likelihood::Label),
        (0.0f64..=100.0).prop_map(|p| Likelihood::percentage(p).unwrap()),
    ]
}

fn any_policy() -> impl Strategy<Value = QuantificationPolicy> {
    (
        prop_oneof![Just(ScoringModel::Continuous), Just(ScoringModel::Bucketed)],
        prop_oneof![
            Just(ContingencyModel::PercentageOfImpact),
            Just(ContingencyModel::ScoreAsContingency)
        ],
    )
        .prop_map(|(scoring, contingency)| QuantificationPolicy {
            scoring,
            contingency,
            ..QuantificationPolicy::default()
        })
}

proptest! {
    #[test]
    fn contingency_non_negative_and_monotone_in_impact(
        l in label(),
        a in 0.0f64..1e9,
        b in 0.0f64..1e9,
        policy in any_policy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let c_lo = compute_contingency(l.into(), ImpactCost::new(lo).unwrap(), &policy);
        let c_hi = compute_contingency(l.into(), ImpactCost::new(hi).unwrap(), &policy);
        prop_assert!(c_lo >= 0.0);
        prop_assert!(c_hi >= c_lo);
    }

    #[test]
    fn continuous_score_monotone_in_probability_and_impact(
        p1 in 0.0f64..=100.0,
        p2 in 0.0f64..=100.0,
        c1 in 0.0f64..1e9,
        c2 in 0.0f64..1e9,
    ) {
        let policy = QuantificationPolicy::default();
        let (plo, phi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let (clo, chi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let score = |p: f64, c: f64| {
            compute_risk_score(
                Likelihood::percentage(p).unwrap(),
                ImpactCost::new(c).unwrap(),
                &policy,
            )
        };
        prop_assert!(score(plo, clo) <= score(phi, clo));
        prop_assert!(score(plo, clo) <= score(plo, chi));
        prop_assert!(score(plo, clo) >= 0.0);
    }

    #[test]
    fn doubling_impact_never_decreases_score(l in likelihood(), c in 0.0f64..1e9, policy in any_policy()) {
        let once = compute_risk_score(l, ImpactCost::new(c).unwrap(), &policy);
        let twice = compute_risk_score(l, ImpactCost::new(c * 2.0).unwrap(), &policy);
        prop_assert!(twice >= once);
    }

    #[test]
    fn distribution_partitions_collection(
        inputs in prop::collection::vec((likelihood(), 0.0f64..5e6), 0..64),
        policy in any_policy(),
    ) {
        let assessments: Vec<RiskAssessment> = inputs
            .iter()
            .map(|(l, c)| RiskAssessment::new(*l, ImpactCost::new(*c).unwrap(), &policy))
            .collect();
        let dist = risk_distribution(&assessments, &policy);
        prop_assert_eq!(dist.low + dist.medium + dist.high, assessments.len());
        prop_assert!(total_contingency(&assessments) >= 0.0);
    }
}

#[test]
fn test_total_contingency_of_empty_is_zero() {
    let empty: [RiskAssessment; 0] = [];
    assert_eq!(total_contingency(&empty), 0.0);
    let dist = risk_distribution(&empty, &QuantificationPolicy::default());
    assert_eq!((dist.low, dist.medium, dist.high), (0, 0, 0));
}
