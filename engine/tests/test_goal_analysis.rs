//! Goal inversion and undefined-division guard tests

use tokenomics_simulator_core_rs::{compute, ParameterSet};

/// Build a set where one paying user is worth exactly $5.00/month to the
/// protocol: $2.50 from chat (10 msgs x $0.25 x 100% protocol) plus
/// $2.50 from tips (1 tip x $5 x 50% protocol).
fn five_dollar_scenario() -> ParameterSet {
    let mut params = ParameterSet::default();
    for (name, value) in [
        ("chatsPerPayingUser", 10.0),
        ("chatPriceUSD", 0.25),
        ("chatProtocolSplit", 100.0),
        ("tipsPerUserPerMonth", 1.0),
        ("avgTipUSD", 5.0),
        ("tipProtocolSplit", 50.0),
        ("founderMonthlyNeedUSD", 20_000.0),
        ("pctPayPerMessage", 40.0),
    ] {
        params = params.with_field(name, value).unwrap();
    }
    params
}

#[test]
fn test_goal_inversion_round_trip() {
    let metrics = compute(&five_dollar_scenario());

    assert_eq!(metrics.goal.revenue_per_paying_user, 5.0);
    // ceil(20000 / 5) = 4000 paying users
    assert_eq!(metrics.goal.paying_users_needed, Some(4_000));
    // ceil(4000 / 0.40) = 10000 total users
    assert_eq!(metrics.goal.total_users_needed, Some(10_000));
}

#[test]
fn test_goal_inversion_rounds_up() {
    let params = five_dollar_scenario()
        .with_field("founderMonthlyNeedUSD", 20_001.0)
        .unwrap();
    let metrics = compute(&params);

    // 20001 / 5 = 4000.2 -> 4001
    assert_eq!(metrics.goal.paying_users_needed, Some(4_001));
}

#[test]
fn test_zero_protocol_revenue_is_undefined_not_infinite() {
    // No protocol share on chat or tips: a paying user is worth $0
    let params = ParameterSet::default()
        .with_field("chatProtocolSplit", 0.0)
        .unwrap()
        .with_field("tipProtocolSplit", 0.0)
        .unwrap();
    let metrics = compute(&params);

    assert_eq!(metrics.goal.revenue_per_paying_user, 0.0);
    assert_eq!(metrics.goal.paying_users_needed, None);
    assert_eq!(metrics.goal.total_users_needed, None);
}

#[test]
fn test_negative_protocol_revenue_is_undefined() {
    // A negative chat price drives per-user revenue below zero
    let params = ParameterSet::default()
        .with_field("chatPriceUSD", -1.0)
        .unwrap()
        .with_field("tipProtocolSplit", 0.0)
        .unwrap();
    let metrics = compute(&params);

    assert!(metrics.goal.revenue_per_paying_user < 0.0);
    assert_eq!(metrics.goal.paying_users_needed, None);
    assert_eq!(metrics.goal.total_users_needed, None);
}

#[test]
fn test_zero_paying_share_leaves_total_users_undefined() {
    let params = five_dollar_scenario()
        .with_field("pctPayPerMessage", 0.0)
        .unwrap();
    let metrics = compute(&params);

    // Per-user revenue is still defined, so the paying-user count is too;
    // scaling it to a total user base is not
    assert_eq!(metrics.goal.paying_users_needed, Some(4_000));
    assert_eq!(metrics.goal.total_users_needed, None);
}

#[test]
fn test_goal_met_and_gap_sign() {
    let baseline = compute(&ParameterSet::default());
    // Baseline founder revenue is $34,500 against a $20,000 need
    assert!(baseline.goal.goal_met);
    assert!(baseline.goal.gap < 0.0);

    let stretched = compute(
        &ParameterSet::default()
            .with_field("founderMonthlyNeedUSD", 50_000.0)
            .unwrap(),
    );
    assert!(!stretched.goal.goal_met);
    assert!((stretched.goal.gap - 15_500.0).abs() < 1e-6);
}
