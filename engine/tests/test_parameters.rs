//! Parameter set construction, name-based updates, and JSON boundary tests

use tokenomics_simulator_core_rs::{ParameterError, ParameterSet, FIELD_NAMES};

#[test]
fn test_defaults_match_baseline() {
    let params = ParameterSet::default();

    // Token distribution
    assert_eq!(params.founder_allocation, 15.0);
    assert_eq!(params.treasury_allocation, 35.0);
    assert_eq!(params.community_allocation, 10.0);
    assert_eq!(params.liquidity_allocation, 10.0);
    assert_eq!(params.public_sale_allocation, 30.0);

    // Token details and vesting
    assert_eq!(params.total_supply, 1_000_000_000.0);
    assert_eq!(params.token_holder_threshold, 10_000.0);
    assert_eq!(params.founder_vesting_years, 3.0);

    // Revenue splits
    assert_eq!(params.chat_character_split, 50.0);
    assert_eq!(params.chat_treasury_split, 30.0);
    assert_eq!(params.chat_protocol_split, 20.0);
    assert_eq!(params.tip_character_split, 70.0);
    assert_eq!(params.tip_treasury_split, 20.0);
    assert_eq!(params.tip_protocol_split, 10.0);
    assert_eq!(params.auction_treasury_split, 80.0);
    assert_eq!(params.auction_founder_split, 20.0);
    assert_eq!(params.custom_char_treasury_split, 50.0);
    assert_eq!(params.custom_char_founder_split, 50.0);

    // Pricing
    assert_eq!(params.chat_price_usd, 0.25);
    assert_eq!(params.avg_tip_usd, 5.0);
    assert_eq!(params.eth_price_usd, 3500.0);
    assert_eq!(params.avg_daily_auction_eth, 0.5);
    assert_eq!(params.custom_character_fee_eth, 0.25);

    // Funnel and engagement
    assert_eq!(params.monthly_active_users, 10_000.0);
    assert_eq!(params.pct_free_only, 40.0);
    assert_eq!(params.pct_pay_per_message, 35.0);
    assert_eq!(params.pct_token_holders, 25.0);
    assert_eq!(params.chats_per_paying_user, 30.0);
    assert_eq!(params.chats_per_holder, 100.0);
    assert_eq!(params.tips_per_user_per_month, 2.0);
    assert_eq!(params.custom_characters_per_month, 20.0);

    // Costs and goal
    assert_eq!(params.cost_per_message, 0.02);
    assert_eq!(params.monthly_infra_cost_usd, 500.0);
    assert_eq!(params.founder_monthly_need_usd, 20_000.0);
}

#[test]
fn test_with_field_round_trips_every_name() {
    let params = ParameterSet::default();

    for name in FIELD_NAMES {
        let updated = params.with_field(name, 42.5).unwrap();
        assert_eq!(updated.get(name).unwrap(), 42.5, "field '{}'", name);
    }
}

#[test]
fn test_with_field_changes_exactly_one_field() {
    let params = ParameterSet::default();

    for name in FIELD_NAMES {
        let updated = params.with_field(name, -123.0).unwrap();
        for other in FIELD_NAMES {
            if other == name {
                continue;
            }
            assert_eq!(
                updated.get(other).unwrap(),
                params.get(other).unwrap(),
                "updating '{}' touched '{}'",
                name,
                other
            );
        }
    }
}

#[test]
fn test_with_field_does_not_mutate_source() {
    let params = ParameterSet::default();
    let _ = params.with_field("totalSupply", 1.0).unwrap();
    assert_eq!(params.total_supply, 1_000_000_000.0);
}

#[test]
fn test_unknown_field_is_rejected_by_name() {
    let params = ParameterSet::default();

    let err = params.with_field("notAField", 1.0).unwrap_err();
    assert_eq!(err, ParameterError::UnknownField("notAField".to_string()));
    assert!(err.to_string().contains("notAField"));

    assert!(params.get("alsoNotAField").is_err());
}

#[test]
fn test_json_round_trip() {
    let params = ParameterSet::default()
        .with_field("monthlyActiveUsers", 123_456.0)
        .unwrap();

    let json = serde_json::to_string(&params).unwrap();
    let restored: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, params);
}

#[test]
fn test_sparse_json_is_rejected_naming_the_field() {
    // Drop one field from an otherwise complete document
    let full = serde_json::to_value(ParameterSet::default()).unwrap();
    let mut map = full.as_object().unwrap().clone();
    map.remove("ethPriceUSD");

    let err = serde_json::from_value::<ParameterSet>(serde_json::Value::Object(map)).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("ethPriceUSD"),
        "error should name the missing field: {}",
        message
    );
}

#[test]
fn test_unknown_json_field_is_rejected() {
    let full = serde_json::to_value(ParameterSet::default()).unwrap();
    let mut map = full.as_object().unwrap().clone();
    map.insert("mysteryKnob".to_string(), serde_json::json!(1.0));

    assert!(serde_json::from_value::<ParameterSet>(serde_json::Value::Object(map)).is_err());
}
