//! Scenario snapshot capture/restore tests

use tokenomics_simulator_core_rs::{
    compute, compute_fingerprint, ParameterSet, ScenarioError, ScenarioSnapshot,
};

#[test]
fn test_capture_restore_preserves_projection() {
    let params = ParameterSet::default()
        .with_field("monthlyActiveUsers", 75_000.0)
        .unwrap()
        .with_field("chatPriceUSD", 0.1)
        .unwrap();

    let json = ScenarioSnapshot::capture(&params).unwrap().to_json().unwrap();
    let restored = ScenarioSnapshot::from_json(&json).unwrap();

    assert_eq!(restored.parameters, params);
    assert_eq!(compute(&restored.parameters), compute(&params));
}

#[test]
fn test_fingerprint_is_key_order_independent() {
    // Re-encode the parameters with reversed key order; the fingerprint
    // must not change
    let params = ParameterSet::default();
    let value = serde_json::to_value(&params).unwrap();
    let reversed: serde_json::Map<String, serde_json::Value> = value
        .as_object()
        .unwrap()
        .iter()
        .rev()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let reparsed: ParameterSet =
        serde_json::from_value(serde_json::Value::Object(reversed)).unwrap();

    assert_eq!(
        compute_fingerprint(&params).unwrap(),
        compute_fingerprint(&reparsed).unwrap()
    );
}

#[test]
fn test_edited_parameters_fail_verification() {
    let snapshot = ScenarioSnapshot::capture(&ParameterSet::default()).unwrap();

    // Hand-edit the saved document without refreshing the fingerprint
    let mut value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    value["parameters"]["monthlyActiveUsers"] = serde_json::json!(999_999.0);
    let edited = serde_json::to_string(&value).unwrap();

    match ScenarioSnapshot::from_json(&edited) {
        Err(ScenarioError::FingerprintMismatch { expected, actual }) => {
            assert_ne!(expected, actual);
        }
        other => panic!("expected FingerprintMismatch, got {:?}", other),
    }
}

#[test]
fn test_malformed_snapshot_is_a_serialization_error() {
    match ScenarioSnapshot::from_json("{\"parameters\": {}}") {
        Err(ScenarioError::Serialization(_)) => {}
        other => panic!("expected Serialization error, got {:?}", other),
    }
}
