//! Scenario Snapshots
//!
//! Serialization of a parameter set as a shareable scenario, with a
//! canonical fingerprint so a restored scenario can be verified against
//! what was saved. The core stays stateless: where snapshots are written
//! is the caller's concern.
//!
//! # Critical Invariants
//!
//! - **Determinism**: equal parameter sets produce identical fingerprints,
//!   regardless of JSON key order in the serialized form.
//! - **Tamper detection**: restoring a snapshot whose parameters no longer
//!   match its fingerprint fails with a typed error.

use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur when capturing or restoring a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario serialization failed: {0}")]
    Serialization(String),

    #[error("Scenario fingerprint mismatch: expected {expected}, got {actual}")]
    FingerprintMismatch { expected: String, actual: String },
}

/// A saved scenario: the parameters plus their fingerprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    /// The captured parameter set
    pub parameters: ParameterSet,
    /// SHA256 over the canonical JSON form of `parameters`
    pub fingerprint: String,
}

/// Compute the deterministic SHA256 fingerprint of a serializable value
///
/// Object keys are sorted recursively before hashing so the result does not
/// depend on serialization order.
pub fn compute_fingerprint<T: Serialize>(value: &T) -> Result<String, ScenarioError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(value)
        .map_err(|e| ScenarioError::Serialization(e.to_string()))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| ScenarioError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl ScenarioSnapshot {
    /// Capture a parameter set into a snapshot
    pub fn capture(parameters: &ParameterSet) -> Result<Self, ScenarioError> {
        Ok(Self {
            parameters: parameters.clone(),
            fingerprint: compute_fingerprint(parameters)?,
        })
    }

    /// Serialize the snapshot to pretty JSON
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        serde_json::to_string_pretty(self).map_err(|e| ScenarioError::Serialization(e.to_string()))
    }

    /// Restore a snapshot from JSON, verifying its fingerprint
    ///
    /// # Errors
    ///
    /// - `ScenarioError::Serialization` when the JSON is malformed or a
    ///   parameter field is missing
    /// - `ScenarioError::FingerprintMismatch` when the parameters do not
    ///   hash to the stored fingerprint
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let snapshot: ScenarioSnapshot =
            serde_json::from_str(json).map_err(|e| ScenarioError::Serialization(e.to_string()))?;

        let actual = compute_fingerprint(&snapshot.parameters)?;
        if actual != snapshot.fingerprint {
            return Err(ScenarioError::FingerprintMismatch {
                expected: snapshot.fingerprint,
                actual,
            });
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let params = ParameterSet::default();
        let a = compute_fingerprint(&params).unwrap();
        let b = compute_fingerprint(&params.clone()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA256
    }

    #[test]
    fn test_fingerprint_changes_with_parameters() {
        let params = ParameterSet::default();
        let tweaked = params.with_field("avgTipUSD", 6.0).unwrap();

        assert_ne!(
            compute_fingerprint(&params).unwrap(),
            compute_fingerprint(&tweaked).unwrap()
        );
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let params = ParameterSet::default()
            .with_field("monthlyActiveUsers", 42_000.0)
            .unwrap();
        let snapshot = ScenarioSnapshot::capture(&params).unwrap();

        let restored = ScenarioSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored.parameters, params);
    }

    #[test]
    fn test_tampered_snapshot_is_rejected() {
        let snapshot = ScenarioSnapshot::capture(&ParameterSet::default()).unwrap();
        let tampered = snapshot
            .to_json()
            .unwrap()
            .replace("\"founderAllocation\": 15.0", "\"founderAllocation\": 95.0");

        match ScenarioSnapshot::from_json(&tampered) {
            Err(ScenarioError::FingerprintMismatch { .. }) => {}
            other => panic!("expected fingerprint mismatch, got {:?}", other),
        }
    }
}
