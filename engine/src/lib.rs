//! Tokenomics Simulator Core - Rust Engine
//!
//! Deterministic revenue and tokenomics projection engine for the Cosmic
//! Friends character platform.
//!
//! # Architecture
//!
//! - **params**: The complete input parameter set (distribution, splits,
//!   pricing, funnel, costs, goal)
//! - **projection**: The pure derivation pass from parameters to metrics
//! - **checks**: Advisory percentage-group balance checks
//! - **scenario**: Fingerprinted parameter snapshots for save/share
//!
//! # Critical Invariants
//!
//! 1. `compute` is a total, pure function: no I/O, no caching, no input
//!    mutation, identical output for equal inputs
//! 2. Unbalanced or out-of-range inputs are reported, never rejected;
//!    the engine is a calculator, not a business-rule enforcer
//! 3. No arithmetic path can surface `Infinity` or `NaN` from finite
//!    inputs; undefined goal figures are explicit `None`s
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod checks;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-exports for convenience
pub use checks::{check_allocations, AllocationCheck, AllocationGroup, BALANCE_EPSILON};
pub use params::{ParameterError, ParameterSet, FIELD_NAMES};
pub use projection::{
    compute, AnnualProjection, CostBreakdown, FounderRevenue, GoalAnalysis, MessageVolumes,
    Metrics, RecipientRevenue, RevenueLines, TokenFigures, UserSegments,
};
pub use scenario::{compute_fingerprint, ScenarioError, ScenarioSnapshot};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn tokenomics_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::default_parameters, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compute_metrics, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::allocation_report, m)?)?;
    Ok(())
}
