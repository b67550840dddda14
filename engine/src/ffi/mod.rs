//! Python FFI Boundary
//!
//! Thin, stateless wrappers around the engine for Python callers: the
//! whole surface is three functions over plain dicts. Parameter dicts are
//! sparse maps, so missing fields are caught here (by name) before the
//! fixed-shape core ever sees them.

pub mod types;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::checks;
use crate::params::ParameterSet;
use crate::projection;

/// The baseline parameter set as a dict
#[pyfunction]
pub fn default_parameters(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    types::parameters_to_dict(py, &ParameterSet::default())
}

/// Run one projection pass over a complete parameter dict
#[pyfunction]
#[pyo3(name = "compute")]
pub fn compute_metrics<'py>(
    py: Python<'py>,
    parameters: &Bound<'py, PyDict>,
) -> PyResult<Bound<'py, PyDict>> {
    let params = types::parse_parameter_set(parameters)?;
    types::metrics_to_dict(py, &projection::compute(&params))
}

/// Report the balance of every grouped percentage set
#[pyfunction]
#[pyo3(name = "check_allocations")]
pub fn allocation_report<'py>(
    py: Python<'py>,
    parameters: &Bound<'py, PyDict>,
) -> PyResult<Bound<'py, PyList>> {
    let params = types::parse_parameter_set(parameters)?;
    types::checks_to_list(py, &checks::check_allocations(&params))
}
