//! Critical Path Method scheduler.
//!
//! Computes early/late start and finish times, slack, the critical path and
//! the project duration for a list of tasks with dependencies. The engine is
//! usable directly from Rust and is exposed to Python as the `rust` module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::create_exception;
use pyo3::prelude::*;

mod config;
pub mod cpm;
pub mod dates;
mod interner;
pub mod logging;
mod models;

pub use config::CpmConfig;
pub use cpm::{
    calculate_cpm, calculate_cpm_with_config, CpmError, CpmMemo, TaskGraph, TaskTiming,
};
pub use dates::{DateProjectionError, DatedTask};
pub use interner::TaskIdInt;
pub use models::{CpmResult, ScheduledTask, Task};

create_exception!(
    rust,
    SchedulingError,
    pyo3::exceptions::PyValueError,
    "The task set cannot be scheduled."
);
create_exception!(rust, DuplicateTaskError, SchedulingError);
create_exception!(rust, UnknownDependencyError, SchedulingError);
create_exception!(rust, CyclicDependencyError, SchedulingError);
create_exception!(rust, InvalidDurationError, SchedulingError);

fn to_py_err(err: CpmError) -> PyErr {
    let message = err.to_string();
    match err {
        CpmError::DuplicateTask { .. } => DuplicateTaskError::new_err(message),
        CpmError::UnknownDependency { .. } => UnknownDependencyError::new_err(message),
        CpmError::CyclicDependency { .. } => CyclicDependencyError::new_err(message),
        CpmError::InvalidDuration { .. } => InvalidDurationError::new_err(message),
    }
}

/// Run the Critical Path Method over a list of tasks.
///
/// # Arguments
/// * `tasks` - Tasks with ids, durations and dependency ids
/// * `config` - Optional configuration (verbosity, slack tolerance)
///
/// # Returns
/// * CpmResult with per-task timings, the critical path and project duration
///
/// # Raises
/// * DuplicateTaskError, UnknownDependencyError, CyclicDependencyError or
///   InvalidDurationError (all subclasses of ValueError)
#[pyfunction]
#[pyo3(name = "calculate_cpm", signature = (tasks, config=None))]
fn py_calculate_cpm(tasks: Vec<Task>, config: Option<CpmConfig>) -> PyResult<CpmResult> {
    let config = config.unwrap_or_default();
    calculate_cpm_with_config(&tasks, &config).map_err(to_py_err)
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<ScheduledTask>()?;
    m.add_class::<CpmResult>()?;
    m.add_class::<DatedTask>()?;

    // Config types
    m.add_class::<CpmConfig>()?;

    // Errors
    let py = m.py();
    m.add("SchedulingError", py.get_type_bound::<SchedulingError>())?;
    m.add("DuplicateTaskError", py.get_type_bound::<DuplicateTaskError>())?;
    m.add(
        "UnknownDependencyError",
        py.get_type_bound::<UnknownDependencyError>(),
    )?;
    m.add(
        "CyclicDependencyError",
        py.get_type_bound::<CyclicDependencyError>(),
    )?;
    m.add(
        "InvalidDurationError",
        py.get_type_bound::<InvalidDurationError>(),
    )?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_calculate_cpm, m)?)?;

    Ok(())
}
