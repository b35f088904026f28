//! Configuration for the CPM engine.

use pyo3::prelude::*;

/// Tuning knobs for a CPM calculation.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct CpmConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Slack magnitude at or below which a task counts as critical.
    #[pyo3(get, set)]
    pub slack_epsilon: f64,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            slack_epsilon: 1e-9,
        }
    }
}

#[pymethods]
impl CpmConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, slack_epsilon=None))]
    fn new(verbosity: Option<u8>, slack_epsilon: Option<f64>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            // A negative tolerance would make nothing critical
            slack_epsilon: slack_epsilon.unwrap_or(defaults.slack_epsilon).max(0.0),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmConfig(verbosity={}, slack_epsilon={})",
            self.verbosity, self.slack_epsilon
        )
    }
}
