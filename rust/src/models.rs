//! Core data types for the CPM engine.

use chrono::NaiveDate;
use pyo3::prelude::*;

use crate::dates::DatedTask;

/// A task to be scheduled.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub title: String,
    #[pyo3(get, set)]
    pub duration: f64,
    /// Ids of tasks that must finish before this one may start.
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, title, duration, dependencies=Vec::new()))]
    pub fn new(id: String, title: String, duration: f64, dependencies: Vec<String>) -> Self {
        Self {
            id,
            title,
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, duration={}, deps={:?})",
            self.id, self.duration, self.dependencies
        )
    }
}

/// A task annotated with its CPM timings.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTask {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub title: String,
    #[pyo3(get)]
    pub duration: f64,
    #[pyo3(get)]
    pub dependencies: Vec<String>,
    #[pyo3(get)]
    pub early_start: f64,
    #[pyo3(get)]
    pub early_finish: f64,
    #[pyo3(get)]
    pub late_start: f64,
    #[pyo3(get)]
    pub late_finish: f64,
    /// Total float: how long the start can slip without moving the project end.
    #[pyo3(get)]
    pub slack: f64,
    /// Free float: how long the finish can slip without moving any successor.
    #[pyo3(get)]
    pub free_slack: f64,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl ScheduledTask {
    fn __repr__(&self) -> String {
        format!(
            "ScheduledTask(id={:?}, es={}, ef={}, ls={}, lf={}, slack={}, critical={})",
            self.id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack,
            self.is_critical
        )
    }
}

/// Result of a CPM calculation.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CpmResult {
    /// One entry per input task, in input order.
    #[pyo3(get)]
    pub tasks: Vec<ScheduledTask>,
    /// Task ids from source to sink along a zero-slack chain.
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    #[pyo3(get)]
    pub project_duration: f64,
    #[pyo3(get)]
    pub critical_tasks: Vec<ScheduledTask>,
}

impl CpmResult {
    /// Look up a scheduled task by id.
    pub fn task(&self, id: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

#[pymethods]
impl CpmResult {
    fn get_task(&self, id: &str) -> Option<ScheduledTask> {
        self.task(id).cloned()
    }

    /// Join the critical path into a single display string.
    #[pyo3(signature = (separator=" → "))]
    pub fn critical_path_label(&self, separator: &str) -> String {
        self.critical_path.join(separator)
    }

    #[pyo3(name = "project_dates")]
    fn py_project_dates(&self, start: NaiveDate) -> PyResult<Vec<DatedTask>> {
        self.project_dates(start)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmResult(tasks={}, project_duration={}, critical_path={:?})",
            self.tasks.len(),
            self.project_duration,
            self.critical_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scheduled(id: &str, slack: f64) -> ScheduledTask {
        ScheduledTask {
            id: id.to_string(),
            title: format!("Task {}", id),
            duration: 1.0,
            dependencies: vec![],
            early_start: 0.0,
            early_finish: 1.0,
            late_start: slack,
            late_finish: 1.0 + slack,
            slack,
            free_slack: slack,
            is_critical: slack == 0.0,
        }
    }

    #[test]
    fn test_task_lookup() {
        let result = CpmResult {
            tasks: vec![make_scheduled("a", 0.0), make_scheduled("b", 2.0)],
            critical_path: vec!["a".to_string()],
            project_duration: 1.0,
            critical_tasks: vec![make_scheduled("a", 0.0)],
        };

        assert_eq!(result.task("b").map(|t| t.slack), Some(2.0));
        assert!(result.task("missing").is_none());
    }

    #[test]
    fn test_critical_path_label() {
        let result = CpmResult {
            critical_path: vec!["A".to_string(), "B".to_string(), "D".to_string()],
            ..Default::default()
        };

        assert_eq!(result.critical_path_label(" → "), "A → B → D");
        assert_eq!(result.critical_path_label(","), "A,B,D");
        assert_eq!(CpmResult::default().critical_path_label(" → "), "");
    }
}
