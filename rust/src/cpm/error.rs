//! Errors raised while scheduling a task set.

use thiserror::Error;

/// Reasons a task set cannot be scheduled. All are fatal to the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CpmError {
    #[error("Duplicate task id: {id}")]
    DuplicateTask { id: String },
    #[error("Task {task_id} depends on unknown task {dependency_id}")]
    UnknownDependency {
        task_id: String,
        dependency_id: String,
    },
    /// `cycle` is in execution order: each task depends on the one before it,
    /// and the first depends on the last.
    #[error("Circular dependency detected: {}", format_cycle(.cycle))]
    CyclicDependency { cycle: Vec<String> },
    #[error("Task {task_id} has invalid duration {duration} (must be finite and non-negative)")]
    InvalidDuration { task_id: String, duration: f64 },
}

fn format_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        Some(first) => format!("{} -> {}", cycle.join(" -> "), first),
        None => String::from("<unknown>"),
    }
}
