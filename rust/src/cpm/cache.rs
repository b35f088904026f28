//! Memoized CPM results.
//!
//! CPM is a pure function of the task list, so a caller that re-renders on
//! every data change can keep a [`CpmMemo`] and only pay for a calculation when
//! the list actually changed. The memo holds a single entry: the last input
//! and its outcome.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::config::CpmConfig;
use crate::log_debug;
use crate::models::{CpmResult, Task};

use super::{calculate_cpm_with_config, CpmError};

struct MemoEntry {
    fingerprint: u64,
    tasks: Vec<Task>,
    outcome: Result<CpmResult, CpmError>,
}

impl MemoEntry {
    fn matches(&self, fingerprint: u64, tasks: &[Task]) -> bool {
        // Fingerprint is a fast reject; the field comparison guards against collisions
        self.fingerprint == fingerprint
            && self.tasks.len() == tasks.len()
            && self.tasks.iter().zip(tasks).all(|(a, b)| same_task(a, b))
    }
}

/// Field-wise equality with durations compared bit for bit, so a NaN
/// duration matches itself the same way the fingerprint hashes it.
fn same_task(a: &Task, b: &Task) -> bool {
    a.id == b.id
        && a.title == b.title
        && a.duration.to_bits() == b.duration.to_bits()
        && a.dependencies == b.dependencies
}

/// Single-entry cache of the last CPM calculation.
pub struct CpmMemo {
    config: CpmConfig,
    entry: Option<MemoEntry>,
    hits: usize,
    misses: usize,
}

impl CpmMemo {
    pub fn new(config: CpmConfig) -> Self {
        Self {
            config,
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the outcome for `tasks`, recomputing only if the input changed.
    ///
    /// Errors are remembered as well; asking again with the same invalid input
    /// returns the same error without another calculation.
    pub fn get_or_compute(&mut self, tasks: &[Task]) -> Result<&CpmResult, CpmError> {
        let fingerprint = fingerprint(tasks);

        let entry = match self.entry.take() {
            Some(entry) if entry.matches(fingerprint, tasks) => {
                self.hits += 1;
                log_debug!(self.config.verbosity, "[memo] hit {:016x}", fingerprint);
                entry
            }
            _ => {
                self.misses += 1;
                log_debug!(self.config.verbosity, "[memo] miss {:016x}", fingerprint);
                MemoEntry {
                    fingerprint,
                    tasks: tasks.to_vec(),
                    outcome: calculate_cpm_with_config(tasks, &self.config),
                }
            }
        };

        match &self.entry.insert(entry).outcome {
            Ok(result) => Ok(result),
            Err(err) => Err(err.clone()),
        }
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl Default for CpmMemo {
    fn default() -> Self {
        Self::new(CpmConfig::default())
    }
}

/// Hash every field the calculation depends on, in order.
fn fingerprint(tasks: &[Task]) -> u64 {
    let mut hasher = FxHasher::default();
    tasks.len().hash(&mut hasher);
    for task in tasks {
        task.id.hash(&mut hasher);
        task.title.hash(&mut hasher);
        task.duration.to_bits().hash(&mut hasher);
        task.dependencies.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, duration: f64, deps: Vec<&str>) -> Task {
        Task::new(
            id.to_string(),
            id.to_string(),
            duration,
            deps.into_iter().map(String::from).collect(),
        )
    }

    #[test]
    fn test_identical_input_hits() {
        let tasks = vec![make_task("a", 2.0, vec![]), make_task("b", 3.0, vec!["a"])];
        let mut memo = CpmMemo::default();

        let first = memo.get_or_compute(&tasks).unwrap().clone();
        let second = memo.get_or_compute(&tasks.clone()).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn test_changed_input_recomputes() {
        let mut tasks = vec![make_task("a", 2.0, vec![]), make_task("b", 3.0, vec!["a"])];
        let mut memo = CpmMemo::default();

        assert_eq!(memo.get_or_compute(&tasks).unwrap().project_duration, 5.0);

        tasks[1].duration = 4.0;
        assert_eq!(memo.get_or_compute(&tasks).unwrap().project_duration, 6.0);
        assert_eq!(memo.misses(), 2);
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn test_errors_are_memoized() {
        let tasks = vec![make_task("a", 1.0, vec!["b"]), make_task("b", 1.0, vec!["a"])];
        let mut memo = CpmMemo::default();

        let first = memo.get_or_compute(&tasks).unwrap_err();
        let second = memo.get_or_compute(&tasks).unwrap_err();

        assert!(matches!(first, CpmError::CyclicDependency { .. }));
        assert_eq!(first, second);
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn test_nan_duration_error_is_memoized() {
        let tasks = vec![make_task("a", f64::NAN, vec![])];
        let mut memo = CpmMemo::default();

        let first = memo.get_or_compute(&tasks).unwrap_err();
        let second = memo.get_or_compute(&tasks).unwrap_err();

        assert!(matches!(first, CpmError::InvalidDuration { .. }));
        assert!(matches!(second, CpmError::InvalidDuration { .. }));
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn test_signed_zero_durations_are_distinct_inputs() {
        let mut memo = CpmMemo::default();

        memo.get_or_compute(&[make_task("a", 0.0, vec![])]).unwrap();
        memo.get_or_compute(&[make_task("a", -0.0, vec![])]).unwrap();

        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let tasks = vec![make_task("a", 1.0, vec![])];
        let mut memo = CpmMemo::default();

        memo.get_or_compute(&tasks).unwrap();
        memo.invalidate();
        memo.get_or_compute(&tasks).unwrap();

        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_fingerprint_sensitive_to_order_and_fields() {
        let a = make_task("a", 1.0, vec![]);
        let b = make_task("b", 1.0, vec![]);

        assert_eq!(
            fingerprint(&[a.clone(), b.clone()]),
            fingerprint(&[a.clone(), b.clone()])
        );
        assert_ne!(
            fingerprint(&[a.clone(), b.clone()]),
            fingerprint(&[b.clone(), a.clone()])
        );

        let mut renamed = a.clone();
        renamed.title = "A (renamed)".to_string();
        assert_ne!(fingerprint(&[a]), fingerprint(&[renamed]));
    }
}
