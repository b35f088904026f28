//! Projection of CPM offsets onto calendar dates.
//!
//! One time unit is one calendar day counted from the project start. There is
//! no working-day calendar: weekends and holidays are ordinary days.

use chrono::{Days, NaiveDate};
use pyo3::prelude::*;
use thiserror::Error;

use crate::models::CpmResult;

/// Errors from calendar projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateProjectionError {
    #[error("Task {task_id}: offset {offset} days from {start} is outside the supported date range")]
    OutOfRange {
        task_id: String,
        start: NaiveDate,
        offset: f64,
    },
}

/// A scheduled task's window expressed as dates.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct DatedTask {
    #[pyo3(get)]
    pub task_id: String,
    #[pyo3(get)]
    pub early_start: NaiveDate,
    #[pyo3(get)]
    pub early_finish: NaiveDate,
    #[pyo3(get)]
    pub late_start: NaiveDate,
    #[pyo3(get)]
    pub late_finish: NaiveDate,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl DatedTask {
    fn __repr__(&self) -> String {
        format!(
            "DatedTask(task_id={:?}, early={}..{}, late={}..{})",
            self.task_id, self.early_start, self.early_finish, self.late_start, self.late_finish
        )
    }
}

/// Convert a day offset to a date. Starts round down and finishes round up,
/// so a fractional task still occupies every day it touches.
fn offset_to_date(start: NaiveDate, offset: f64, round_up: bool) -> Option<NaiveDate> {
    let days = if round_up { offset.ceil() } else { offset.floor() };
    if !days.is_finite() {
        return None;
    }
    // Float noise can put a zero offset a hair below zero
    start.checked_add_days(Days::new(days.max(0.0) as u64))
}

impl CpmResult {
    /// Map every task's early/late window onto dates starting at `start`.
    pub fn project_dates(&self, start: NaiveDate) -> Result<Vec<DatedTask>, DateProjectionError> {
        self.tasks
            .iter()
            .map(|task| -> Result<DatedTask, DateProjectionError> {
                let convert = |offset: f64, round_up: bool| {
                    offset_to_date(start, offset, round_up).ok_or_else(|| {
                        DateProjectionError::OutOfRange {
                            task_id: task.id.clone(),
                            start,
                            offset,
                        }
                    })
                };

                Ok(DatedTask {
                    task_id: task.id.clone(),
                    early_start: convert(task.early_start, false)?,
                    early_finish: convert(task.early_finish, true)?,
                    late_start: convert(task.late_start, false)?,
                    late_finish: convert(task.late_finish, true)?,
                    is_critical: task.is_critical,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpm::calculate_cpm;
    use crate::models::Task;

    fn make_task(id: &str, duration: f64, deps: Vec<&str>) -> Task {
        Task::new(
            id.to_string(),
            id.to_string(),
            duration,
            deps.into_iter().map(String::from).collect(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_whole_day_offsets() {
        let tasks = vec![
            make_task("a", 2.0, vec![]),
            make_task("b", 5.0, vec!["a"]),
            make_task("c", 1.0, vec!["a"]),
        ];
        let result = calculate_cpm(&tasks).unwrap();
        let dated = result.project_dates(date(2025, 3, 1)).unwrap();

        assert_eq!(dated.len(), 3);
        assert_eq!(dated[1].early_start, date(2025, 3, 3));
        assert_eq!(dated[1].early_finish, date(2025, 3, 8));
        // c can slip four days: ls=6, lf=7
        assert_eq!(dated[2].late_start, date(2025, 3, 7));
        assert_eq!(dated[2].late_finish, date(2025, 3, 8));
        assert!(!dated[2].is_critical);
    }

    #[test]
    fn test_fractional_offsets_round_outward() {
        let tasks = vec![
            make_task("a", 1.5, vec![]),
            make_task("b", 1.0, vec!["a"]),
        ];
        let result = calculate_cpm(&tasks).unwrap();
        let dated = result.project_dates(date(2025, 1, 30)).unwrap();

        // a: 0..1.5 -> Jan 30..Feb 1; b: 1.5..2.5 -> Jan 31..Feb 2
        assert_eq!(dated[0].early_finish, date(2025, 2, 1));
        assert_eq!(dated[1].early_start, date(2025, 1, 31));
        assert_eq!(dated[1].early_finish, date(2025, 2, 2));
    }

    #[test]
    fn test_offset_beyond_calendar_fails() {
        let tasks = vec![make_task("forever", 1e15, vec![])];
        let result = calculate_cpm(&tasks).unwrap();

        let err = result.project_dates(date(2025, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            DateProjectionError::OutOfRange { ref task_id, .. } if task_id == "forever"
        ));
    }
}
