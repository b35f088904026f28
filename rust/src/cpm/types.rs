//! Per-task timing produced by the passes.

/// Timing information for one task.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub early_start: f64,
    /// Earliest possible finish time (from forward pass).
    pub early_finish: f64,
    /// Latest allowable start time (from backward pass).
    pub late_start: f64,
    /// Latest allowable finish time (from backward pass).
    pub late_finish: f64,
    /// Slack = late_start - early_start.
    pub slack: f64,
    /// Slack before the earliest direct successor would be pushed back.
    pub free_slack: f64,
}

impl TaskTiming {
    /// Zero slack within `epsilon`. A negative or NaN epsilon counts as 0.
    pub fn is_critical(&self, epsilon: f64) -> bool {
        self.slack.abs() <= epsilon.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            early_start: 0.0,
            early_finish: 5.0,
            late_start: 0.0,
            late_finish: 5.0,
            slack: 0.0,
            free_slack: 0.0,
        };
        assert!(timing.is_critical(1e-9));
        assert!(timing.is_critical(0.0));

        let timing_with_slack = TaskTiming {
            late_start: 2.0,
            late_finish: 7.0,
            slack: 2.0,
            ..timing
        };
        assert!(!timing_with_slack.is_critical(1e-9));
    }

    #[test]
    fn test_negative_epsilon_treated_as_exact() {
        let timing = TaskTiming::default();
        assert!(timing.is_critical(-1.0));
        assert!(timing.is_critical(f64::NAN));

        let timing = TaskTiming {
            slack: 0.5,
            ..Default::default()
        };
        assert!(!timing.is_critical(-1.0));
    }

    #[test]
    fn test_rounding_noise_within_epsilon() {
        let timing = TaskTiming {
            slack: 0.1 + 0.2 - 0.3,
            ..Default::default()
        };
        assert!(timing.is_critical(1e-9));
        assert!(!timing.is_critical(0.0));
    }
}
