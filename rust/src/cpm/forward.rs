//! Forward pass: earliest start and finish times.

use crate::interner::TaskIdInt;
use crate::log_passes;
use crate::logging::pass_line;

use super::graph::TaskGraph;
use super::types::TaskTiming;

/// Fill `early_start`/`early_finish` for every task in `order`.
///
/// `order` must be topological. Returns the project duration, the largest
/// early finish (0 for an empty graph).
pub fn forward_pass(
    graph: &TaskGraph<'_>,
    order: &[TaskIdInt],
    timings: &mut [TaskTiming],
    verbosity: u8,
) -> f64 {
    let mut project_duration: f64 = 0.0;

    for &task_id in order {
        // Earliest start = latest finish among dependencies
        let mut early_start = 0.0;
        for &dep in graph.preds(task_id) {
            let dep_finish = timings[dep as usize].early_finish;
            if dep_finish > early_start {
                early_start = dep_finish;
            }
        }

        let early_finish = early_start + graph.duration(task_id);
        let timing = &mut timings[task_id as usize];
        timing.early_start = early_start;
        timing.early_finish = early_finish;

        project_duration = project_duration.max(early_finish);

        log_passes!(
            verbosity,
            "{}",
            pass_line("forward", graph.name(task_id), early_start, early_finish)
        );
    }

    project_duration
}
