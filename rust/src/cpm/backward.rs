//! Backward pass: latest start and finish times.

use crate::interner::TaskIdInt;
use crate::log_passes;
use crate::logging::pass_line;

use super::graph::TaskGraph;
use super::types::TaskTiming;

/// Fill `late_start`/`late_finish` for every task, walking `order` in reverse.
///
/// Sinks must finish by `project_duration`; every other task must finish by
/// the earliest late start among its successors.
pub fn backward_pass(
    graph: &TaskGraph<'_>,
    order: &[TaskIdInt],
    timings: &mut [TaskTiming],
    project_duration: f64,
    verbosity: u8,
) {
    for &task_id in order.iter().rev() {
        let mut late_finish = project_duration;
        for &succ in graph.succs(task_id) {
            let required_finish = timings[succ as usize].late_start;
            if required_finish < late_finish {
                late_finish = required_finish;
            }
        }

        let late_start = late_finish - graph.duration(task_id);
        let timing = &mut timings[task_id as usize];
        timing.late_finish = late_finish;
        timing.late_start = late_start;

        log_passes!(
            verbosity,
            "{}",
            pass_line("backward", graph.name(task_id), late_start, late_finish)
        );
    }
}
