//! Slack computation and critical path extraction.

use crate::interner::TaskIdInt;
use crate::log_debug;

use super::graph::TaskGraph;
use super::types::TaskTiming;

/// Derive total and free slack from the settled pass results.
///
/// Negative slack is left as computed: it can only come from a broken pass.
pub fn compute_slack(graph: &TaskGraph<'_>, timings: &mut [TaskTiming], project_duration: f64) {
    for task_id in graph.ids() {
        let next_start = graph
            .succs(task_id)
            .iter()
            .map(|&succ| timings[succ as usize].early_start)
            .fold(project_duration, f64::min);

        let timing = &mut timings[task_id as usize];
        timing.slack = timing.late_start - timing.early_start;
        timing.free_slack = next_start - timing.early_finish;

        debug_assert!(
            timing.slack >= -1e-9,
            "negative slack {} on task {}",
            timing.slack,
            graph.name(task_id)
        );
    }
}

/// Walk one critical path from a zero-slack sink back to a source.
///
/// The sink is the first critical sink in input order. At each step the
/// critical predecessor with the latest early finish is taken, with ties going
/// to the earlier input position. Returned in execution order.
pub fn extract_critical_path(
    graph: &TaskGraph<'_>,
    timings: &[TaskTiming],
    epsilon: f64,
    verbosity: u8,
) -> Vec<TaskIdInt> {
    if graph.is_empty() {
        return Vec::new();
    }
    let is_critical = |id: TaskIdInt| timings[id as usize].is_critical(epsilon);

    let Some(sink) = graph
        .ids()
        .find(|&id| graph.succs(id).is_empty() && is_critical(id))
    else {
        return Vec::new();
    };

    let mut path = vec![sink];
    let mut current = sink;

    loop {
        let mut best: Option<TaskIdInt> = None;
        // preds are in input order, so strict `>` keeps the earliest on ties
        for &pred in graph.preds(current) {
            if !is_critical(pred) {
                continue;
            }
            let finish = timings[pred as usize].early_finish;
            let better = match best {
                Some(b) => finish > timings[b as usize].early_finish,
                None => true,
            };
            if better {
                best = Some(pred);
            }
        }

        match best {
            Some(pred) => {
                log_debug!(
                    verbosity,
                    "[critical] {} <- {}",
                    graph.name(current),
                    graph.name(pred)
                );
                path.push(pred);
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
