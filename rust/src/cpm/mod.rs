//! Critical Path Method scheduling.
//!
//! A task list is validated into a [`TaskGraph`], ordered topologically, then
//! run through a forward pass (early times), a backward pass (late times) and
//! slack/critical path extraction. Every call builds its own graph; nothing is
//! shared between calls.

mod backward;
mod cache;
mod error;
mod extraction;
mod forward;
mod graph;
mod types;

pub use cache::CpmMemo;
pub use error::CpmError;
pub use graph::TaskGraph;
pub use types::TaskTiming;

use crate::config::CpmConfig;
use crate::models::{CpmResult, ScheduledTask, Task};
use crate::{log_debug, log_summary};

use backward::backward_pass;
use extraction::{compute_slack, extract_critical_path};
use forward::forward_pass;

/// Run CPM over `tasks` with the default configuration.
pub fn calculate_cpm(tasks: &[Task]) -> Result<CpmResult, CpmError> {
    calculate_cpm_with_config(tasks, &CpmConfig::default())
}

/// Run CPM over `tasks`.
///
/// Validation (durations, duplicate ids, unknown dependencies, cycles) happens
/// before any pass; on error nothing else is computed.
pub fn calculate_cpm_with_config(
    tasks: &[Task],
    config: &CpmConfig,
) -> Result<CpmResult, CpmError> {
    let verbosity = config.verbosity;

    let graph = TaskGraph::build(tasks)?;
    let order = graph.topological_order()?;
    log_debug!(
        verbosity,
        "[cpm] topological order: {:?}",
        order.iter().map(|&id| graph.name(id)).collect::<Vec<_>>()
    );

    let mut timings = vec![TaskTiming::default(); graph.len()];
    let project_duration = forward_pass(&graph, &order, &mut timings, verbosity);
    backward_pass(&graph, &order, &mut timings, project_duration, verbosity);
    compute_slack(&graph, &mut timings, project_duration);

    let critical_path: Vec<String> =
        extract_critical_path(&graph, &timings, config.slack_epsilon, verbosity)
            .into_iter()
            .map(|id| graph.name(id).to_string())
            .collect();

    let scheduled: Vec<ScheduledTask> = graph
        .ids()
        .map(|id| {
            schedule_task(graph.task(id), &timings[id as usize], config.slack_epsilon)
        })
        .collect();
    let critical_tasks: Vec<ScheduledTask> =
        scheduled.iter().filter(|t| t.is_critical).cloned().collect();

    log_summary!(
        verbosity,
        "[cpm] {} tasks, project duration {}, critical path: {}",
        scheduled.len(),
        project_duration,
        critical_path.join(" -> ")
    );

    Ok(CpmResult {
        tasks: scheduled,
        critical_path,
        project_duration,
        critical_tasks,
    })
}

fn schedule_task(task: &Task, timing: &TaskTiming, epsilon: f64) -> ScheduledTask {
    ScheduledTask {
        id: task.id.clone(),
        title: task.title.clone(),
        duration: task.duration,
        dependencies: task.dependencies.clone(),
        early_start: timing.early_start,
        early_finish: timing.early_finish,
        late_start: timing.late_start,
        late_finish: timing.late_finish,
        slack: timing.slack,
        free_slack: timing.free_slack,
        is_critical: timing.is_critical(epsilon),
    }
}
