//! Validated, indexed dependency graph.

use std::collections::VecDeque;

use crate::interner::{TaskIdInt, TaskIdInterner};
use crate::models::Task;

use super::error::CpmError;

/// Dependency graph over a task slice.
///
/// Task integers equal input positions. Both adjacency lists are sorted by
/// input position and free of repeats.
#[derive(Debug)]
pub struct TaskGraph<'a> {
    tasks: &'a [Task],
    index: TaskIdInterner,
    /// Predecessors (dependencies) of each task.
    preds: Vec<Vec<TaskIdInt>>,
    /// Successors (dependents) of each task.
    succs: Vec<Vec<TaskIdInt>>,
}

impl<'a> TaskGraph<'a> {
    /// Validate the task set and build predecessor/successor lists.
    ///
    /// Durations and id uniqueness are checked task by task in input order,
    /// then dependency references. Cycles are only found by
    /// [`TaskGraph::topological_order`].
    pub fn build(tasks: &'a [Task]) -> Result<Self, CpmError> {
        let mut index = TaskIdInterner::with_capacity(tasks.len());
        for task in tasks {
            if !task.duration.is_finite() || task.duration < 0.0 {
                return Err(CpmError::InvalidDuration {
                    task_id: task.id.clone(),
                    duration: task.duration,
                });
            }
            if index.intern_unique(&task.id).is_none() {
                return Err(CpmError::DuplicateTask {
                    id: task.id.clone(),
                });
            }
        }

        let n = tasks.len();
        let mut preds: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut succs: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];

        for (idx, task) in tasks.iter().enumerate() {
            for dep_id in &task.dependencies {
                let dep = index
                    .get(dep_id)
                    .ok_or_else(|| CpmError::UnknownDependency {
                        task_id: task.id.clone(),
                        dependency_id: dep_id.clone(),
                    })?;
                preds[idx].push(dep);
            }
            preds[idx].sort_unstable();
            preds[idx].dedup();

            // idx grows monotonically, so every succs list stays sorted
            for &dep in &preds[idx] {
                succs[dep as usize].push(idx as TaskIdInt);
            }
        }

        Ok(Self {
            tasks,
            index,
            preds,
            succs,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn task(&self, id: TaskIdInt) -> &'a Task {
        &self.tasks[id as usize]
    }

    #[inline]
    pub fn duration(&self, id: TaskIdInt) -> f64 {
        self.tasks[id as usize].duration
    }

    #[inline]
    pub fn name(&self, id: TaskIdInt) -> &str {
        self.index.resolve(id).unwrap_or_default()
    }

    #[inline]
    pub fn preds(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.preds[id as usize]
    }

    #[inline]
    pub fn succs(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.succs[id as usize]
    }

    /// All task integers in input order.
    pub fn ids(&self) -> impl Iterator<Item = TaskIdInt> {
        (0..self.tasks.len()).map(|i| i as TaskIdInt)
    }

    /// Order tasks so every dependency precedes its dependents (Kahn's algorithm).
    ///
    /// Sources are seeded in input order, which makes the order deterministic.
    pub fn topological_order(&self) -> Result<Vec<TaskIdInt>, CpmError> {
        let n = self.len();
        let mut in_degree: Vec<usize> = self.preds.iter().map(Vec::len).collect();

        let mut queue: VecDeque<TaskIdInt> = self
            .ids()
            .filter(|&id| in_degree[id as usize] == 0)
            .collect();
        let mut order: Vec<TaskIdInt> = Vec::with_capacity(n);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &succ in self.succs(id) {
                let degree = &mut in_degree[succ as usize];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() != n {
            return Err(CpmError::CyclicDependency {
                cycle: self.find_cycle(&in_degree),
            });
        }

        Ok(order)
    }

    /// Recover one cycle from the tasks Kahn's algorithm could not release.
    ///
    /// Every unreleased task still has an unreleased predecessor, so walking
    /// predecessors from any of them must revisit a task.
    fn find_cycle(&self, in_degree: &[usize]) -> Vec<String> {
        let Some(start) = self.ids().find(|&id| in_degree[id as usize] > 0) else {
            return Vec::new();
        };

        let mut position: Vec<Option<usize>> = vec![None; self.len()];
        let mut walk: Vec<TaskIdInt> = Vec::new();
        let mut current = start;

        loop {
            if let Some(pos) = position[current as usize] {
                // Walk followed task -> dependency; flip to execution order
                return walk[pos..]
                    .iter()
                    .rev()
                    .map(|&id| self.name(id).to_string())
                    .collect();
            }
            position[current as usize] = Some(walk.len());
            walk.push(current);

            match self
                .preds(current)
                .iter()
                .copied()
                .find(|&p| in_degree[p as usize] > 0)
            {
                Some(pred) => current = pred,
                None => return vec![self.name(current).to_string()],
            }
        }
    }
}
