//! String interning for task ids.
//!
//! Task ids are assigned integers in insertion order, so an interned id is
//! also the task's position in the input list.

use rustc_hash::FxHashMap;

/// Interned task ID (u32 for compact storage and fast hashing).
pub type TaskIdInt = u32;

/// Maps task id strings to dense integers and back.
#[derive(Debug, Clone)]
pub struct TaskIdInterner {
    to_int: FxHashMap<String, TaskIdInt>,
    from_int: Vec<String>,
}

impl TaskIdInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string that must not have been seen before.
    ///
    /// Returns `None` if the string is already interned.
    pub fn intern_unique(&mut self, s: &str) -> Option<TaskIdInt> {
        if self.to_int.contains_key(s) {
            return None;
        }
        let id = self.from_int.len() as TaskIdInt;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        Some(id)
    }

    #[inline]
    pub fn get(&self, s: &str) -> Option<TaskIdInt> {
        self.to_int.get(s).copied()
    }

    #[inline]
    pub fn resolve(&self, id: TaskIdInt) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for TaskIdInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
