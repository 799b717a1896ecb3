use crate::libs::task::Task;
use crate::msg_debug;
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures raised by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Description cannot be empty")]
    EmptyDescription,
}

/// Owner of all task records and the id allocation counter.
///
/// Ids are handed out in strictly increasing order starting at 1 and are
/// never reused, even after deletion. Because of that, ascending-key
/// iteration over the map is exactly insertion order.
#[derive(Debug)]
pub struct TaskStore {
    items: BTreeMap<u64, Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Creates a task from a description, allocating the next id.
    ///
    /// The description is trimmed before storage. Fails with
    /// [`StoreError::EmptyDescription`] when nothing remains after trimming;
    /// no id is consumed on failure.
    pub fn create(&mut self, description: &str) -> Result<Task, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        let task = Task::new(self.next_id, description);
        self.items.insert(task.id, task.clone());
        self.next_id += 1;
        msg_debug!("created task {}", task.id);

        Ok(task)
    }

    /// Looks up a task by id without side effects.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.items.get(&id)
    }

    /// Replaces the description of an existing task.
    ///
    /// Emptiness is checked before existence, so an empty description on a
    /// missing id still reports the validation error. Returns `Ok(false)`
    /// when the id is absent. `completed` and `id` are untouched.
    pub fn update(&mut self, id: u64, description: &str) -> Result<bool, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        match self.items.get_mut(&id) {
            Some(task) => {
                task.description = description.to_string();
                msg_debug!("updated task {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Marks a task as completed.
    ///
    /// Idempotent: completing an already-complete task still returns `true`.
    /// Returns `false` when the id is absent.
    pub fn complete(&mut self, id: u64) -> bool {
        match self.items.get_mut(&id) {
            Some(task) => {
                task.completed = true;
                msg_debug!("completed task {}", id);
                true
            }
            None => false,
        }
    }

    /// Removes a task, reporting whether it was present. Its id is not reused.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.items.remove(&id).is_some();
        if removed {
            msg_debug!("deleted task {}", id);
        }
        removed
    }

    /// All current tasks in insertion order.
    pub fn list(&self) -> Vec<&Task> {
        self.items.values().collect()
    }

    /// The id the next successful create will allocate.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
