use crate::clock::{Clock, SystemClock};
use crate::models::{Task, TaskId};
use crate::progress::Progress;

/// Session-scoped task state: the active list and the completion history.
///
/// Invalid input never fails here. Blank descriptions and out-of-range
/// positions or unknown ids leave the store untouched and return `None`,
/// so callers can decide whether anything is worth acknowledging.
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<Task>,
    next_id: u64,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> TaskStore {
        TaskStore::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> TaskStore {
        TaskStore {
            active: Vec::new(),
            completed: Vec::new(),
            next_id: 1,
            clock: Box::new(clock),
        }
    }

    /// Tasks still to do, in display order.
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Completed tasks, oldest completion first.
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.completed.len(), self.active.len())
    }

    /// Appends a new active task.
    ///
    /// Text that is empty after trimming creates nothing. The description is
    /// otherwise kept exactly as given.
    pub fn add_task(&mut self, description: &str) -> Option<&Task> {
        if description.trim().is_empty() {
            tracing::debug!("ignoring blank task description");
            return None;
        }
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.active.push(Task {
            id,
            description: description.to_string(),
            created_at: self.clock.now(),
            completed_at: None,
        });
        tracing::debug!(%id, active = self.active.len(), "task added");
        self.active.last()
    }

    /// Deletes the active task at `index` without recording it as completed.
    pub fn remove_task(&mut self, index: usize) -> Option<Task> {
        if index >= self.active.len() {
            tracing::debug!(index, active = self.active.len(), "remove ignored, index out of range");
            return None;
        }
        let task = self.active.remove(index);
        tracing::debug!(id = %task.id, index, "task removed");
        Some(task)
    }

    /// Moves the active task at `index` to the end of the history,
    /// stamping its completion time.
    pub fn complete_task(&mut self, index: usize) -> Option<&Task> {
        if index >= self.active.len() {
            tracing::debug!(index, active = self.active.len(), "complete ignored, index out of range");
            return None;
        }
        let mut task = self.active.remove(index);
        task.completed_at = Some(self.clock.now());
        tracing::debug!(id = %task.id, index, "task completed");
        self.completed.push(task);
        self.completed.last()
    }

    /// Drops every active task. The history is left alone.
    ///
    /// Returns how many tasks were dropped.
    pub fn clear_active(&mut self) -> usize {
        let dropped = self.active.len();
        self.active.clear();
        tracing::debug!(dropped, kept_history = self.completed.len(), "active tasks cleared");
        dropped
    }

    /// Current position of an active task.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.active.iter().position(|t| t.id == id)
    }

    /// Looks a task up in either list.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.active.iter().chain(self.completed.iter()).find(|t| t.id == id)
    }

    /// Like [`TaskStore::remove_task`], addressed by id instead of position.
    pub fn remove_by_id(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        self.remove_task(index)
    }

    /// Like [`TaskStore::complete_task`], addressed by id instead of position.
    pub fn complete_by_id(&mut self, id: TaskId) -> Option<&Task> {
        let index = self.position(id)?;
        self.complete_task(index)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}
