use super::error::PomodoroError;
use crate::persistence::TaskStore;
use uuid::Uuid;

/// Text shown in an empty task input; never accepted as a task
pub const PLACEHOLDER_TEXT: &str = "Enter task...";

/// Opaque reference to a task in a `TaskList`
pub type TaskId = Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self::restore(text, false)
    }

    /// Rebuild a task read back from the store (gets a fresh id)
    pub fn restore(text: String, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed,
        }
    }
}

/// Returns true if `text` can be stored as a task. Text is kept exactly as
/// typed; only the empty string and the placeholder itself are rejected.
pub fn is_valid_task_text(text: &str) -> bool {
    !text.is_empty() && text != PLACEHOLDER_TEXT
}

/// Completed/total counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub completed: usize,
    pub total: usize,
}

/// Ordered task list with an optional current task.
///
/// When backed by a store, every mutation rewrites the store in full. Store
/// failures are logged and never surface to the caller.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    current: Option<TaskId>,
    store: Option<TaskStore>,
}

impl TaskList {
    /// Load from the store, starting empty if it is missing or unreadable
    pub fn open(store: TaskStore) -> Self {
        let tasks = match store.load() {
            Ok(tasks) => {
                log::info!("Loaded {} tasks from {}", tasks.len(), store.path().display());
                tasks
            }
            Err(e) => {
                log::warn!("Starting with an empty task list: {}", e);
                Vec::new()
            }
        };

        Self {
            tasks,
            current: None,
            store: Some(store),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn current_id(&self) -> Option<TaskId> {
        self.current
    }

    pub fn current_task(&self) -> Option<&Task> {
        let id = self.current?;
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task. Empty and placeholder text are ignored.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        if !is_valid_task_text(text) {
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Mark a task as current. Marking current also marks it completed.
    pub fn set_current(&mut self, id: TaskId) -> Result<(), PomodoroError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(PomodoroError::NotFound(id))?;

        task.completed = true;
        self.current = Some(id);
        self.persist();
        Ok(())
    }

    /// Remove a task, clearing the current task if it was the one removed
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, PomodoroError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(PomodoroError::NotFound(id))?;

        let task = self.tasks.remove(index);
        if self.current == Some(id) {
            self.current = None;
        }
        self.persist();
        Ok(task)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats {
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            total: self.tasks.len(),
        }
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.tasks) {
                log::warn!("Failed to save tasks: {}", e);
            }
        }
    }
}
