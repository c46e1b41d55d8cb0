use crate::domain::{is_valid_task_text, PomodoroError, Task};
use crate::persistence::{atomic_write, read_file};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Legacy color marking a completed task (pending tasks were "orange")
pub const COMPLETED_COLOR: &str = "green";

/// One entry of tasks.json.
///
/// Written as `{"text", "completed"}`. Older files stored completion as a
/// color (`"orange"` / `"green"`); that field is still read but never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskRecord {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(default, skip_serializing)]
    color: Option<String>,
}

impl TaskRecord {
    fn is_completed(&self) -> bool {
        match (self.completed, self.color.as_deref()) {
            (Some(completed), _) => completed,
            (None, Some(color)) => color == COMPLETED_COLOR,
            (None, None) => false,
        }
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            completed: Some(task.completed),
            color: None,
        }
    }
}

/// Flat JSON file holding the whole task list
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all tasks. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Task>, PomodoroError> {
        let content = read_file(&self.path)
            .map_err(|e| PomodoroError::persistence(&self.path, format!("{:#}", e)))?;

        let Some(content) = content else {
            return Ok(Vec::new());
        };

        let records: Vec<TaskRecord> = serde_json::from_str(&content)
            .map_err(|e| PomodoroError::persistence(&self.path, e))?;

        let tasks = records
            .into_iter()
            .filter(|record| {
                let valid = is_valid_task_text(&record.text);
                if !valid {
                    log::warn!("Skipping stored task with invalid text: {:?}", record.text);
                }
                valid
            })
            .map(|record| {
                let completed = record.is_completed();
                Task::restore(record.text, completed)
            })
            .collect();

        Ok(tasks)
    }

    /// Rewrite the whole file
    pub fn save(&self, tasks: &[Task]) -> Result<(), PomodoroError> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| PomodoroError::persistence(&self.path, e))?;
        atomic_write(&self.path, &json)
            .map_err(|e| PomodoroError::persistence(&self.path, format!("{:#}", e)))
    }
}
