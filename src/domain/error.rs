use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the timer, task list, store and notifier
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Non-positive or non-numeric duration input. State is left unchanged.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Stale task reference
    #[error("task not found: {0}")]
    NotFound(Uuid),

    #[error("task store unavailable at {}: {reason}", path.display())]
    PersistenceUnavailable { path: PathBuf, reason: String },

    #[error("notifier unavailable: {0}")]
    NotifierUnavailable(String),
}

impl PomodoroError {
    pub fn persistence(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PomodoroError::PersistenceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PomodoroError::InvalidSettings("work must be positive".to_string());
        assert_eq!(err.to_string(), "invalid settings: work must be positive");

        let err = PomodoroError::persistence("/tmp/tasks.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "task store unavailable at /tmp/tasks.json: permission denied"
        );
    }
}
