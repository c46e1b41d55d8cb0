pub mod enums;
pub mod error;
pub mod task;
pub mod timer;

pub use enums::{Mode, Transition, UiMode};
pub use error::PomodoroError;
pub use task::{is_valid_task_text, Task, TaskList, TaskStats, PLACEHOLDER_TEXT};
pub use timer::{format_clock, parse_minutes, Durations, Timer, TimerEvent};
