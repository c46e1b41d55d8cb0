/// Timer interval kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Display label for the mode
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Mode::Work)
    }
}

/// A mode change produced by an interval reaching zero (or being skipped)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    WorkToShortBreak,
    WorkToLongBreak,
    BreakToWork,
}

impl Transition {
    /// Mode the timer is in after this transition
    pub fn next_mode(&self) -> Mode {
        match self {
            Transition::WorkToShortBreak => Mode::ShortBreak,
            Transition::WorkToLongBreak => Mode::LongBreak,
            Transition::BreakToWork => Mode::Work,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Transition::WorkToShortBreak => "Time's up!",
            Transition::WorkToLongBreak => "Great job!",
            Transition::BreakToWork => "Break's over",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Transition::WorkToShortBreak => "Take a short break!",
            Transition::WorkToLongBreak => {
                "You've completed 4 pomodoros! Time for a long break."
            }
            Transition::BreakToWork => "Time to get back to work!",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingSettings,
}
