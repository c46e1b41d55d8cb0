use super::enums::{Mode, Transition};
use super::error::PomodoroError;

/// Remaining seconds in a Work interval at which the posture reminder fires
pub const REMINDER_THRESHOLD_SECS: u32 = 15 * 60;

/// Every Nth completed Work interval is followed by a long break
pub const LONG_BREAK_EVERY: u32 = 4;

/// Configured interval lengths in seconds. Every value is > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    work: u32,
    short_break: u32,
    long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: 25 * 60,
            short_break: 5 * 60,
            long_break: 15 * 60,
        }
    }
}

impl Durations {
    /// Build durations from seconds, rejecting anything that is not a positive u32
    pub fn new(work: i64, short_break: i64, long_break: i64) -> Result<Self, PomodoroError> {
        Ok(Self {
            work: positive_secs("work", work)?,
            short_break: positive_secs("short break", short_break)?,
            long_break: positive_secs("long break", long_break)?,
        })
    }

    pub fn get(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    pub fn work(&self) -> u32 {
        self.work
    }

    pub fn short_break(&self) -> u32 {
        self.short_break
    }

    pub fn long_break(&self) -> u32 {
        self.long_break
    }
}

fn positive_secs(name: &str, value: i64) -> Result<u32, PomodoroError> {
    if value <= 0 {
        return Err(PomodoroError::InvalidSettings(format!(
            "{} duration must be positive, got {}",
            name, value
        )));
    }
    u32::try_from(value).map_err(|_| {
        PomodoroError::InvalidSettings(format!("{} duration is too large: {}", name, value))
    })
}

/// Convert whole minutes as typed into the settings form to seconds.
///
/// Only the number format is checked here; `Timer::apply_settings` rejects
/// values that are not positive.
pub fn parse_minutes(work: &str, short_break: &str, long_break: &str) -> Result<(i64, i64, i64), PomodoroError> {
    Ok((
        minutes_to_secs("work", work)?,
        minutes_to_secs("short break", short_break)?,
        minutes_to_secs("long break", long_break)?,
    ))
}

fn minutes_to_secs(name: &str, raw: &str) -> Result<i64, PomodoroError> {
    let minutes: i64 = raw.trim().parse().map_err(|_| {
        PomodoroError::InvalidSettings(format!("{} minutes is not a number: {:?}", name, raw))
    })?;
    minutes.checked_mul(60).ok_or_else(|| {
        PomodoroError::InvalidSettings(format!("{} minutes is too large: {}", name, minutes))
    })
}

/// Something the state machine wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Fifteen minutes left in a Work interval
    Reminder,
    /// An interval finished and the mode changed
    Completed(Transition),
}

/// Pomodoro countdown state machine
///
/// Invariants: `remaining <= durations.get(mode)`, and the timer is never
/// running while `remaining == 0`.
#[derive(Debug, Clone)]
pub struct Timer {
    mode: Mode,
    remaining: u32,
    running: bool,
    completed_work_cycles: u32,
    durations: Durations,
    break_reminders: bool,
    reminder_shown: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

impl Timer {
    /// Fresh timer at the start of a Work interval
    pub fn new(durations: Durations) -> Self {
        Self {
            mode: Mode::Work,
            remaining: durations.get(Mode::Work),
            running: false,
            completed_work_cycles: 0,
            durations,
            break_reminders: true,
            reminder_shown: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.completed_work_cycles
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn break_reminders(&self) -> bool {
        self.break_reminders
    }

    pub fn set_break_reminders(&mut self, enabled: bool) {
        self.break_reminders = enabled;
    }

    /// Start counting down. No-op if already running or nothing is left.
    pub fn start(&mut self) {
        if !self.running && self.remaining > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and rewind the current interval to its full length
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.durations.get(self.mode);
        if self.mode == Mode::Work {
            self.reminder_shown = false;
        }
    }

    /// Advance one second. Does nothing unless the timer is running.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running || self.remaining == 0 {
            return events;
        }

        if !self.mode.is_break()
            && self.remaining == REMINDER_THRESHOLD_SECS
            && self.break_reminders
            && !self.reminder_shown
        {
            self.reminder_shown = true;
            events.push(TimerEvent::Reminder);
        }

        self.remaining -= 1;

        if self.remaining == 0 {
            events.push(TimerEvent::Completed(self.complete()));
        }

        events
    }

    /// Finish the current interval and move to the next mode
    pub fn complete(&mut self) -> Transition {
        self.running = false;

        let transition = match self.mode {
            Mode::Work => {
                self.completed_work_cycles += 1;
                if self.completed_work_cycles % LONG_BREAK_EVERY == 0 {
                    Transition::WorkToLongBreak
                } else {
                    Transition::WorkToShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Transition::BreakToWork,
        };

        self.mode = transition.next_mode();
        self.remaining = self.durations.get(self.mode);
        self.reminder_shown = false;

        transition
    }

    /// Validate and apply new durations in seconds. Leaves state untouched on error.
    pub fn apply_settings(&mut self, work: i64, short_break: i64, long_break: i64) -> Result<(), PomodoroError> {
        let durations = Durations::new(work, short_break, long_break)?;
        self.durations = durations;
        self.remaining = durations.get(self.mode);
        if self.mode == Mode::Work {
            self.reminder_shown = false;
        }
        Ok(())
    }

    /// Fraction of the current interval already elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        let total = self.durations.get(self.mode) as f64;
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - self.remaining as f64 / total).clamp(0.0, 1.0)
    }
}

/// Format seconds as "MM:SS"
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut Timer, n: u32) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(timer.tick());
        }
        events
    }

    fn finish_interval(timer: &mut Timer) -> Vec<TimerEvent> {
        timer.start();
        let n = timer.remaining_seconds();
        run_ticks(timer, n)
    }

    #[test]
    fn test_defaults() {
        let timer = Timer::default();
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_work_cycles(), 0);
        assert_eq!(timer.durations().short_break(), 300);
        assert_eq!(timer.durations().long_break(), 900);
    }

    #[test]
    fn test_start_pause() {
        let mut timer = Timer::default();
        timer.start();
        assert!(timer.is_running());
        timer.start();
        assert!(timer.is_running());

        timer.pause();
        assert!(!timer.is_running());
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = Timer::default();
        assert!(timer.tick().is_empty());
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_reset_restores_duration_in_every_mode() {
        let durations = Durations::new(120, 30, 60).unwrap();
        let mut timer = Timer::new(durations);

        for _ in 0..3 {
            timer.start();
            run_ticks(&mut timer, 5);
            timer.reset();
            assert!(!timer.is_running());
            assert_eq!(timer.remaining_seconds(), durations.get(timer.mode()));
            timer.complete();
        }
    }

    #[test]
    fn test_full_work_interval_completes_once() {
        let mut timer = Timer::new(Durations::new(10, 3, 5).unwrap());
        timer.start();

        let events = run_ticks(&mut timer, 10);
        let completions: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Completed(_)))
            .collect();

        assert_eq!(completions.len(), 1);
        assert_eq!(timer.completed_work_cycles(), 1);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 3);
        assert!(!timer.is_running());

        // Further ticks do nothing until restarted
        assert!(run_ticks(&mut timer, 5).is_empty());
    }

    #[test]
    fn test_one_second_interval_completes_on_first_tick() {
        let mut timer = Timer::new(Durations::new(1, 1, 1).unwrap());
        timer.start();
        timer.tick();
        // Completion already resynced remaining to the break length
        assert_eq!(timer.remaining_seconds(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_long_break_every_fourth_cycle() {
        let mut timer = Timer::new(Durations::new(2, 1, 1).unwrap());
        let mut work_transitions = Vec::new();

        for _ in 0..8 {
            let events = finish_interval(&mut timer);
            if let Some(TimerEvent::Completed(t)) = events.last() {
                work_transitions.push(*t);
            }
            finish_interval(&mut timer);
        }

        assert_eq!(timer.completed_work_cycles(), 8);
        assert_eq!(
            work_transitions,
            vec![
                Transition::WorkToShortBreak,
                Transition::WorkToShortBreak,
                Transition::WorkToShortBreak,
                Transition::WorkToLongBreak,
                Transition::WorkToShortBreak,
                Transition::WorkToShortBreak,
                Transition::WorkToShortBreak,
                Transition::WorkToLongBreak,
            ]
        );
    }

    #[test]
    fn test_break_returns_to_work() {
        let mut timer = Timer::default();
        timer.complete();
        assert_eq!(timer.mode(), Mode::ShortBreak);
        let transition = timer.complete();
        assert_eq!(transition, Transition::BreakToWork);
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.completed_work_cycles(), 1);
    }

    #[test]
    fn test_apply_settings_rejects_non_positive() {
        let mut timer = Timer::default();
        timer.start();
        run_ticks(&mut timer, 10);

        for (w, s, l) in [(0, 300, 900), (1500, -1, 900), (1500, 300, 0), (-60, -60, -60)] {
            let result = timer.apply_settings(w, s, l);
            assert!(matches!(result, Err(PomodoroError::InvalidSettings(_))));
            assert_eq!(timer.durations(), Durations::default());
            assert_eq!(timer.remaining_seconds(), 1490);
        }
    }

    #[test]
    fn test_apply_settings_resyncs_remaining() {
        let mut timer = Timer::default();
        timer.complete();
        timer.apply_settings(600, 120, 240).unwrap();
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 120);
        assert_eq!(timer.durations().work(), 600);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("50", " 10 ", "20").unwrap(), (3000, 600, 1200));
        // Sign is checked when the settings are applied
        assert_eq!(parse_minutes("25", "5", "-15").unwrap(), (1500, 300, -900));

        assert!(parse_minutes("abc", "5", "15").is_err());
        assert!(parse_minutes("25", "", "15").is_err());
        assert!(parse_minutes("2.5", "5", "15").is_err());
    }

    #[test]
    fn test_reminder_fires_once_then_short_break() {
        let mut timer = Timer::default();
        timer.start();

        let events = run_ticks(&mut timer, 900);
        assert_eq!(events, vec![TimerEvent::Reminder]);
        assert_eq!(timer.mode(), Mode::Work);

        let events = run_ticks(&mut timer, 600);
        assert_eq!(
            events,
            vec![TimerEvent::Completed(Transition::WorkToShortBreak)]
        );
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.completed_work_cycles(), 1);
    }

    #[test]
    fn test_reminder_not_repeated_after_pause() {
        let mut timer = Timer::default();
        timer.start();
        run_ticks(&mut timer, 601);
        timer.pause();
        timer.start();
        let events = run_ticks(&mut timer, 100);
        assert!(events.is_empty());
    }

    #[test]
    fn test_reminder_rearmed_for_next_work_interval() {
        let mut timer = Timer::default();
        let events = finish_interval(&mut timer);
        assert_eq!(events.first(), Some(&TimerEvent::Reminder));

        finish_interval(&mut timer);
        assert_eq!(timer.mode(), Mode::Work);

        let events = finish_interval(&mut timer);
        assert_eq!(events.first(), Some(&TimerEvent::Reminder));
    }

    #[test]
    fn test_reminder_disabled() {
        let mut timer = Timer::default();
        timer.set_break_reminders(false);
        let events = finish_interval(&mut timer);
        assert_eq!(
            events,
            vec![TimerEvent::Completed(Transition::WorkToShortBreak)]
        );
    }

    #[test]
    fn test_no_reminder_during_breaks() {
        let mut timer = Timer::new(Durations::new(1500, 1200, 1200).unwrap());
        timer.complete();
        let events = finish_interval(&mut timer);
        assert_eq!(events, vec![TimerEvent::Completed(Transition::BreakToWork)]);
    }

    #[test]
    fn test_progress() {
        let mut timer = Timer::new(Durations::new(100, 10, 10).unwrap());
        assert_eq!(timer.progress(), 0.0);
        timer.start();
        run_ticks(&mut timer, 25);
        assert!((timer.progress() - 0.25).abs() < f64::EPSILON);
        run_ticks(&mut timer, 74);
        assert!((timer.progress() - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(6000), "100:00");
    }
}
