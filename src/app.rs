use crate::domain::{
    parse_minutes, Durations, PomodoroError, TaskList, TaskStats, Timer, TimerEvent, UiMode,
};
use crate::notifications::{NotifyEvent, Notifier};
use crate::persistence::{load_settings, AppSettings, TaskStore, SETTINGS_FILE_NAME, TASKS_FILE_NAME};
use crate::ticker::SecondTicker;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Message box shown over the main view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub title: String,
    pub message: String,
}

/// Input form state for adding a task
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
}

/// Settings form state (durations typed in minutes)
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub work: String,
    pub short_break: String,
    pub long_break: String,
    pub editing_field: usize, // 0 = work, 1 = short break, 2 = long break
}

impl SettingsFormState {
    fn from_durations(durations: Durations) -> Self {
        Self {
            work: (durations.work() / 60).to_string(),
            short_break: (durations.short_break() / 60).to_string(),
            long_break: (durations.long_break() / 60).to_string(),
            editing_field: 0,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            0 => &mut self.work,
            1 => &mut self.short_break,
            _ => &mut self.long_break,
        }
    }
}

/// Main application state
pub struct AppState {
    pub timer: Timer,
    pub tasks: TaskList,
    pub settings: AppSettings,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub modals: VecDeque<ModalState>,
    pub input_form: Option<InputFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub ticker: SecondTicker,
    pub needs_save: bool,
    notifier: Notifier,
    settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(
        tasks: TaskList,
        settings: AppSettings,
        notifier: Notifier,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let mut timer = Timer::new(settings.durations());
        timer.set_break_reminders(settings.break_reminders);

        Self {
            timer,
            tasks,
            settings,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            modals: VecDeque::new(),
            input_form: None,
            settings_form: None,
            ticker: SecondTicker::default(),
            needs_save: false,
            notifier,
            settings_path,
        }
    }

    /// Load tasks and settings from the data directory.
    ///
    /// Without a data directory everything lives in memory. An unreadable
    /// directory degrades the same way: files that cannot be read start
    /// empty and failed saves are only logged.
    pub fn load(data_dir: Option<&Path>) -> Self {
        let Some(dir) = data_dir else {
            log::warn!("No data directory, tasks and settings will not be saved");
            let settings = AppSettings::default();
            let notifier = Notifier::from_settings(&settings);
            return Self::new(TaskList::default(), settings, notifier, None);
        };

        let tasks = TaskList::open(TaskStore::new(dir.join(TASKS_FILE_NAME)));

        let settings_path = dir.join(SETTINGS_FILE_NAME);
        let settings = match load_settings(&settings_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {:#}", e);
                AppSettings::default()
            }
        };

        let notifier = Notifier::from_settings(&settings);
        log::info!("Alert channels: {:?}", notifier.channels());
        Self::new(tasks, settings, notifier, Some(settings_path))
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.timer.start();
        self.sync_ticker(now);
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
        self.ticker.cancel();
    }

    /// Space bar: start when stopped, pause when running
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause_timer();
        } else {
            self.start_timer(now);
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.ticker.cancel();
    }

    /// End the current interval right away
    pub fn skip_interval(&mut self) {
        let transition = self.timer.complete();
        self.ticker.cancel();
        self.handle_timer_event(TimerEvent::Completed(transition));
    }

    /// Feed elapsed whole seconds to the timer
    pub fn tick(&mut self, now: Instant) {
        if !self.ticker.is_active() {
            return;
        }

        let due = self.ticker.due_ticks(now);
        for _ in 0..due {
            if !self.timer.is_running() {
                break;
            }
            for event in self.timer.tick() {
                self.handle_timer_event(event);
            }
        }

        if !self.timer.is_running() {
            self.ticker.cancel();
        }
    }

    fn sync_ticker(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.ticker.start(now);
        } else {
            self.ticker.cancel();
        }
    }

    fn handle_timer_event(&mut self, event: TimerEvent) {
        if let TimerEvent::Completed(transition) = event {
            log::info!(
                "Interval complete, now {} (work cycles: {})",
                transition.next_mode().label(),
                self.timer.completed_work_cycles()
            );
        }
        self.dispatch(event.into());
    }

    /// Show the event in a modal and ask the notifier for an alert
    fn dispatch(&mut self, event: NotifyEvent) {
        self.push_modal(event.title(), event.body());
        let outcome = self.notifier.alert(&event);
        log::debug!("{:?} -> {:?}", event, outcome);
    }

    /// Flip break reminders on or off and remember the choice
    pub fn toggle_break_reminders(&mut self) {
        let enabled = !self.timer.break_reminders();
        self.timer.set_break_reminders(enabled);
        self.settings.break_reminders = enabled;
        self.needs_save = true;
        log::info!("Break reminders {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn open_settings_form(&mut self) {
        self.settings_form = Some(SettingsFormState::from_durations(self.timer.durations()));
        self.ui_mode = UiMode::EditingSettings;
    }

    pub fn settings_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % 3;
        }
    }

    pub fn settings_form_prev_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 2) % 3;
        }
    }

    pub fn settings_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.settings_form {
            form.field_mut().push(c);
        }
    }

    pub fn settings_form_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.field_mut().pop();
        }
    }

    /// Validate the form and apply it. An invalid form stays open.
    pub fn submit_settings_form(&mut self) {
        let Some(form) = &self.settings_form else {
            return;
        };

        let result = match parse_minutes(&form.work, &form.short_break, &form.long_break) {
            Ok((work, short_break, long_break)) => self.apply_settings(work, short_break, long_break),
            Err(e) => {
                self.dispatch(NotifyEvent::SettingsInvalid);
                Err(e)
            }
        };

        match result {
            Ok(()) => {
                self.settings_form = None;
                self.ui_mode = UiMode::Normal;
            }
            Err(e) => log::info!("Rejected settings: {}", e),
        }
    }

    pub fn cancel_settings_form(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Apply new durations in seconds. On error nothing changes and the
    /// user is told the input was invalid.
    pub fn apply_settings(&mut self, work: i64, short_break: i64, long_break: i64) -> Result<(), PomodoroError> {
        if let Err(e) = self.timer.apply_settings(work, short_break, long_break) {
            self.dispatch(NotifyEvent::SettingsInvalid);
            return Err(e);
        }

        let durations = self.timer.durations();
        self.settings.set_durations(durations);
        self.needs_save = true;
        log::info!(
            "Durations set to {}s / {}s / {}s",
            durations.work(),
            durations.short_break(),
            durations.long_break()
        );
        self.dispatch(NotifyEvent::SettingsApplied);
        Ok(())
    }

    /// Save settings.json. Failures are logged, never returned.
    pub fn save_settings(&mut self) {
        if let Some(path) = &self.settings_path {
            if let Err(e) = crate::persistence::save_settings(path, &self.settings) {
                log::warn!("Failed to save settings to {}: {:#}", path.display(), e);
            }
        }
        self.needs_save = false;
    }

    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Submit input form and create the task (empty input is ignored)
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.add_task(&form.text);
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Add a task directly (for the CLI and tests)
    pub fn add_task(&mut self, text: &str) {
        if self.tasks.add_task(text).is_some() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Mark the selected task as current (and completed)
    pub fn set_current_selected(&mut self) {
        let Some(id) = self.tasks.get(self.selected_index).map(|t| t.id) else {
            return;
        };
        if let Err(e) = self.tasks.set_current(id) {
            log::warn!("Ignoring set-current: {}", e);
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        let Some(id) = self.tasks.get(self.selected_index).map(|t| t.id) else {
            return;
        };
        if let Err(e) = self.tasks.delete_task(id) {
            log::warn!("Ignoring delete: {}", e);
            return;
        }

        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    pub fn stats(&self) -> TaskStats {
        self.tasks.stats()
    }

    /// Open the task statistics message
    pub fn show_stats(&mut self) {
        let stats = self.stats();
        self.push_modal(
            "Task Statistics",
            &format!("Total tasks: {}\nCompleted tasks: {}", stats.total, stats.completed),
        );
    }

    /// Label for the current task line
    pub fn current_task_label(&self) -> String {
        match self.tasks.current_task() {
            Some(task) => format!("Current Task: {}", task.text),
            None => "No current task".to_string(),
        }
    }

    pub fn push_modal(&mut self, title: &str, message: &str) {
        self.modals.push_back(ModalState {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn active_modal(&self) -> Option<&ModalState> {
        self.modals.front()
    }

    pub fn dismiss_modal(&mut self) {
        self.modals.pop_front();
    }
}
