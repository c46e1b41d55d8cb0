//! Alerts for timer and settings events.
//!
//! A `Notifier` walks an ordered chain of backends and stops at the first one
//! that delivers. Backend failures are logged and never reach the timer.

use crate::domain::{PomodoroError, TimerEvent, Transition};
use crate::persistence::AppSettings;
use notify_rust::Notification;
use std::io::Write;

const APP_NAME: &str = "Pomodoro";

/// Something worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyEvent {
    Reminder,
    IntervalComplete(Transition),
    SettingsApplied,
    SettingsInvalid,
}

impl NotifyEvent {
    pub fn title(&self) -> &'static str {
        match self {
            NotifyEvent::Reminder => "Posture Check!",
            NotifyEvent::IntervalComplete(transition) => transition.title(),
            NotifyEvent::SettingsApplied => "Settings Applied",
            NotifyEvent::SettingsInvalid => "Invalid Input",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            NotifyEvent::Reminder => {
                "Remember to:\n\n\
                 1. Stretch your arms and back\n\
                 2. Look away from the screen\n\
                 3. Take deep breaths\n\n\
                 Your body will thank you!"
            }
            NotifyEvent::IntervalComplete(transition) => transition.message(),
            NotifyEvent::SettingsApplied => "Timer settings updated successfully!",
            NotifyEvent::SettingsInvalid => "Please enter valid positive numbers for all times.",
        }
    }
}

impl From<TimerEvent> for NotifyEvent {
    fn from(event: TimerEvent) -> Self {
        match event {
            TimerEvent::Reminder => NotifyEvent::Reminder,
            TimerEvent::Completed(transition) => NotifyEvent::IntervalComplete(transition),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChannel {
    Desktop,
    Bell,
}

/// Result of trying to alert the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    Delivered(AlertChannel),
    Suppressed,
}

/// One way of getting the user's attention
pub trait AlertBackend {
    fn channel(&self) -> AlertChannel;
    fn send(&self, event: &NotifyEvent) -> Result<(), PomodoroError>;
}

/// Desktop notification through the platform notification service
pub struct DesktopBackend;

impl AlertBackend for DesktopBackend {
    fn channel(&self) -> AlertChannel {
        AlertChannel::Desktop
    }

    fn send(&self, event: &NotifyEvent) -> Result<(), PomodoroError> {
        Notification::new()
            .appname(APP_NAME)
            .summary(&format!("{} - {}", APP_NAME, event.title()))
            .body(event.body())
            .show()
            .map(|_| ())
            .map_err(|e| PomodoroError::NotifierUnavailable(e.to_string()))
    }
}

/// Terminal bell
pub struct BellBackend;

impl AlertBackend for BellBackend {
    fn channel(&self) -> AlertChannel {
        AlertChannel::Bell
    }

    fn send(&self, _event: &NotifyEvent) -> Result<(), PomodoroError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| PomodoroError::NotifierUnavailable(e.to_string()))
    }
}

/// Ordered fallback chain of alert backends
pub struct Notifier {
    backends: Vec<Box<dyn AlertBackend>>,
}

impl Notifier {
    pub fn new(backends: Vec<Box<dyn AlertBackend>>) -> Self {
        Self { backends }
    }

    /// Notifier that never alerts
    #[cfg(test)]
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// Desktop first (if enabled), then the terminal bell (if enabled)
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut backends: Vec<Box<dyn AlertBackend>> = Vec::new();
        if settings.desktop_notifications {
            backends.push(Box::new(DesktopBackend));
        }
        if settings.terminal_bell {
            backends.push(Box::new(BellBackend));
        }
        Self::new(backends)
    }

    pub fn channels(&self) -> Vec<AlertChannel> {
        self.backends.iter().map(|b| b.channel()).collect()
    }

    /// Try each backend in order until one delivers
    pub fn alert(&self, event: &NotifyEvent) -> AlertOutcome {
        for backend in &self.backends {
            match backend.send(event) {
                Ok(()) => return AlertOutcome::Delivered(backend.channel()),
                Err(e) => {
                    log::warn!("{:?} alert failed for {:?}: {}", backend.channel(), event, e);
                }
            }
        }

        log::debug!("Alert suppressed for {:?}", event);
        AlertOutcome::Suppressed
    }
}
