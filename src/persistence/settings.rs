use crate::domain::Durations;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timer and alert settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub work_secs: i64,
    pub short_break_secs: i64,
    pub long_break_secs: i64,
    pub break_reminders: bool,
    pub desktop_notifications: bool,
    pub terminal_bell: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let durations = Durations::default();
        Self {
            work_secs: durations.work() as i64,
            short_break_secs: durations.short_break() as i64,
            long_break_secs: durations.long_break() as i64,
            break_reminders: true,
            desktop_notifications: true,
            terminal_bell: true,
        }
    }
}

impl AppSettings {
    /// Stored durations, or the defaults if any of them is invalid
    pub fn durations(&self) -> Durations {
        match Durations::new(self.work_secs, self.short_break_secs, self.long_break_secs) {
            Ok(durations) => durations,
            Err(e) => {
                log::warn!("Ignoring stored durations: {}", e);
                Durations::default()
            }
        }
    }

    pub fn set_durations(&mut self, durations: Durations) {
        self.work_secs = durations.work() as i64;
        self.short_break_secs = durations.short_break() as i64;
        self.long_break_secs = durations.long_break() as i64;
    }
}

/// Load settings from settings.json
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AppSettings> {
    let path = path.as_ref();

    let Some(content) = crate::persistence::read_file(path)? else {
        return Ok(AppSettings::default());
    };

    let settings: AppSettings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &AppSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
