use std::time::Duration;

use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Desktop install with browser, audio and window automation available.
    #[default]
    Local,
    /// Server or cloud install; only link and reminder commands work.
    Headless,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AudioSettings {
    pub volume_step: f32,
    pub volume_up_level: f32,
    pub volume_down_level: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume_step: 0.1,
            volume_up_level: 1.0,
            volume_down_level: 0.3,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReminderSettings {
    pub poll_interval_secs: u64,
    /// Alarms for a time that already passed today fire tomorrow instead of immediately.
    pub alarm_rollover: bool,
}

impl ReminderSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1,
            alarm_rollover: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MediaSettings {
    pub window_title: String,
    pub play_pause_key: String,
    pub focus_settle_ms: u64,
}

impl MediaSettings {
    pub fn focus_settle(&self) -> Duration {
        Duration::from_millis(self.focus_settle_ms)
    }
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            window_title: "YouTube".to_owned(),
            play_pause_key: "space".to_owned(),
            focus_settle_ms: 500,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub deployment: Deployment,
    pub timezone: Option<String>,
    pub audio: AudioSettings,
    pub reminders: ReminderSettings,
    pub media: MediaSettings,
}

impl Settings {
    pub fn timezone(&self) -> Result<Tz, chrono_tz::ParseError> {
        match &self.timezone {
            Some(name) => name.parse(),
            None => Ok(Tz::UTC),
        }
    }
}
