use thiserror::Error;

use crate::Capability;

pub const REMINDER_USAGE: &str =
    "❌ Could not set reminder. Use: 'Set reminder for 10 seconds to check oven'";
pub const ALARM_USAGE: &str =
    "❌ Could not set alarm. Use: 'Set alarm for HH:MM' (24-hour format)";
pub const NOT_RECOGNIZED: &str = "🤔 Command not recognized. Try again.";
pub const REQUIRES_LOCAL_INSTALL: &str = "⚠️ Audio controls require local installation";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '{0}' in command")]
    MissingDelimiter(&'static str),

    #[error("invalid duration '{0}'")]
    InvalidDuration(String),

    #[error("reminder text is empty")]
    EmptyText,

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not parse reminder: {0}")]
    Reminder(#[source] ParseError),

    #[error("could not parse alarm: {0}")]
    Alarm(#[source] ParseError),

    #[error("song name is missing")]
    MissingSong,

    #[error("search query is missing")]
    MissingQuery,

    #[error("command not recognized")]
    Unrecognized,

    #[error("{0} is not available in this deployment")]
    CapabilityUnavailable(Capability),

    #[error("no window titled '{0}'")]
    WindowNotFound(String),

    #[error(transparent)]
    Capability(#[from] anyhow::Error),
}

impl DispatchError {
    /// User facing text shown in place of the action result.
    pub fn hint(&self) -> String {
        match self {
            DispatchError::Reminder(_) => REMINDER_USAGE.to_owned(),
            DispatchError::Alarm(_) => ALARM_USAGE.to_owned(),
            DispatchError::MissingSong => "❗ I didn't catch the song name.".to_owned(),
            DispatchError::MissingQuery => "❗ No search query detected.".to_owned(),
            DispatchError::Unrecognized => NOT_RECOGNIZED.to_owned(),
            DispatchError::CapabilityUnavailable(_) => REQUIRES_LOCAL_INSTALL.to_owned(),
            DispatchError::WindowNotFound(title) => format!("❌ Could not find {title} window"),
            DispatchError::Capability(_) => {
                "❌ Could not reach the audio/desktop controls".to_owned()
            }
        }
    }
}
