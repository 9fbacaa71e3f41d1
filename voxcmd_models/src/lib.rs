pub mod action;
pub mod reminder;
pub mod settings;

pub use chrono_tz;
