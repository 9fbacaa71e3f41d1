//! Payload extraction by keyword removal. Commands are expected lowercased.

use chrono::NaiveTime;

use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub seconds: u64,
    pub text: String,
}

pub fn song_name(command: &str) -> Option<String> {
    non_empty(command.replace("play", "").replace("on youtube", ""))
}

pub fn search_query(command: &str) -> Option<String> {
    non_empty(command.replace("search for", ""))
}

/// Parses `... for <N> seconds ... to <text>`.
pub fn reminder(command: &str) -> Result<ReminderRequest, ParseError> {
    let (_, rest) = command
        .split_once("for")
        .ok_or(ParseError::MissingDelimiter("for"))?;
    let (duration, text) = rest
        .split_once("to")
        .ok_or(ParseError::MissingDelimiter("to"))?;

    let duration = duration.replace("seconds", "").replace("second", "");
    let duration = duration.trim();
    let seconds = duration
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidDuration(duration.to_owned()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyText);
    }

    Ok(ReminderRequest {
        seconds,
        text: text.to_owned(),
    })
}

/// Parses `... for HH:MM`, strictly two digits on each side of the colon.
pub fn alarm_time(command: &str) -> Result<NaiveTime, ParseError> {
    let (_, rest) = command
        .split_once("for")
        .ok_or(ParseError::MissingDelimiter("for"))?;
    let time = rest.trim();

    let bytes = time.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 2 { *b == b':' } else { b.is_ascii_digit() });

    if !well_formed {
        return Err(ParseError::InvalidTime(time.to_owned()));
    }

    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| ParseError::InvalidTime(time.to_owned()))
}

fn non_empty(payload: String) -> Option<String> {
    let trimmed = payload.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
