use chrono::NaiveDateTime;

pub type ReminderId = u64;

pub const ALARM_TEXT: &str = "Alarm!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReminderFireTime(NaiveDateTime);

impl ReminderFireTime {
    /// Keeps full precision so a reminder never becomes due before its delay elapsed.
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    pub fn datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    pub fn into_datetime(self) -> NaiveDateTime {
        self.0
    }

    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.0 <= now
    }
}

/// A pending reminder or alarm. Owned by the reminder store until a poll hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEntry {
    pub id: ReminderId,
    pub fire_at: ReminderFireTime,
    pub text: String,
}

impl ReminderEntry {
    pub fn notification_text(&self) -> String {
        format!("🔔 Reminder: {}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn at(h: u32, m: u32, s: u32, nano: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 31)
            .unwrap()
            .and_time(NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap())
    }

    #[test]
    fn fire_time_keeps_sub_second_precision() {
        let fire_at = ReminderFireTime::new(at(12, 0, 5, 900_000_000));

        assert_eq!(*fire_at.datetime(), at(12, 0, 5, 900_000_000));
        assert!(!fire_at.is_due(at(12, 0, 5, 0)));
        assert!(fire_at.is_due(at(12, 0, 5, 900_000_000)));
    }

    #[test]
    fn fire_time_is_due_at_and_after_its_instant() {
        let fire_at = ReminderFireTime::new(at(12, 0, 5, 0));

        assert!(!fire_at.is_due(at(12, 0, 4, 0)));
        assert!(fire_at.is_due(at(12, 0, 5, 0)));
        assert!(fire_at.is_due(at(12, 0, 6, 0)));
    }

    #[test]
    fn notification_text_carries_reminder_text() {
        let entry = ReminderEntry {
            id: 0,
            fire_at: ReminderFireTime::new(at(8, 0, 0, 0)),
            text: "check oven".to_owned(),
        };

        assert_eq!(entry.notification_text(), "🔔 Reminder: check oven");
    }
}
