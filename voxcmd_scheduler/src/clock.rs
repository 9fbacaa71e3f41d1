use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of local wall-clock time for reminders and alarms.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

#[cfg(any(test, feature = "test-util"))]
pub struct ManualClock(std::sync::Mutex<NaiveDateTime>);

#[cfg(any(test, feature = "test-util"))]
impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(std::sync::Mutex::new(now))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap() = now;
    }

    pub fn advance(&self, delta: chrono::TimeDelta) {
        let mut now = self.0.lock().unwrap();
        *now += delta;
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}
