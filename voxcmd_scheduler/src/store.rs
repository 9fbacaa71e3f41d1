use std::sync::Arc;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use tokio::sync::Mutex;
use voxcmd_models::reminder::{ReminderEntry, ReminderFireTime, ReminderId};

use crate::Clock;

struct ReminderStoreState {
    next_id: ReminderId,
    entries: Vec<ReminderEntry>,
}

/// In-memory list of pending reminders.
///
/// Entries leave the store only through [`ReminderStore::poll`] or
/// [`ReminderStore::cancel`], so every due entry is handed out exactly once.
pub struct ReminderStore {
    state: Mutex<ReminderStoreState>,
    clock: Arc<dyn Clock>,
}

impl ReminderStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(ReminderStoreState {
                next_id: 0,
                entries: Vec::new(),
            }),
            clock,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub async fn schedule(
        &self,
        text: impl Into<String>,
        delay: TimeDelta,
    ) -> anyhow::Result<ReminderEntry> {
        let Some(fire_at) = self.clock.now().checked_add_signed(delay) else {
            anyhow::bail!("Reminder delay {delay} is out of range");
        };

        Ok(self.insert(text.into(), fire_at).await)
    }

    /// Schedules for `at` on the current day, even when that moment already passed.
    pub async fn schedule_at(&self, text: impl Into<String>, at: NaiveTime) -> ReminderEntry {
        let today = self.clock.now().date();
        self.insert(text.into(), today.and_time(at)).await
    }

    pub async fn schedule_at_datetime(
        &self,
        text: impl Into<String>,
        at: NaiveDateTime,
    ) -> ReminderEntry {
        self.insert(text.into(), at).await
    }

    /// Removes and returns every entry due at `now`, oldest insertion first.
    pub async fn poll(&self, now: NaiveDateTime) -> Vec<ReminderEntry> {
        let mut state = self.state.lock().await;
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut state.entries)
            .into_iter()
            .partition(|entry| entry.fire_at.is_due(now));
        state.entries = pending;

        if !due.is_empty() {
            log::info!(
                "Triggered {} reminder(s), {} still pending",
                due.len(),
                state.entries.len()
            );
        }

        due
    }

    pub async fn cancel(&self, id: ReminderId) -> anyhow::Result<ReminderEntry> {
        let mut state = self.state.lock().await;
        match state.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                log::info!("Cancelled reminder {id}");
                Ok(state.entries.remove(index))
            }
            None => anyhow::bail!("No such reminder {id}"),
        }
    }

    pub async fn pending(&self) -> Vec<ReminderEntry> {
        self.state.lock().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn insert(&self, text: String, fire_at: NaiveDateTime) -> ReminderEntry {
        let mut state = self.state.lock().await;
        let entry = ReminderEntry {
            id: state.next_id,
            fire_at: ReminderFireTime::new(fire_at),
            text,
        };
        state.next_id += 1;
        state.entries.push(entry.clone());

        log::info!(
            "Scheduled reminder {} for {}",
            entry.id,
            entry.fire_at.datetime()
        );
        entry
    }
}
