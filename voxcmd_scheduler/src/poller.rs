use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{ReminderDeliveryChannel, ReminderStore};

/// Background task that hands due reminders to a delivery channel.
pub struct ReminderPoller {
    cancellation_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ReminderPoller {
    pub fn spawn(
        store: Arc<ReminderStore>,
        delivery_channel: Arc<dyn ReminderDeliveryChannel>,
        interval: Duration,
        cancellation_token: CancellationToken,
    ) -> Self {
        let task_cancellation_token = cancellation_token.child_token();
        let task_token = task_cancellation_token.clone();
        log::info!("Starting reminder poller with {interval:?} interval");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        log::info!("Reminder poller shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        deliver_due(&store, delivery_channel.as_ref()).await;
                    }
                }
            }
        });

        Self {
            cancellation_token: task_cancellation_token,
            task: Some(task),
        }
    }

    pub async fn shutdown(mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::error!("Reminder poller task failed: {e}");
            }
        }
    }
}

impl Drop for ReminderPoller {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

/// Polls the store at the clock's current time and delivers every triggered entry.
pub async fn deliver_due(
    store: &ReminderStore,
    delivery_channel: &dyn ReminderDeliveryChannel,
) -> usize {
    let triggered = store.poll(store.now()).await;
    for reminder in &triggered {
        delivery_channel.send_reminder_notification(reminder).await;
    }
    triggered.len()
}
