use async_trait::async_trait;
use voxcmd_models::reminder::ReminderEntry;

#[async_trait]
pub trait ReminderDeliveryChannel: Send + Sync + 'static {
    async fn send_reminder_notification(&self, reminder: &ReminderEntry);
}
