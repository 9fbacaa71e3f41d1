use async_trait::async_trait;
use voxcmd_models::{action::ActionResult, reminder::ReminderEntry};
use voxcmd_scheduler::ReminderDeliveryChannel;

pub const EXAMPLE_COMMANDS: [&str; 7] = [
    "Play Believer on YouTube",
    "Search for Python programming",
    "Mute / Unmute / Volume up / Volume down",
    "Increase volume / Decrease volume",
    "Pause music / Resume music",
    "Set reminder for 10 seconds to check oven",
    "Set alarm for 14:30",
];

pub struct ConsoleDeliveryChannel;

#[async_trait]
impl ReminderDeliveryChannel for ConsoleDeliveryChannel {
    async fn send_reminder_notification(&self, reminder: &ReminderEntry) {
        println!("{}", reminder.notification_text());
    }
}

pub fn print_banner() {
    println!("🎤 Voice Assistant Started. Examples:");
    for example in EXAMPLE_COMMANDS {
        println!("👉 '{example}'");
    }
}

pub fn render(result: &ActionResult) -> String {
    match result {
        ActionResult::Link { url, message } => format!("{message}\n🔗 {url}"),
        other => other.message().to_owned(),
    }
}
