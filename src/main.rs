mod appsettings;
mod command_loop;
mod console;

use std::sync::Arc;

use anyhow::Context;
use console::ConsoleDeliveryChannel;
use tokio_util::sync::CancellationToken;
use voxcmd_dispatch::{Capabilities, CommandDispatcher, LineTranscriber};
use voxcmd_scheduler::{ReminderDeliveryChannel, ReminderPoller, ReminderStore, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::load().context("Failed to load appsettings")?;
    let timezone = settings
        .timezone()
        .map_err(|e| anyhow::anyhow!("Invalid timezone setting: {e}"))?;

    log::info!(
        "Starting voice command dispatcher [deployment = {:?}, timezone = {}]",
        settings.deployment,
        timezone
    );

    let store = Arc::new(ReminderStore::new(Arc::new(SystemClock::new(timezone))));
    let delivery_channel: Arc<dyn ReminderDeliveryChannel> = Arc::new(ConsoleDeliveryChannel);
    let dispatcher = CommandDispatcher::new(
        Capabilities::for_deployment(settings.deployment),
        Arc::clone(&store),
        &settings,
    );

    let cancellation_token = CancellationToken::new();
    let poller = ReminderPoller::spawn(
        Arc::clone(&store),
        Arc::clone(&delivery_channel),
        settings.reminders.poll_interval(),
        cancellation_token.clone(),
    );

    let ctrlc_token = cancellation_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n🛑 Exiting Voice Assistant.");
            ctrlc_token.cancel();
        }
    });

    console::print_banner();

    let mut transcriber = LineTranscriber::stdin();
    command_loop::run_command_loop(
        &dispatcher,
        &mut transcriber,
        delivery_channel.as_ref(),
        cancellation_token.clone(),
    )
    .await;

    cancellation_token.cancel();
    poller.shutdown().await;

    Ok(())
}
