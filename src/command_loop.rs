use tokio_util::sync::CancellationToken;
use voxcmd_dispatch::{CommandDispatcher, Transcriber};
use voxcmd_scheduler::{ReminderDeliveryChannel, deliver_due};

use crate::console;

/// Reads commands until the input ends or the token is cancelled. Due
/// reminders are delivered after every command.
pub async fn run_command_loop(
    dispatcher: &CommandDispatcher,
    transcriber: &mut dyn Transcriber,
    delivery_channel: &dyn ReminderDeliveryChannel,
    cancellation_token: CancellationToken,
) {
    loop {
        let next = tokio::select! {
            biased;

            _ = cancellation_token.cancelled() => break,
            next = transcriber.next_command() => next,
        };

        match next {
            Ok(Some(command)) => {
                println!("🗣️ You said: {command}");
                let result = dispatcher.dispatch(&command).await;
                println!("{}", console::render(&result));
            }
            Ok(None) => {
                log::info!("Command input closed");
                break;
            }
            Err(e) => {
                log::warn!("Transcription failed: {e}");
                println!("{}", e.hint());
            }
        }

        deliver_due(dispatcher.store(), delivery_channel).await;
    }
}
