use std::sync::Arc;

use chrono::TimeDelta;
use voxcmd_models::{
    action::ActionResult,
    reminder::ALARM_TEXT,
    settings::{AudioSettings, MediaSettings, Settings},
};
use voxcmd_scheduler::ReminderStore;

use crate::{
    AudioEndpoint, Capabilities, Capability, DesktopAutomation, DispatchError, Intent,
    ParseError, classify, parse,
};

const YOUTUBE_URL: &str = "https://www.youtube.com";
const GOOGLE_URL: &str = "https://www.google.com";

/// Without a local audio endpoint, any unmatched command mentioning one of
/// these is answered with the local-install hint instead of "not recognized".
const AUDIO_KEYWORDS: [&str; 5] = ["pause", "resume", "mute", "unmute", "volume"];

/// Turns free-text commands into actions. Never fails: every problem becomes
/// an [`ActionResult::Error`] carrying a fixed hint.
pub struct CommandDispatcher {
    capabilities: Capabilities,
    store: Arc<ReminderStore>,
    audio_settings: AudioSettings,
    media_settings: MediaSettings,
    alarm_rollover: bool,
}

impl CommandDispatcher {
    pub fn new(capabilities: Capabilities, store: Arc<ReminderStore>, settings: &Settings) -> Self {
        Self {
            capabilities,
            store,
            audio_settings: settings.audio.clone(),
            media_settings: settings.media.clone(),
            alarm_rollover: settings.reminders.alarm_rollover,
        }
    }

    pub fn store(&self) -> &Arc<ReminderStore> {
        &self.store
    }

    pub async fn dispatch(&self, command: &str) -> ActionResult {
        let command = command.to_lowercase();

        let outcome = match classify(&command) {
            Some(intent) => {
                log::debug!("Command {command:?} matched {intent:?}");
                self.handle(intent, &command).await
            }
            None => Err(self.unrecognized(&command)),
        };

        outcome.unwrap_or_else(|e| {
            match &e {
                DispatchError::Capability(source) => {
                    log::error!("Command {command:?} failed: {source:#}")
                }
                _ => log::warn!("Command {command:?} rejected: {e}"),
            }
            ActionResult::error(e.hint())
        })
    }

    async fn handle(&self, intent: Intent, command: &str) -> Result<ActionResult, DispatchError> {
        match intent {
            Intent::PlayOnYoutube => {
                let song = parse::song_name(command).ok_or(DispatchError::MissingSong)?;
                let url = format!(
                    "{YOUTUBE_URL}/results?search_query={}",
                    urlencoding::encode(&song)
                );
                Ok(self
                    .open_link(url, format!("🎵 Playing '{song}' on YouTube..."))
                    .await)
            }
            Intent::SearchFor => {
                let query = parse::search_query(command).ok_or(DispatchError::MissingQuery)?;
                let url = format!("{GOOGLE_URL}/search?q={}", urlencoding::encode(&query));
                Ok(self
                    .open_link(url, format!("🔍 Searching Google for: {query}"))
                    .await)
            }
            Intent::OpenYoutube => Ok(self.open_link(YOUTUBE_URL, "🎬 Opening YouTube...").await),
            Intent::OpenGoogle => Ok(self.open_link(GOOGLE_URL, "🌐 Opening Google...").await),
            Intent::Pause => {
                self.toggle_playback().await?;
                Ok(ActionResult::effect("⏸️ YouTube paused"))
            }
            Intent::Resume => {
                self.toggle_playback().await?;
                Ok(ActionResult::effect("▶️ YouTube resumed"))
            }
            Intent::Unmute => {
                self.audio()?.unmute().await?;
                Ok(ActionResult::effect("🔊 Volume unmuted"))
            }
            Intent::Mute => {
                self.audio()?.mute().await?;
                Ok(ActionResult::effect("🔇 Volume muted"))
            }
            Intent::VolumeUp => {
                let level = self.set_volume(self.audio_settings.volume_up_level).await?;
                Ok(ActionResult::effect(format!(
                    "🔊 Volume set to {}%",
                    volume_percent(level)
                )))
            }
            Intent::VolumeDown => {
                let level = self.set_volume(self.audio_settings.volume_down_level).await?;
                Ok(ActionResult::effect(format!(
                    "🔉 Volume set to {}%",
                    volume_percent(level)
                )))
            }
            Intent::IncreaseVolume => {
                let level = self.adjust_volume(self.audio_settings.volume_step).await?;
                Ok(ActionResult::effect(format!(
                    "🔊 Volume increased to {}%",
                    volume_percent(level)
                )))
            }
            Intent::DecreaseVolume => {
                let level = self.adjust_volume(-self.audio_settings.volume_step).await?;
                Ok(ActionResult::effect(format!(
                    "🔉 Volume decreased to {}%",
                    volume_percent(level)
                )))
            }
            Intent::SetReminder => self.set_reminder(command).await,
            Intent::SetAlarm => self.set_alarm(command).await,
            Intent::Shutdown => Ok(ActionResult::effect(
                "⚡ Shutting down system (simulation)...",
            )),
        }
    }

    async fn open_link(&self, url: impl Into<String>, message: impl Into<String>) -> ActionResult {
        let url = url.into();
        if let Some(browser) = &self.capabilities.browser {
            if let Err(e) = browser.open_url(&url).await {
                log::warn!("Browser could not open {url}: {e:#}");
            }
        }
        ActionResult::link(url, message)
    }

    async fn toggle_playback(&self) -> Result<(), DispatchError> {
        let desktop = self.desktop()?;
        let title = &self.media_settings.window_title;

        if !desktop.focus_window(title).await? {
            return Err(DispatchError::WindowNotFound(title.clone()));
        }

        tokio::time::sleep(self.media_settings.focus_settle()).await;
        desktop.send_key(&self.media_settings.play_pause_key).await?;
        Ok(())
    }

    async fn set_volume(&self, level: f32) -> Result<f32, DispatchError> {
        let level = clamp_volume(level);
        self.audio()?.set_volume(level).await?;
        Ok(level)
    }

    async fn adjust_volume(&self, delta: f32) -> Result<f32, DispatchError> {
        let audio = self.audio()?;
        let current = audio.volume().await?;
        // The endpoint may report more than 100%; a step never moves against its direction.
        if (delta > 0.0 && current >= 1.0) || (delta < 0.0 && current <= 0.0) {
            return Ok(current);
        }
        let level = clamp_volume(current + delta);
        audio.set_volume(level).await?;
        Ok(level)
    }

    async fn set_reminder(&self, command: &str) -> Result<ActionResult, DispatchError> {
        let request = parse::reminder(command).map_err(DispatchError::Reminder)?;
        let out_of_range =
            || DispatchError::Reminder(ParseError::InvalidDuration(request.seconds.to_string()));

        let delay = i64::try_from(request.seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(out_of_range)?;

        self.store
            .schedule(request.text.clone(), delay)
            .await
            .map_err(|_| out_of_range())?;

        Ok(ActionResult::success(format!(
            "⏰ Reminder set for {} seconds from now: {}",
            request.seconds, request.text
        )))
    }

    async fn set_alarm(&self, command: &str) -> Result<ActionResult, DispatchError> {
        let time = parse::alarm_time(command).map_err(DispatchError::Alarm)?;
        let now = self.store.now();

        let rolls_over = self.alarm_rollover && time <= now.time();
        let entry = match now.date().succ_opt() {
            Some(tomorrow) if rolls_over => {
                self.store
                    .schedule_at_datetime(ALARM_TEXT, tomorrow.and_time(time))
                    .await
            }
            _ => self.store.schedule_at(ALARM_TEXT, time).await,
        };

        log::info!("Alarm {} set for {}", entry.id, entry.fire_at.datetime());
        Ok(ActionResult::success(format!(
            "⏰ Alarm set for {}",
            time.format("%H:%M")
        )))
    }

    fn unrecognized(&self, command: &str) -> DispatchError {
        let mentions_audio = AUDIO_KEYWORDS.iter().any(|keyword| command.contains(keyword));
        if self.capabilities.audio.is_none() && mentions_audio {
            DispatchError::CapabilityUnavailable(Capability::Audio)
        } else {
            DispatchError::Unrecognized
        }
    }

    fn audio(&self) -> Result<&Arc<dyn AudioEndpoint>, DispatchError> {
        self.capabilities
            .audio
            .as_ref()
            .ok_or(DispatchError::CapabilityUnavailable(Capability::Audio))
    }

    fn desktop(&self) -> Result<&Arc<dyn DesktopAutomation>, DispatchError> {
        self.capabilities
            .desktop
            .as_ref()
            .ok_or(DispatchError::CapabilityUnavailable(Capability::Desktop))
    }
}

/// Keeps a volume level inside `[0.0, 1.0]`.
pub fn clamp_volume(level: f32) -> f32 {
    if level.is_nan() {
        return 0.0;
    }
    level.clamp(0.0, 1.0)
}

pub fn volume_percent(level: f32) -> u32 {
    (clamp_volume(level) * 100.0).round() as u32
}
