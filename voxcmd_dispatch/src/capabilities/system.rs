//! Desktop capabilities backed by the host's own tools: the default browser,
//! `pactl` for PulseAudio/PipeWire volume and `xdotool` for X11 windows.

use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;

use super::{AudioEndpoint, Browser, DesktopAutomation};

pub struct SystemBrowser;

#[async_trait]
impl Browser for SystemBrowser {
    async fn open_url(&self, url: &str) -> anyhow::Result<()> {
        log::info!("Opening {url} in the default browser");
        open::that_detached(url).with_context(|| format!("Failed to open {url}"))
    }
}

pub struct PulseAudioEndpoint {
    sink: String,
}

impl Default for PulseAudioEndpoint {
    fn default() -> Self {
        Self {
            sink: "@DEFAULT_SINK@".to_owned(),
        }
    }
}

#[async_trait]
impl AudioEndpoint for PulseAudioEndpoint {
    async fn volume(&self) -> anyhow::Result<f32> {
        let output = run("pactl", &["get-sink-volume", self.sink.as_str()]).await?;
        parse_pactl_volume(&output)
            .with_context(|| format!("Unexpected pactl output: {output}"))
    }

    async fn set_volume(&self, level: f32) -> anyhow::Result<()> {
        let percent = format!("{}%", (level.clamp(0.0, 1.0) * 100.0).round() as u32);
        run("pactl", &["set-sink-volume", self.sink.as_str(), percent.as_str()]).await?;
        Ok(())
    }

    async fn mute(&self) -> anyhow::Result<()> {
        run("pactl", &["set-sink-mute", self.sink.as_str(), "1"]).await?;
        Ok(())
    }

    async fn unmute(&self) -> anyhow::Result<()> {
        run("pactl", &["set-sink-mute", self.sink.as_str(), "0"]).await?;
        Ok(())
    }
}

pub struct XdotoolDesktop;

#[async_trait]
impl DesktopAutomation for XdotoolDesktop {
    async fn send_key(&self, key: &str) -> anyhow::Result<()> {
        run("xdotool", &["key", key]).await?;
        Ok(())
    }

    async fn focus_window(&self, title: &str) -> anyhow::Result<bool> {
        // xdotool exits with 1 and prints nothing when the search is empty.
        let output = Command::new("xdotool")
            .args(["search", "--name", title])
            .output()
            .await
            .context("Failed to run xdotool")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let Some(window_id) = first_window_id(&stdout) else {
            return Ok(false);
        };

        run("xdotool", &["windowactivate", "--sync", window_id]).await?;
        Ok(true)
    }
}

async fn run(program: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run {program}"))?;

    if !output.status.success() {
        anyhow::bail!(
            "{program} {} exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Reads the first channel's percentage from `pactl get-sink-volume` output.
pub(crate) fn parse_pactl_volume(output: &str) -> Option<f32> {
    output
        .split_whitespace()
        .find_map(|token| token.strip_suffix('%'))
        .and_then(|percent| percent.parse::<f32>().ok())
        .map(|percent| percent / 100.0)
}

pub(crate) fn first_window_id(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pactl_volume_reads_first_channel() {
        let output = "Volume: front-left: 42597 /  65% / -11.23 dB,   front-right: 42597 /  65% / -11.23 dB\n        balance 0.00\n";

        assert_eq!(parse_pactl_volume(output), Some(0.65));
    }

    #[test]
    fn pactl_volume_above_hundred_percent_is_kept() {
        let output = "Volume: mono: 78643 / 120% / 4.75 dB";

        assert_eq!(parse_pactl_volume(output), Some(1.2));
    }

    #[test]
    fn pactl_volume_without_percentage_is_none() {
        assert_eq!(parse_pactl_volume("Connection failure: Connection refused"), None);
    }

    #[test]
    fn first_window_id_skips_noise() {
        let output = "Defaulting to search window name\n  \n48234503\n48234511\n";

        assert_eq!(first_window_id(output), Some("48234503"));
    }

    #[test]
    fn empty_search_has_no_window() {
        assert_eq!(first_window_id(""), None);
    }
}
