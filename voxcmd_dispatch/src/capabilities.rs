pub mod system;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use voxcmd_models::settings::Deployment;

#[async_trait]
pub trait Browser: Send + Sync + 'static {
    async fn open_url(&self, url: &str) -> anyhow::Result<()>;
}

/// Master volume of the default output device. Levels are in `[0.0, 1.0]`.
#[async_trait]
pub trait AudioEndpoint: Send + Sync + 'static {
    async fn volume(&self) -> anyhow::Result<f32>;
    async fn set_volume(&self, level: f32) -> anyhow::Result<()>;
    async fn mute(&self) -> anyhow::Result<()>;
    async fn unmute(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait DesktopAutomation: Send + Sync + 'static {
    async fn send_key(&self, key: &str) -> anyhow::Result<()>;

    /// Returns `false` when no window title contains `title`.
    async fn focus_window(&self, title: &str) -> anyhow::Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Browser,
    Audio,
    Desktop,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Browser => write!(f, "browser"),
            Capability::Audio => write!(f, "audio"),
            Capability::Desktop => write!(f, "desktop automation"),
        }
    }
}

/// Side effects available to the dispatcher. A missing capability is not an
/// error by itself; only commands that need it fail.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub browser: Option<Arc<dyn Browser>>,
    pub audio: Option<Arc<dyn AudioEndpoint>>,
    pub desktop: Option<Arc<dyn DesktopAutomation>>,
}

impl Capabilities {
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn local() -> Self {
        Self {
            browser: Some(Arc::new(system::SystemBrowser)),
            audio: Some(Arc::new(system::PulseAudioEndpoint::default())),
            desktop: Some(Arc::new(system::XdotoolDesktop)),
        }
    }

    pub fn for_deployment(deployment: Deployment) -> Self {
        match deployment {
            Deployment::Local => Self::local(),
            Deployment::Headless => Self::headless(),
        }
    }
}
