pub mod capabilities;
mod dispatcher;
pub mod error;
pub mod intent;
pub mod parse;
pub mod transcription;

pub use capabilities::{AudioEndpoint, Browser, Capabilities, Capability, DesktopAutomation};
pub use dispatcher::{CommandDispatcher, clamp_volume, volume_percent};
pub use error::{DispatchError, ParseError};
pub use intent::{Intent, RULES, classify};
pub use transcription::{LineTranscriber, Transcriber, TranscriptionError};
