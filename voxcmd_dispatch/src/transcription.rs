use std::io::ErrorKind;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("no speech detected")]
    NoSpeechDetected,

    #[error("could not understand input")]
    Unintelligible,

    #[error("transcription service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl TranscriptionError {
    pub fn hint(&self) -> &'static str {
        match self {
            TranscriptionError::NoSpeechDetected => "⏱️ Timeout - No speech detected",
            TranscriptionError::Unintelligible => "⚠️ Could not understand audio.",
            TranscriptionError::ServiceUnavailable(_) => {
                "⚠️ Speech recognition service unavailable."
            }
        }
    }
}

/// Produces the next command phrase. `Ok(None)` means the source is exhausted.
#[async_trait]
pub trait Transcriber: Send {
    async fn next_command(&mut self) -> Result<Option<String>, TranscriptionError>;
}

/// Treats every line of a text stream as one already transcribed command.
pub struct LineTranscriber<R> {
    lines: Lines<R>,
}

impl<R> LineTranscriber<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineTranscriber<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> Transcriber for LineTranscriber<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_command(&mut self) -> Result<Option<String>, TranscriptionError> {
        match self.lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => Err(TranscriptionError::NoSpeechDetected),
            Ok(Some(line)) => Ok(Some(line.trim().to_owned())),
            Ok(None) => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(TranscriptionError::Unintelligible),
            Err(e) => Err(TranscriptionError::ServiceUnavailable(e.to_string())),
        }
    }
}
