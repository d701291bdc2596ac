//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::api::{DEFAULT_MODEL_ID, DEFAULT_OUTPUT_FORMAT, SpeechRequest};

/// Text-to-speech and voice listing via the ElevenLabs API.
#[derive(Parser, Debug)]
#[command(name = "elevenlabs-rs")]
#[command(about = "Text-to-speech and voice listing via the ElevenLabs API")]
#[command(version)]
pub struct Args {
    /// Text to generate speech from
    #[arg(short, long)]
    pub generate: Option<String>,

    /// Voice id to speak with
    #[arg(short, long)]
    pub voice: Option<String>,

    /// Synthesis model id
    #[arg(short, long, default_value = DEFAULT_MODEL_ID)]
    pub model: String,

    /// Output format, e.g. "mp3_44100_128" or "pcm_44100"
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FORMAT)]
    pub format: String,

    /// Output audio file [default: speech.mp3]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available voices
    #[arg(long)]
    pub list_voices: bool,

    /// Only list voices matching this query
    #[arg(long, requires = "list_voices")]
    pub search: Option<String>,

    /// API key (defaults to $ELEVENLABS_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Errors that can occur when turning arguments into a request.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("--voice is required with --generate")]
    MissingVoice,
}

impl Args {
    /// Build the synthesis request, if `--generate` was given.
    pub fn speech_request(&self) -> Result<Option<SpeechRequest>, ArgsError> {
        let Some(text) = &self.generate else {
            return Ok(None);
        };
        let voice = self.voice.as_ref().ok_or(ArgsError::MissingVoice)?;

        Ok(Some(
            SpeechRequest::new(text.as_str(), voice.as_str())
                .with_model(self.model.as_str())
                .with_output_format(self.format.as_str()),
        ))
    }
}
