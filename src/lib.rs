//! elevenlabs-rs: a blocking client for the ElevenLabs text-to-speech API.
//!
//! Use [`api::ApiClient`] directly, or the process-wide entry points
//! re-exported here, which share a lazily built default client.

pub mod api;
pub mod cli;
pub mod config;

pub use api::{ApiClient, ApiError, SpeechBackend, SpeechRequest, SpeechResult, VoiceSummary};
pub use config::{
    Settings, api_key, client, configure, list_voices, reset_client, text_to_speech,
};
