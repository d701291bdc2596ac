//! ElevenLabs API communication.
//!
//! Provides the [`SpeechBackend`] trait and the blocking HTTP
//! implementation that talks to the ElevenLabs REST API.

mod client;
mod types;

pub use client::{ApiClient, BASE_URL};
pub use types::{
    ApiError, DEFAULT_MODEL_ID, DEFAULT_OUTPUT_FORMAT, SpeechRequest, SpeechResult, VoiceSummary,
};

/// Trait for text-to-speech API communication.
///
/// This trait abstracts the HTTP calls made by [`ApiClient`],
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechBackend: Send + Sync {
    /// Synthesize speech from text.
    ///
    /// # Returns
    /// The raw audio bytes with a suggested filename and content type
    fn synthesize_speech(&self, request: &SpeechRequest) -> Result<SpeechResult, ApiError>;

    /// List available voices, optionally filtered by `search`.
    fn list_voices<'a>(&self, search: Option<&'a str>) -> Result<Vec<VoiceSummary>, ApiError>;
}
