//! API request/response types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Output format used when a request does not name one.
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Errors that can occur when talking to the ElevenLabs API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Parameters for a speech synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

impl SpeechRequest {
    /// Create a new synthesis request with the default model and format.
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the output format, e.g. `pcm_44100`.
    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        if self.text.is_empty() {
            return Err(ApiError::InvalidRequest("Text cannot be empty".to_string()));
        }
        if self.voice_id.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Voice id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn body(&self) -> SpeechBody<'_> {
        SpeechBody {
            text: &self.text,
            model_id: &self.model_id,
        }
    }
}

/// JSON body of the text-to-speech endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct SpeechBody<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
}

/// Synthesized audio returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResult {
    pub data: Vec<u8>,
    pub filename: &'static str,
    pub content_type: &'static str,
}

impl SpeechResult {
    pub(crate) fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            filename: "speech.mp3",
            content_type: "audio/mpeg",
        }
    }

    /// Write the audio bytes to `path`.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.data)
    }
}

/// One entry of a voice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSummary {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

/// Response from the voices endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct VoicesResponse {
    pub voices: Vec<VoiceSummary>,
}

/// `detail` is either `{"message": ...}` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Structured { message: String },
    Plain(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

/// Derive a human-readable message from a failed response body.
pub(crate) fn error_message(status: u16, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(ErrorDetail::Structured { message }),
        }) => message,
        Ok(ErrorBody {
            detail: Some(ErrorDetail::Plain(message)),
        }) => message,
        _ => format!("Request failed ({status})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_speech_request_defaults() {
        let request = SpeechRequest::new("Hello", "voice");

        assert_eq!(request.model_id, "eleven_multilingual_v2");
        assert_eq!(request.output_format, "mp3_44100_128");
    }

    #[test]
    fn test_speech_request_builder() {
        let request = SpeechRequest::new("Hello", "voice")
            .with_model("eleven_turbo_v2_5")
            .with_output_format("pcm_44100");

        assert_eq!(request.model_id, "eleven_turbo_v2_5");
        assert_eq!(request.output_format, "pcm_44100");
    }

    #[test]
    fn test_speech_request_rejects_empty_fields() {
        assert!(matches!(
            SpeechRequest::new("", "voice").validate(),
            Err(ApiError::InvalidRequest(_))
        ));
        assert!(matches!(
            SpeechRequest::new("Hello", "").validate(),
            Err(ApiError::InvalidRequest(_))
        ));
        assert!(SpeechRequest::new("Hello", "voice").validate().is_ok());
    }

    #[test]
    fn test_speech_body_serializes_text_and_model() {
        let request = SpeechRequest::new("Hello world", "voice");
        let json = serde_json::to_value(request.body()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"text": "Hello world", "model_id": "eleven_multilingual_v2"})
        );
    }

    #[test]
    fn test_error_message_from_detail_object() {
        let body = br#"{"detail": {"status": "invalid_api_key", "message": "Invalid API key"}}"#;
        assert_eq!(error_message(401, body), "Invalid API key");
    }

    #[test]
    fn test_error_message_from_detail_string() {
        assert_eq!(
            error_message(500, br#"{"detail": "Internal error"}"#),
            "Internal error"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(502, b"<html>Bad Gateway</html>"), "Request failed (502)");
        assert_eq!(error_message(404, br#"{"error": "nope"}"#), "Request failed (404)");
        assert_eq!(error_message(400, br#"{"detail": 42}"#), "Request failed (400)");
        assert_eq!(
            error_message(422, br#"{"detail": {"loc": ["body"]}}"#),
            "Request failed (422)"
        );
        assert_eq!(error_message(500, b""), "Request failed (500)");
    }

    #[test]
    fn test_api_error_display_is_message() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn test_voices_response_deserialize() {
        let json = r#"{
            "voices": [
                {"voice_id": "abc123", "name": "Rachel", "category": "premade", "labels": {}},
                {"voice_id": "def456", "name": "Domi"}
            ]
        }"#;

        let response: VoicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.voices.len(), 2);
        assert_eq!(response.voices[0].category, "premade");
        assert_eq!(response.voices[1].category, "");
    }

    #[test]
    fn test_speech_result_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.mp3");
        let result = SpeechResult::mp3(vec![0xFF, 0xFB, 0x90, 0x00]);

        result.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xFB, 0x90, 0x00]);
        assert_eq!(result.filename, "speech.mp3");
        assert_eq!(result.content_type, "audio/mpeg");
    }
}
