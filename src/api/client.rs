//! HTTP client for the ElevenLabs API.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Response;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config;

use super::SpeechBackend;
use super::types::{
    ApiError, SpeechRequest, SpeechResult, VoiceSummary, VoicesResponse, error_message,
};

/// Public ElevenLabs API host.
pub const BASE_URL: &str = "https://api.elevenlabs.io";

const API_KEY_HEADER: &str = "xi-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking ElevenLabs API client.
///
/// The underlying HTTP connection is built on first use and reused for every
/// later call on the same instance.
pub struct ApiClient {
    api_key: Option<String>,
    base_url: String,
    http: OnceLock<reqwest::blocking::Client>,
}

impl ApiClient {
    /// Create a client for the public API.
    ///
    /// Without an explicit key the configured key is used (see
    /// [`config::api_key`]). A missing key is not an error here; the API
    /// rejects the request instead.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key.or_else(config::api_key), BASE_URL)
    }

    /// Create a client for a different host, using `api_key` as given.
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            api_key,
            base_url,
            http: OnceLock::new(),
        }
    }

    /// Get the API key this client authenticates with.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn http(&self) -> Result<&reqwest::blocking::Client, ApiError> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                ApiError::InvalidRequest("API key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        // A racing thread may have won; either client is equivalent.
        Ok(self.http.get_or_init(|| client))
    }

    /// Join `segments` onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidRequest(format!("Invalid base URL: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Turn a non-2xx response into [`ApiError::Api`].
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status = status.as_u16();
        let body = response.bytes().unwrap_or_default();
        let message = error_message(status, &body);
        warn!(status, %message, "ElevenLabs request failed");

        Err(ApiError::Api { status, message })
    }
}

impl SpeechBackend for ApiClient {
    fn synthesize_speech(&self, request: &SpeechRequest) -> Result<SpeechResult, ApiError> {
        request.validate()?;

        let url = self.endpoint(&["v1", "text-to-speech", request.voice_id.as_str()])?;
        debug!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            output_format = %request.output_format,
            "Synthesizing speech"
        );

        let response = self
            .http()?
            .post(url)
            .query(&[("output_format", request.output_format.as_str())])
            .json(&request.body())
            .send()?;

        let data = Self::check(response)?.bytes()?.to_vec();
        debug!(bytes = data.len(), "Received audio");

        Ok(SpeechResult::mp3(data))
    }

    fn list_voices<'a>(&self, search: Option<&'a str>) -> Result<Vec<VoiceSummary>, ApiError> {
        let url = self.endpoint(&["v2", "voices"])?;
        debug!(search, "Listing voices");

        let mut builder = self.http()?.get(url);
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            builder = builder.query(&[("search", search)]);
        }

        let body = Self::check(builder.send()?)?.bytes()?;
        let parsed: VoicesResponse = serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(parsed.voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ApiClient::with_base_url(None, "http://localhost:8080/");
        let url = client.endpoint(&["v2", "voices"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/v2/voices");
    }

    #[test]
    fn test_endpoint_encodes_voice_id() {
        let client = ApiClient::with_base_url(None, BASE_URL);
        let url = client
            .endpoint(&["v1", "text-to-speech", "abc?output_format=wav&x=1"])
            .unwrap();

        assert_eq!(url.query(), None);
        assert_eq!(url.path(), "/v1/text-to-speech/abc%3Foutput_format=wav&x=1");

        let url = client.endpoint(&["v1", "text-to-speech", "a/b"]).unwrap();
        assert_eq!(url.path(), "/v1/text-to-speech/a%2Fb");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base_url() {
        let client = ApiClient::with_base_url(None, "not a url");

        assert!(matches!(
            client.endpoint(&["v2", "voices"]),
            Err(ApiError::InvalidRequest(_))
        ));
    }
}
