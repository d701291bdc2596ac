//! Process-wide settings and the cached default client.

use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::{
    ApiClient, ApiError, BASE_URL, SpeechBackend, SpeechRequest, SpeechResult, VoiceSummary,
};

/// Environment variable read when no API key is configured.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit API key. Takes precedence over [`API_KEY_ENV`].
    pub api_key: Option<String>,
}

impl Settings {
    /// Resolve the API key: explicit value, then the environment.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
    }
}

struct State {
    settings: Settings,
    client: Option<Arc<ApiClient>>,
}

static STATE: Mutex<State> = Mutex::new(State {
    settings: Settings { api_key: None },
    client: None,
});

fn state() -> MutexGuard<'static, State> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Update the process-wide settings.
///
/// The callback runs with the settings locked, so concurrent updates are
/// applied one after another. It must read through its `&mut Settings` and
/// not call back into this module.
///
/// ```
/// elevenlabs_rs::configure(|settings| settings.api_key = Some("my-key".to_string()));
/// assert_eq!(elevenlabs_rs::api_key().as_deref(), Some("my-key"));
/// ```
pub fn configure<F>(update: F)
where
    F: FnOnce(&mut Settings),
{
    update(&mut state().settings);
}

/// The configured API key, falling back to `ELEVENLABS_API_KEY`.
pub fn api_key() -> Option<String> {
    state().settings.api_key()
}

/// The default client, built with the current key on first use.
pub fn client() -> Arc<ApiClient> {
    let mut state = state();
    if let Some(client) = &state.client {
        return Arc::clone(client);
    }

    let client = Arc::new(ApiClient::with_base_url(state.settings.api_key(), BASE_URL));
    state.client = Some(Arc::clone(&client));
    client
}

/// Drop the cached default client; the next use rebuilds it.
pub fn reset_client() {
    state().client = None;
}

/// Synthesize speech with the default client.
pub fn text_to_speech(request: &SpeechRequest) -> Result<SpeechResult, ApiError> {
    client().synthesize_speech(request)
}

/// List voices with the default client.
pub fn list_voices(search: Option<&str>) -> Result<Vec<VoiceSummary>, ApiError> {
    client().list_voices(search)
}
