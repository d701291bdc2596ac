//! Process-wide configuration.
//!
//! Holds an optional API key override and lazily builds a shared default
//! [`ApiClient`](crate::api::ApiClient) for the convenience entry points.

mod settings;

pub use settings::{
    API_KEY_ENV, Settings, api_key, client, configure, list_voices, reset_client, text_to_speech,
};
