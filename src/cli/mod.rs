//! CLI argument parsing and command execution.

mod args;
mod commands;

pub use args::{Args, ArgsError};
pub use commands::{generate_speech, list_voices};
