//! Command implementations shared by the binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::api::{SpeechBackend, SpeechRequest};

/// Print the available voices, one per line.
pub fn list_voices<B: SpeechBackend>(
    backend: &B,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let voices = backend.list_voices(search).context("Failed to list voices")?;

    if voices.is_empty() {
        writeln!(out, "No voices found.")?;
        return Ok(());
    }

    writeln!(out, "Available voices:")?;
    for voice in voices {
        writeln!(out, "  {} ({})", voice.name, voice.category)?;
        writeln!(out, "    Id: {}", voice.voice_id)?;
    }

    Ok(())
}

/// Synthesize `request` and write the audio to `output`, or to the
/// suggested filename when no path is given. Returns the written path.
pub fn generate_speech<B: SpeechBackend>(
    backend: &B,
    request: &SpeechRequest,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<PathBuf> {
    writeln!(out, "Generating speech...")?;
    writeln!(out, "  Voice: {}", request.voice_id)?;
    writeln!(out, "  Model: {}", request.model_id)?;

    let speech = backend
        .synthesize_speech(request)
        .context("Failed to synthesize speech")?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(speech.filename));

    speech
        .save(&path)
        .with_context(|| format!("Failed to write audio to: {}", path.display()))?;
    info!(path = %path.display(), bytes = speech.data.len(), "Audio saved");

    writeln!(out, "Audio saved to: {}", path.display())?;
    writeln!(out, "  Size: {} bytes ({})", speech.data.len(), speech.content_type)?;

    Ok(path)
}
