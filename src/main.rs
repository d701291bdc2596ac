//! elevenlabs-rs CLI entry point.

use std::io;

use anyhow::Result;
use clap::Parser;
use elevenlabs_rs::cli::{self, Args};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(key) = args.api_key.clone() {
        elevenlabs_rs::configure(|settings| settings.api_key = Some(key));
    }

    let client = elevenlabs_rs::client();
    debug!(
        base_url = client.base_url(),
        has_key = client.api_key().is_some(),
        "Client ready"
    );
    let mut stdout = io::stdout().lock();

    // Handle utility commands first
    if args.list_voices {
        return cli::list_voices(client.as_ref(), args.search.as_deref(), &mut stdout);
    }

    if let Some(request) = args.speech_request()? {
        cli::generate_speech(
            client.as_ref(),
            &request,
            args.output.as_deref(),
            &mut stdout,
        )?;
        return Ok(());
    }

    eprintln!("No action specified. Use -g to generate speech or --list-voices.");
    eprintln!("Run with --help for usage information.");

    Ok(())
}
