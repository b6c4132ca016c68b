//! Viewer-request handler for the CDN: reads one event as JSON on stdin and
//! writes either the untouched request or a 302 redirect as JSON on stdout.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salon_site::edge::event::handle_event_json;

fn main() -> Result<()> {
    // stdout carries the result, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("salon_site=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read event from stdin")?;

    let output = handle_event_json(&raw).context("Invalid viewer-request event")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .context("Failed to write result to stdout")?;

    Ok(())
}
