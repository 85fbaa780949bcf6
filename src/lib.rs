//! Shared helpers for the irlab demos

use anyhow::Result;
use irlab_sdk::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irlab_sdk=info,irlab_compiler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

/// Print both panes of a session
pub fn show(title: &str, session: &Session) {
    println!("--- {} ---", title);
    println!("[query]\n{}\n", session.query());
    println!("[output]\n{}", session.output());
}
