//! Bounded Cache - replay front end
//!
//! Reads JSON-line cache requests from stdin and writes replies to stdout.

use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::replay::replay;
use bounded_cache::{Config, SharedCache};

/// Entry point for the replay front end.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, stdout carries replies)
/// 2. Load configuration from environment variables
/// 3. Create the shared cache with a channel for discard events
/// 4. Replay stdin until EOF
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting bounded cache replay");

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_items={}, policy={}",
        config.max_items, config.policy
    );

    let (cache, mut discards) = SharedCache::from_config(&config)?;

    let stdin = BufReader::new(io::stdin());
    let summary = replay(&cache, &mut discards, stdin, io::stdout()).await?;

    info!(
        "Replay complete: requests={}, errors={}, discards={}",
        summary.requests, summary.errors, summary.discards
    );
    Ok(())
}
