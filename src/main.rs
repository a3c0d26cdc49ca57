//! Pokedex - A REPL client for browsing PokeAPI location areas

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{CommandRegistry, Config, PokeClient, Repl, TimedCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and command table
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
/// 6. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines don't interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, http_timeout={}s",
        config.cache_interval, config.base_url, config.http_timeout
    );

    let cache = Arc::new(TimedCache::new(config.cache_interval()));
    let client = PokeClient::from_config(&config, cache.clone())
        .context("Failed to build HTTP client")?;

    let mut repl = Repl::new(CommandRegistry::builtin(), client);
    let result = repl
        .run(BufReader::new(io::stdin()), &mut io::stdout())
        .await
        .context("REPL terminated on I/O error");

    cache.close().await;
    info!("Cache reaper stopped");

    result
}
