//! Duel arena terminal client.
//!
//! Composition root: reads the environment, loads content, builds the
//! session registry and hands control to the line-based [`app::App`].
//!
//! ```bash
//! ARENA_SEED=7 RUST_LOG=arena_core=debug cargo run -p arena-client
//! ```

mod app;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use arena_content::ContentFactory;
use arena_runtime::{RuntimeConfig, SessionRegistry};
use tokio::io::BufReader;

use crate::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Loading content from {}", factory.data_dir().display());

    let catalog = factory
        .load_catalog()
        .context("failed to load the arena catalog")?;
    let game_config = config.apply(factory.load_config()?);

    let mut registry = SessionRegistry::new(Arc::new(catalog), game_config)?;
    if let Some(seed) = config.seed {
        tracing::info!("Using base seed {}", seed);
        registry = registry.with_seed(seed);
    }

    let input = BufReader::new(tokio::io::stdin());
    App::new(registry, input, std::io::stdout()).run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
