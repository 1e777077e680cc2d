//! StockAI Web - Rust Implementation
//!
//! Client-side navigation shell for the StockAI front end.

use anyhow::{Context, Result};
use stockai_web::app::{components::layout::BUILD_LABEL, App};
use stockai_web::config::NavConfig;

fn main() -> Result<()> {
    // Initialize logging (tracing subscriber for wasm console or stdout)
    dioxus::logger::initialize_default();

    tracing::info!("Starting StockAI web {}", BUILD_LABEL);

    let config = NavConfig::embedded().context("Failed to load embedded navigation config")?;
    tracing::info!(
        "Navigation config loaded: {} ({} routes)",
        config.brand,
        config.routes.len()
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);

    Ok(())
}
