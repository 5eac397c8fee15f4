use anyhow::Context;
use bookfinder::cli::Cli;
use bookfinder::config::Config;
use bookfinder::logging::init_tracing;
use bookfinder::ui::runtime;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    // One runtime for the debounce timer and in-flight catalog requests;
    // the UI event loop itself runs on the main thread.
    let tokio_runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;

    tracing::info!(
        base_url = %config.catalog.base_url,
        limit = config.catalog.limit,
        "starting bookfinder"
    );
    runtime::run(&config, tokio_runtime.handle().clone(), cli.query)
}
