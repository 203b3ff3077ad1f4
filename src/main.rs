use anyhow::Context;
use clap::Parser;
use reelcraft::api::VideoClient;
use reelcraft::config::Config;
use reelcraft::logging::init_tracing;
use reelcraft::ui::runtime::{run, Prefill};
use std::path::PathBuf;
use std::sync::Arc;

/// Turn a still image and a text prompt into a short video.
#[derive(Debug, Parser)]
#[command(name = "reelcraft", version, about)]
struct Args {
    /// Config file (defaults to ~/.config/reelcraft/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image to pre-select
    #[arg(long)]
    image: Option<PathBuf>,

    /// Prompt to pre-fill
    #[arg(long)]
    prompt: Option<String>,

    /// Override the configured model
    #[arg(long)]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(model) = args.model {
        config.api.model = model;
        config.validate()?;
    }

    let api_key = config.resolve_api_key();
    if api_key.is_none() {
        tracing::warn!("No API key found; generation requests will fail");
    }
    tracing::info!(model = %config.api.model, base_url = %config.api.base_url, "Starting reelcraft");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let client = Arc::new(VideoClient::new(&config, api_key)?);
    let output_dir = config.output.resolve_directory();
    let prefill = Prefill {
        image: args.image,
        prompt: args.prompt,
    };

    run(client, runtime.handle().clone(), output_dir, prefill)?;
    Ok(())
}
