use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hook_score::{DeviceProfile, Engine, EngineConfig};

#[derive(Parser)]
#[command(
    name = "hook-score",
    about = "Score social-media posts for hook strength, structure and framework fit",
    version
)]
struct Cli {
    /// Files containing one post each (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Device profile that sets the fold window (mobile or desktop)
    #[arg(short, long)]
    profile: Option<DeviceProfile>,

    /// TOML file overriding the default tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(profile) = cli.profile {
        config = config.with_profile(profile);
    }
    let engine = Engine::new(config)?;

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        report(&engine, &input, cli.compact)?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            report(&engine, &text, cli.compact)
                .with_context(|| format!("cannot score {}", path.display()))?;
        }
    }
    Ok(())
}

fn report(engine: &Engine, text: &str, compact: bool) -> Result<()> {
    let result = engine.analyze_post(text)?;
    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");
    Ok(())
}
