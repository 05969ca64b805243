//! redflag-favicon - generates the RedFlag favicon set
//!
//! Draws the flag badge procedurally at every configured size and writes:
//! - `favicon.ico` holding 16, 32, 48, 64 and 128 pixel frames
//! - `favicon-{w}x{h}.png` for 16, 32, 96, 180, 192 and 512 pixels

mod assets;
mod cli;
mod config;
mod core;
mod generator;
mod logging;
mod render;

use anyhow::Context;
use assets::AssetError;
use clap::Parser;
use cli::{exit_codes, Cli};
use config::{ConfigError, GeneratorConfig};
use generator::Generator;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match generate(&cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            tracing::error!("favicon generation failed: {:#}", e);
            eprintln!("Error: {:?}", e);
            categorize_error(&e)
        }
    }
}

fn generate(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(out_dir) = &cli.out_dir {
        config.output_dir = out_dir.clone();
    }
    if cli.apple_touch_icon {
        config = config.with_apple_touch_icon();
    }
    config.validate()?;

    Generator::new(config)
        .run(cli.targets())
        .context("writing favicon assets")?;
    Ok(())
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    for cause in e.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return exit_codes::CONFIG_ERROR;
        }
        if let Some(asset) = cause.downcast_ref::<AssetError>() {
            return if asset.is_filesystem() {
                exit_codes::FILESYSTEM_ERROR
            } else {
                exit_codes::UNEXPECTED_FAILURE
            };
        }
    }
    exit_codes::UNEXPECTED_FAILURE
}
