use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod config;
mod error;
mod fixtures;
mod maintenance;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("segno: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();

    match cli.command {
        Command::Generate { root, output } => {
            let root = catalog::resolve_root(root, &settings.library)?;
            let generated =
                catalog::generate(&root, &settings.library, settings.catalog.workers)?;
            if generated.is_empty() {
                warn!("no audio files found under {}", root.display());
            }
            let output = output.unwrap_or_else(|| settings.catalog.output.clone());
            generated.write(&output)?;
            info!(
                "catalog written to {} ({} entries)",
                output.display(),
                generated.len()
            );
        }
        Command::Reset => maintenance::reset(&settings)?,
        Command::Seed(args) => fixtures::seed(
            &args.dir,
            &args.mirror,
            args.artists,
            args.albums,
            args.tracks,
            args.chance,
        )?,
    }

    Ok(())
}

/// Load settings, falling back to defaults when the config is absent or invalid.
fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; a broken file should not prevent a run.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
