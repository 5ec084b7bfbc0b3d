use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Music library fingerprint catalog generator.
#[derive(Debug, Parser)]
#[command(name = "segno", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk the configured library root and write the catalog document.
    Generate {
        /// Library root to catalog (overrides `library.root` from the config).
        #[arg(long)]
        root: Option<PathBuf>,
        /// Where to write the catalog (overrides `catalog.output`).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore the default configuration and delete run-local artifacts.
    Reset,
    /// Seed synthetic fixture trees for exercising the generator.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Directory for the full fixture library.
    #[arg(long, default_value = "TestFolder1")]
    pub dir: PathBuf,
    /// Directory for the partial mirror of the fixture library.
    #[arg(long, default_value = "TestFolder2")]
    pub mirror: PathBuf,
    /// Number of artist directories to create.
    #[arg(long, default_value_t = 10)]
    pub artists: u32,
    /// Albums per artist.
    #[arg(long, default_value_t = 3)]
    pub albums: u32,
    /// Tracks per album.
    #[arg(long, default_value_t = 6)]
    pub tracks: u32,
    /// Probability that any one file is copied into the mirror.
    #[arg(long, default_value_t = 0.25)]
    pub chance: f64,
}
