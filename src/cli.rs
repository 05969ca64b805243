//! Command-line interface
//!
//! Every flag is optional; running with no arguments generates the full
//! favicon set into `app/`.

use crate::generator::Targets;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const FILESYSTEM_ERROR: i32 = 3;
}

#[derive(Parser, Debug)]
#[command(
    name = "redflag-favicon",
    version,
    about = "Generate the RedFlag favicon set (multi-size ICO plus standalone PNGs)"
)]
pub struct Cli {
    /// Directory to write assets into [default: app]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// TOML file overriding output names and sizes
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only produce one kind of output
    #[arg(long, value_enum)]
    pub only: Option<OnlyOutput>,

    /// Also write apple-touch-icon.png (180x180)
    #[arg(long)]
    pub apple_touch_icon: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long = "json")]
    pub json_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnlyOutput {
    /// The multi-size favicon.ico
    Container,
    /// The per-size PNG files
    Standalone,
}

impl Cli {
    pub fn targets(&self) -> Targets {
        match self.only {
            None => Targets::all(),
            Some(OnlyOutput::Container) => Targets::container_only(),
            Some(OnlyOutput::Standalone) => Targets::standalone_only(),
        }
    }
}
