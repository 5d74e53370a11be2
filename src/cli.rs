//! Command-line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::SplitError;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("BURGER_SPLIT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BURGER_SPLIT_BUILD_DATE"),
    ")"
);

/// Split a concatenated hamburgers stylesheet into one standalone stylesheet
/// per animation, rescoped to the host's burger button.
#[derive(Debug, Parser)]
#[command(name = "burger-split", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Combined stylesheet to split [default: src/hamburgers.css]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory receiving <identifier>.css files [default: src]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file overriding paths and template values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show what would be generated without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge flags over the config file over built-in defaults.
    pub fn effective_config(&self) -> Result<Config, SplitError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.paths.output_dir = output_dir.clone();
        }
        Ok(config)
    }

    /// Log filter implied by `-v` flags, if any were given.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    }
}
