//! Configuration module for pdf-merger.
//!
//! This module holds the validated, normalized configuration that drives a
//! command-line merge. It is built from parsed CLI arguments by
//! [`Cli::to_config`](crate::cli::Cli::to_config), which also expands glob
//! patterns in the input list.

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::io::WriteOptions;

/// Configuration for a command-line merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input paths, in merge order, after glob expansion.
    pub inputs: Vec<PathBuf>,

    /// Output PDF path.
    pub output: PathBuf,

    /// Dry run mode - report the plan without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Print a JSON report on stdout instead of human-readable text.
    pub json: bool,

    /// How the output is written.
    pub write: WriteOptions,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose mode is combined with quiet or JSON mode
    /// - The output path is empty or names a directory
    ///
    /// The output may be one of the inputs: every input is loaded before
    /// the output is written.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if self.verbose && self.json {
            bail!("Cannot use both --verbose and --json");
        }

        if self.output.as_os_str().is_empty() {
            bail!("Output path cannot be empty");
        }

        if self.output.is_dir() {
            bail!("Output path is a directory: {}", self.output.display());
        }

        Ok(())
    }
}
