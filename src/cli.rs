//! CLI argument parsing for pdf-merger.
//!
//! This module defines the command-line interface structure using `clap`.
//! Running the binary with no arguments at all skips this parser and opens
//! the interactive shell instead.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Merging {} files", cli.inputs.len());
//! ```

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{MergerError, Result};
use crate::io::WriteOptions;
use crate::utils::expand_input_patterns;

/// Merge PDF files into a single document.
///
/// Pages are copied in input order. Inputs that are missing or cannot be
/// read are reported and skipped; the rest are still merged.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pdf-merger")]
#[command(version)]
#[command(about = "Merge PDF files into a single document", long_about = None)]
#[command(after_help = "Run without arguments to start the interactive shell.")]
pub struct Cli {
    /// Input PDF files to merge (in order)
    ///
    /// Glob patterns are expanded when the shell did not expand them.
    ///
    /// Examples:
    ///   pdf-merger -o book.pdf intro.pdf chapter1.pdf
    ///   pdf-merger -o book.pdf 'chapter*.pdf'
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// An existing file at this path is replaced, even when it is also one
    /// of the inputs. The value may start with '-'.
    #[arg(short, long, value_name = "FILE", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Dry run - load inputs and show the merge plan without creating output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show detailed information about each PDF
    ///
    /// Displays PDF version, page dimensions, object count and timings
    /// for each input file.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a JSON report of the run on stdout
    ///
    /// Stdout then carries nothing but the report.
    #[arg(long, conflicts_with = "verbose")]
    pub json: bool,

    /// Write streams uncompressed
    #[arg(long)]
    pub no_compress: bool,

    /// Write straight into the output file instead of renaming a finished
    /// temporary file over it
    #[arg(long)]
    pub no_atomic: bool,
}

impl Cli {
    /// Parse arguments, turning clap's diagnostics into [`MergerError::Usage`].
    ///
    /// Returns `Ok(None)` when clap handled the request itself (`--help`,
    /// `--version`) and the process should exit successfully.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::Usage`] with the rendered diagnostic and usage
    /// line for a missing `-o`, missing inputs or an unknown flag.
    pub fn try_parse_args<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.print()?;
                Ok(None)
            }
            Err(err) => Err(MergerError::usage(err.render().to_string())),
        }
    }

    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::InvalidConfig`] if the resulting configuration
    /// fails validation.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            inputs: expand_input_patterns(self.inputs.iter().cloned()),
            output: self.output.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            json: self.json,
            write: WriteOptions {
                atomic: !self.no_atomic,
                compress: !self.no_compress,
            },
        };

        config.validate().map_err(|e| {
            MergerError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }
}

impl TryFrom<&Cli> for Config {
    type Error = MergerError;

    fn try_from(cli: &Cli) -> Result<Self> {
        cli.to_config()
    }
}
