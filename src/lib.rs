//! pdf-merger - Merge PDF files into a single document.
//!
//! The library has two surfaces over the same merge engine:
//!
//! - a command line (`pdf-merger -o out.pdf a.pdf b.pdf`) that merges the
//!   given inputs in order, skipping any that are missing or unreadable
//! - an interactive session holding an ordered, editable file list, driven
//!   by [`Command`](interactive::Command)s and reporting through
//!   [`Notification`](interactive::Notification)s
//!
//! # Examples
//!
//! ## Command-line merge
//!
//! ```no_run
//! use pdf_merger::merge::Merger;
//! use std::path::{Path, PathBuf};
//!
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let ok = Merger::new().merge_cli(&inputs, Path::new("merged.pdf"));
//! assert!(ok);
//! ```
//!
//! ## Interactive session
//!
//! ```no_run
//! use pdf_merger::interactive::{Command, Notification, Session};
//! use std::path::PathBuf;
//!
//! let mut session = Session::new();
//! let mut notes: Vec<Notification> = Vec::new();
//!
//! session.dispatch(Command::Add(vec![PathBuf::from("a.pdf")]), &mut notes);
//! session.dispatch(Command::Merge(Some(PathBuf::from("out.pdf"))), &mut notes);
//!
//! for note in &notes {
//!     println!("{note}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod file_list;
pub mod interactive;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;


use std::ffi::OsString;

// Re-export commonly used types
pub use config::Config;
pub use error::{MergerError, Result};
pub use file_list::FileList;

use crate::cli::Cli;
use crate::interactive::Shell;
use crate::io::PdfWriter;
use crate::merge::Merger;
use crate::output::{MergeReport, OutputFormatter, display_merge_plan};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run with the process arguments and standard streams.
///
/// # Errors
///
/// See [`run_from`].
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run with explicit arguments; the first one is the program name.
///
/// With no further arguments the interactive shell runs on stdin/stdout.
/// Otherwise the arguments are parsed and a command-line merge runs.
///
/// # Errors
///
/// - [`MergerError::Usage`] for malformed arguments
/// - [`MergerError::InvalidConfig`] for an invalid option mix or output path
/// - [`MergerError::NoFilesToMerge`] when no input could be read
/// - output errors when the merged document cannot be written
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() <= 1 {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return Shell::new(stdin.lock(), stdout.lock()).run();
    }

    let Some(cli) = Cli::try_parse_args(args)? else {
        return Ok(());
    };

    execute(&cli.to_config()?)
}

/// Run a command-line merge (or dry run) described by `config`.
///
/// # Errors
///
/// Same as [`run_from`], minus usage errors.
pub fn execute(config: &Config) -> Result<()> {
    let formatter = OutputFormatter::from_config(config);
    let merger = Merger::new()
        .with_writer(PdfWriter::with_options(config.write))
        .with_formatter(formatter.clone());

    if config.dry_run {
        formatter.info("DRY RUN MODE - No files will be created");

        let plan = merger.plan(config.inputs());
        if config.json {
            println!("{}", MergeReport::from_plan(&config.output, &plan).to_json()?);
        } else {
            display_merge_plan(&formatter, &plan);
            formatter.info(&format!("Output would be: {}", config.output.display()));
        }

        return if plan.entries.is_empty() {
            Err(MergerError::NoFilesToMerge)
        } else {
            Ok(())
        };
    }

    let outcome = merger.merge_paths(config.inputs(), &config.output);

    if config.json {
        println!("{}", MergeReport::from_outcome(&config.output, &outcome).to_json()?);
    } else if let Ok(stats) = &outcome.result {
        formatter.detail("Output size", &stats.format_file_size());
        formatter.detail(
            "Write time",
            &format!("{:.2}s", stats.write_time.as_secs_f64()),
        );
        formatter.detail("Compression", if stats.compressed { "Yes" } else { "No" });
    }

    outcome.result.map(|_| ())
}
