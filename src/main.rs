//! pdf-merger - Merge PDF files into a single document.

use pdf_merger::MergerError;
use std::process;

fn main() {
    if let Err(err) = pdf_merger::run() {
        match &err {
            // Already rendered by clap, usage line included.
            MergerError::Usage { message } => eprint!("{message}"),
            _ => eprintln!("Error: {err}"),
        }
        process::exit(err.exit_code());
    }
}
