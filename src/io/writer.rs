//! PDF writing and saving operations.
//!
//! By default the document is written to a temporary file next to the
//! destination and renamed over it once fully flushed, so a failed write
//! never leaves a truncated PDF behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), pdf_merger::MergerError> {
//! let stats = PdfWriter::new().save(&mut doc, Path::new("merged.pdf"))?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergerError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write to a temporary file, then rename into place.
    pub atomic: bool,

    /// Compress streams before writing.
    pub compress: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a writer with default options (atomic, compressed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// The options this writer applies.
    pub fn options(&self) -> WriteOptions {
        self.options
    }

    /// Save a PDF document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// - [`MergerError::FailedToCreateOutput`] if the destination (or its
    ///   temporary sibling) cannot be created
    /// - [`MergerError::OutputWriteFailure`] if serialization, flushing or
    ///   the final rename fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        if self.options.compress {
            doc.compress();
        }

        if self.options.atomic {
            self.save_atomic(doc, path)?;
        } else {
            self.save_direct(doc, path)?;
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
            compressed: self.options.compress,
        })
    }

    fn save_atomic(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropping the handle on any early return deletes the temporary file.
        let temp = tempfile::Builder::new()
            .prefix(".pdf-merger-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|e| MergerError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut writer = BufWriter::new(temp);
        write_document(doc, &mut writer, path)?;

        let temp = writer
            .into_inner()
            .map_err(|e| MergerError::OutputWriteFailure {
                path: path.to_path_buf(),
                source: e.into_error(),
            })?;

        temp.persist(path)
            .map_err(|e| MergerError::OutputWriteFailure {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        Ok(())
    }

    fn save_direct(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| MergerError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut writer = BufWriter::new(file);
        write_document(doc, &mut writer, path)
    }
}

fn write_document<W: Write>(doc: &mut Document, writer: &mut W, path: &Path) -> Result<()> {
    doc.save_to(writer)
        .map_err(|e| MergerError::OutputWriteFailure {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|e| MergerError::OutputWriteFailure {
        path: path.to_path_buf(),
        source: e,
    })
}
