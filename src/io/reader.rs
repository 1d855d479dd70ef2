//! PDF reading and loading operations.
//!
//! Every failure is reported as one of the per-input errors
//! ([`MergerError::InputSkipped`], [`MergerError::InputEncrypted`],
//! [`MergerError::InputUnreadable`]) so the merger can record it and move on.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::io::PdfReader;
//! use std::path::Path;
//!
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("chapter1.pdf"))?;
//! println!("{} pages", loaded.page_count);
//! # Ok::<(), pdf_merger::MergerError>(())
//! ```

use lopdf::{Document, Object};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergerError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }

    /// PDF header version, e.g. `1.7`.
    pub fn version(&self) -> &str {
        &self.document.version
    }

    /// Width and height of the first page in points, when it declares a MediaBox.
    pub fn first_page_size(&self) -> Option<(f32, f32)> {
        let (_, page_id) = self.document.get_pages().into_iter().next()?;
        let page = self.document.get_dictionary(page_id).ok()?;
        let mediabox = page.get(b"MediaBox").and_then(Object::as_array).ok()?;

        match mediabox.as_slice() {
            [x0, y0, x1, y1] => {
                let width = x1.as_float().ok()? - x0.as_float().ok()?;
                let height = y1.as_float().ok()? - y0.as_float().ok()?;
                Some((width, height))
            }
            _ => None,
        }
    }
}

/// Loads input PDFs one at a time.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`MergerError::InputSkipped`] if nothing (or a directory) is at `path`
    /// - [`MergerError::InputEncrypted`] if the document needs a password
    /// - [`MergerError::InputUnreadable`] for any other read or parse failure
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let start = Instant::now();
        let document = Document::load(path).map_err(|e| classify_load_error(path, &e))?;

        Ok(LoadedPdf::new(document, path.to_path_buf(), start.elapsed()))
    }

    /// Fail with [`MergerError::InputSkipped`] unless `path` is a regular file.
    pub fn check_path_exists(path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(MergerError::input_skipped(path.to_path_buf()))
        }
    }
}

fn classify_load_error(path: &Path, err: &lopdf::Error) -> MergerError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("encrypt") || lowered.contains("password") || lowered.contains("decrypt") {
        MergerError::input_encrypted(path.to_path_buf())
    } else {
        MergerError::input_unreadable(path.to_path_buf(), message)
    }
}
