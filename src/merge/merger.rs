//! Core PDF merging implementation.
//!
//! Inputs are loaded one at a time, strictly in order. The first input that
//! loads becomes the base document and every later one is spliced onto its
//! page tree. An input that is missing or cannot be parsed is recorded as
//! skipped and the merge carries on with the rest.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{MergerError, Result};
use crate::file_list::FileList;
use crate::io::{LoadedPdf, PdfReader, PdfWriter, WriteStatistics};
use crate::merge::pages::PageSplicer;
use crate::output::OutputFormatter;
use crate::utils::format_file_size;

/// An input that made it into the merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedInput {
    /// Path of the input.
    pub path: PathBuf,

    /// Pages it contributed.
    pub pages: usize,
}

/// An input that was left out, and why.
#[derive(Debug)]
pub struct SkippedInput {
    /// Path of the input.
    pub path: PathBuf,

    /// Why it was skipped.
    pub error: MergerError,
}

/// Record of a single merge run.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Inputs merged, in output order.
    pub processed: Vec<ProcessedInput>,

    /// Inputs skipped, in input order.
    pub skipped: Vec<SkippedInput>,

    /// Write statistics, or the reason nothing was written.
    pub result: std::result::Result<WriteStatistics, MergerError>,
}

impl MergeOutcome {
    /// Number of inputs merged.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Number of inputs skipped.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Pages in the merged document.
    pub fn total_pages(&self) -> usize {
        self.processed.iter().map(|input| input.pages).sum()
    }

    /// Whether at least one input was merged and the output was written.
    pub fn is_success(&self) -> bool {
        !self.processed.is_empty() && self.result.is_ok()
    }
}

/// What a merge would do, computed without writing anything.
#[derive(Debug)]
pub struct MergePlan {
    /// Inputs that would be merged, in output order.
    pub entries: Vec<ProcessedInput>,

    /// Inputs that would be skipped.
    pub skipped: Vec<SkippedInput>,
}

impl MergePlan {
    /// Pages the merged document would have.
    pub fn total_pages(&self) -> usize {
        self.entries.iter().map(|entry| entry.pages).sum()
    }
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Writer for the merged output.
    writer: PdfWriter,

    /// Splices page trees together.
    splicer: PageSplicer,

    /// Console output.
    formatter: OutputFormatter,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `writer` for the merged output.
    pub fn with_writer(mut self, writer: PdfWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Report progress through `formatter`.
    pub fn with_formatter(mut self, formatter: OutputFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The formatter this merger reports through.
    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    /// Merge `inputs` into `output`, logging skips as they happen.
    ///
    /// Returns `true` iff at least one input was merged and the output was
    /// written. When no input could be read nothing is written.
    pub fn merge_cli(&self, inputs: &[PathBuf], output: &Path) -> bool {
        let outcome = self.merge_paths(inputs, output);

        if let Err(err) = &outcome.result {
            self.formatter.error(&err.to_string());
        }

        outcome.is_success()
    }

    /// Merge the entries of `list` into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::NoInputsSelected`] without touching `output` if
    /// the list is empty. Every other failure, including a failed write, is
    /// reported through [`MergeOutcome::result`] next to the skip records.
    pub fn merge_interactive(&self, list: &FileList, output: &Path) -> Result<MergeOutcome> {
        if list.is_empty() {
            return Err(MergerError::NoInputsSelected);
        }

        Ok(self.merge_paths(list.paths(), output))
    }

    /// Merge `inputs` in order into `output`.
    ///
    /// This never fails as a whole: per-input problems become skip records
    /// and output problems end up in [`MergeOutcome::result`].
    pub fn merge_paths(&self, inputs: &[PathBuf], output: &Path) -> MergeOutcome {
        let merge_start = Instant::now();
        let mut processed = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();
        let mut merged: Option<Document> = None;

        self.formatter
            .info(&format!("Merging {} file(s) into {}", inputs.len(), output.display()));

        for (idx, path) in inputs.iter().enumerate() {
            self.formatter.debug(&format!(
                "[{}/{}] Processing: {}",
                idx + 1,
                inputs.len(),
                path.display()
            ));

            let pages = self
                .reader
                .load(path)
                .and_then(|loaded| {
                    self.print_pdf_info(&loaded);
                    self.splice(&mut merged, loaded)
                });

            match pages {
                Ok(pages) => {
                    self.formatter.debug(&format!("  {pages} pages added"));
                    processed.push(ProcessedInput {
                        path: path.clone(),
                        pages,
                    });
                }
                Err(error) => {
                    self.formatter.warning(&error.to_string());
                    skipped.push(SkippedInput {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        let result = match merged {
            Some(mut document) => self.finish(&mut document, output),
            None => Err(MergerError::NoFilesToMerge),
        };

        if let Ok(stats) = &result {
            let total_pages: usize = processed.iter().map(|input| input.pages).sum();
            self.formatter.success(&format!(
                "Merged {} file(s) ({total_pages} pages) into {} ({})",
                processed.len(),
                stats.output_path.display(),
                stats.format_file_size()
            ));
            self.formatter.detail(
                "Time",
                &format!("{:.2}s", merge_start.elapsed().as_secs_f64()),
            );
        }

        MergeOutcome {
            processed,
            skipped,
            result,
        }
    }

    /// Load every input and report what a merge would produce.
    pub fn plan(&self, inputs: &[PathBuf]) -> MergePlan {
        let mut entries = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();

        for path in inputs {
            match self.reader.load(path) {
                Ok(loaded) => {
                    self.print_pdf_info(&loaded);
                    entries.push(ProcessedInput {
                        path: path.clone(),
                        pages: loaded.page_count,
                    });
                }
                Err(error) => skipped.push(SkippedInput {
                    path: path.clone(),
                    error,
                }),
            }
        }

        MergePlan { entries, skipped }
    }

    /// Add `loaded` to the accumulated document, returning its page count.
    fn splice(&self, merged: &mut Option<Document>, loaded: LoadedPdf) -> Result<usize> {
        let path = loaded.path;

        let outcome = match merged {
            Some(base) => self.splicer.append(base, loaded.document),
            None => {
                let document = loaded.document;
                let checked = self.splicer.check_page_tree(&document);
                let pages = self.splicer.page_count(&document);
                if checked.is_ok() {
                    *merged = Some(document);
                }
                checked.map(|_| pages)
            }
        };

        // A broken page tree is a property of this input, not of the merge.
        outcome.map_err(|e| match e {
            MergerError::MergeFailed { reason } => MergerError::input_unreadable(path, reason),
            MergerError::Pdf(err) => MergerError::input_unreadable(path, err.to_string()),
            other => other,
        })
    }

    fn finish(&self, document: &mut Document, output: &Path) -> Result<WriteStatistics> {
        document.prune_objects();
        document.renumber_objects();
        self.writer.save(document, output)
    }

    /// Print verbose information about a loaded document.
    fn print_pdf_info(&self, loaded: &LoadedPdf) {
        if !self.formatter.is_verbose() {
            return;
        }

        self.formatter.detail("File", &loaded.path.display().to_string());
        self.formatter.detail("Version", loaded.version());
        self.formatter.detail("Pages", &loaded.page_count.to_string());
        if let Some((width, height)) = loaded.first_page_size() {
            self.formatter
                .detail("Page size", &format!("{width:.1} x {height:.1} pts"));
        }
        self.formatter.detail("Objects", &loaded.document.objects.len().to_string());
        self.formatter.detail("Size", &format_file_size(loaded.file_size));
        self.formatter.detail(
            "Load time",
            &format!("{:.1}ms", loaded.load_time.as_secs_f64() * 1000.0),
        );
    }
}
