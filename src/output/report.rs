//! Machine-readable run report, printed with `--json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MergerError, Result};
use crate::merge::{MergeOutcome, MergePlan, ProcessedInput, SkippedInput};

/// An input that was (or would be) merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedFile {
    /// Path of the input.
    pub path: PathBuf,

    /// Number of pages it contributes.
    pub page_count: usize,
}

/// An input that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedSkip {
    /// Path of the input.
    pub path: PathBuf,

    /// Short reason it was skipped.
    pub reason: String,
}

/// Summary of a merge run or dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Destination path.
    pub output: PathBuf,

    /// Whether the output was written (always false for a dry run).
    pub success: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Number of inputs merged.
    pub files_merged: usize,

    /// Number of inputs skipped.
    pub files_skipped: usize,

    /// Pages in the merged document.
    pub total_pages: usize,

    /// Bytes written, when the output was written.
    pub bytes_written: Option<u64>,

    /// Merged inputs, in output order.
    pub files: Vec<ReportedFile>,

    /// Skipped inputs.
    pub skipped: Vec<ReportedSkip>,

    /// Why the run failed, if it did.
    pub error: Option<String>,
}

impl MergeReport {
    /// Build a report from a finished merge.
    pub fn from_outcome(output: &Path, outcome: &MergeOutcome) -> Self {
        let (bytes_written, error) = match &outcome.result {
            Ok(stats) => (Some(stats.file_size), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            output: output.to_path_buf(),
            success: outcome.is_success(),
            dry_run: false,
            files_merged: outcome.processed_count(),
            files_skipped: outcome.skipped_count(),
            total_pages: outcome.total_pages(),
            bytes_written,
            files: reported_files(&outcome.processed),
            skipped: reported_skips(&outcome.skipped),
            error,
        }
    }

    /// Build a report from a dry-run plan.
    pub fn from_plan(output: &Path, plan: &MergePlan) -> Self {
        Self {
            output: output.to_path_buf(),
            success: false,
            dry_run: true,
            files_merged: plan.entries.len(),
            files_skipped: plan.skipped.len(),
            total_pages: plan.total_pages(),
            bytes_written: None,
            files: reported_files(&plan.entries),
            skipped: reported_skips(&plan.skipped),
            error: None,
        }
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails if a path is not valid UTF-8.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MergerError::other(format!("Failed to render JSON report: {e}")))
    }
}

fn reported_files(inputs: &[ProcessedInput]) -> Vec<ReportedFile> {
    inputs
        .iter()
        .map(|input| ReportedFile {
            path: input.path.clone(),
            page_count: input.pages,
        })
        .collect()
}

fn reported_skips(inputs: &[SkippedInput]) -> Vec<ReportedSkip> {
    inputs
        .iter()
        .map(|input| ReportedSkip {
            path: input.path.clone(),
            reason: input.error.short_reason(),
        })
        .collect()
}
