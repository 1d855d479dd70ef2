//! Error types for pdf-merger.
//!
//! Errors fall into three groups:
//!
//! - **Per-input errors** (`InputSkipped`, `InputUnreadable`, `InputEncrypted`):
//!   recorded against a single input file and never abort a merge.
//! - **Operation errors** (`NoInputsSelected`, `NoSelectionForRemoval`,
//!   `NoFilesToMerge`, output failures): fail the user action as a whole.
//! - **Usage and configuration errors**: reported before any work starts.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdf-merger operations.
pub type Result<T> = std::result::Result<T, MergerError>;

/// Main error type for pdf-merger operations.
#[derive(Debug, thiserror::Error)]
pub enum MergerError {
    /// Command-line arguments are malformed or incomplete.
    #[error("{message}")]
    Usage {
        /// Rendered diagnostic, including the usage line.
        message: String,
    },

    /// Input file does not exist or is not a regular file.
    #[error("File not found, skipped: {}", .path.display())]
    InputSkipped {
        /// Path of the missing input.
        path: PathBuf,
    },

    /// Input file exists but could not be read as a PDF.
    #[error("Failed to read PDF: {}\n  Reason: {reason}", .path.display())]
    InputUnreadable {
        /// Path of the unreadable input.
        path: PathBuf,
        /// What the PDF codec reported.
        reason: String,
    },

    /// Input file is encrypted and cannot be opened without a password.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    InputEncrypted {
        /// Path of the encrypted input.
        path: PathBuf,
    },

    /// A merge was requested while the file list is empty.
    #[error("No PDF files in the list, add some files first")]
    NoInputsSelected,

    /// A removal was requested with nothing selected.
    #[error("No files selected for removal")]
    NoSelectionForRemoval,

    /// Every input was skipped, so there is nothing to write.
    #[error("None of the input files could be merged")]
    NoFilesToMerge,

    /// The output (or its temporary sibling) could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or persisting the output failed.
    #[error("Failed to write output file: {}\n  Reason: {source}", .path.display())]
    OutputWriteFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The merged page tree could not be assembled.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the PDF codec outside of input loading.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<anyhow::Error> for MergerError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl MergerError {
    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an InputSkipped error.
    pub fn input_skipped(path: PathBuf) -> Self {
        Self::InputSkipped { path }
    }

    /// Create an InputUnreadable error.
    pub fn input_unreadable(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::InputUnreadable {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InputEncrypted error.
    pub fn input_encrypted(path: PathBuf) -> Self {
        Self::InputEncrypted { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error only concerns a single input file.
    ///
    /// Recoverable errors are turned into skip records by the merger and
    /// never fail the merge as a whole.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InputSkipped { .. } | Self::InputUnreadable { .. } | Self::InputEncrypted { .. }
        )
    }

    /// Short, single-line reason suitable for list displays and reports.
    pub fn short_reason(&self) -> String {
        match self {
            Self::InputSkipped { .. } => "file not found".to_string(),
            Self::InputUnreadable { reason, .. } => reason.clone(),
            Self::InputEncrypted { .. } => "encrypted".to_string(),
            other => other.to_string(),
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            Self::InputSkipped { .. } => 2,
            Self::InputUnreadable { .. } => 3,
            Self::InputEncrypted { .. } => 3,
            Self::NoInputsSelected => 1,
            Self::NoSelectionForRemoval => 1,
            Self::NoFilesToMerge => 1,
            Self::FailedToCreateOutput { .. } => 5,
            Self::OutputWriteFailure { .. } => 5,
            Self::MergeFailed { .. } => 6,
            Self::InvalidConfig { .. } => 2,
            Self::Io(_) => 5,
            Self::Pdf(_) => 6,
            Self::Other { .. } => 1,
        }
    }
}
