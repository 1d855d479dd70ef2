//! Stateful interactive session.
//!
//! A [`Session`] owns the file list, the current selection and a merger.
//! Every user action arrives as a [`Command`]; the session applies it and
//! reports the result through a [`NotificationSink`]. It never touches
//! presentation, so any front-end (the text shell, a GUI) can drive it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{MergerError, Result};
use crate::file_list::{Direction, FileList, is_pdf_name};
use crate::interactive::notify::{Notification, NotificationSink};
use crate::merge::{MergeOutcome, Merger};
use crate::output::OutputFormatter;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Paths picked by the user; empty means the picker was cancelled.
    Add(Vec<PathBuf>),
    /// Dropped URIs; only `file://` entries are considered, and a drop
    /// without any of them is ignored.
    Drop(Vec<String>),
    /// Replace the selection with these zero-based positions.
    Select(BTreeSet<usize>),
    /// Remove the selected entries.
    RemoveSelected,
    /// Empty the list. Confirmation is the front-end's job.
    Clear,
    /// Move the selected entries one step towards the top.
    MoveUp,
    /// Move the selected entries one step towards the bottom.
    MoveDown,
    /// Merge the list into this path; `None` means the save dialog was cancelled.
    Merge(Option<PathBuf>),
}

/// Interactive merge session.
#[derive(Debug)]
pub struct Session {
    files: FileList,
    selection: BTreeSet<usize>,
    merger: Merger,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session.
    ///
    /// The merger reports nothing on its own; the session's notifications
    /// carry all feedback.
    pub fn new() -> Self {
        Self::with_merger(Merger::new().with_formatter(OutputFormatter::silent()))
    }

    /// Create an empty session that merges with `merger`.
    pub fn with_merger(merger: Merger) -> Self {
        Self {
            files: FileList::new(),
            selection: BTreeSet::new(),
            merger,
        }
    }

    /// The current file list.
    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// The currently selected zero-based positions.
    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    /// Whether a drag carrying `uris` should be accepted.
    ///
    /// True when at least one entry is a `file://` URI naming a `.pdf` file.
    pub fn accepts_drop<S: AsRef<str>>(uris: &[S]) -> bool {
        uris.iter()
            .filter_map(|uri| file_uri_to_path(uri.as_ref()))
            .any(|path| is_pdf_name(&path))
    }

    /// Apply `command`, reporting the result to `sink`.
    ///
    /// This is an action boundary: a failing action becomes a notification
    /// and the session stays usable.
    pub fn dispatch<S: NotificationSink + ?Sized>(&mut self, command: Command, sink: &mut S) {
        if let Err(err) = self.apply(command, sink) {
            sink.notify(Notification::from_error(&err));
        }
    }

    fn apply<S: NotificationSink + ?Sized>(&mut self, command: Command, sink: &mut S) -> Result<()> {
        match command {
            Command::Add(paths) => {
                if !paths.is_empty() {
                    let added = self.files.add(paths);
                    sink.notify(self.added_notification(added));
                }
            }
            Command::Drop(uris) => {
                let paths: Vec<PathBuf> = uris.iter().filter_map(|uri| file_uri_to_path(uri)).collect();
                if paths.is_empty() {
                    return Ok(());
                }

                let added = self.files.add(paths);
                if added == 0 {
                    sink.notify(Notification::warning(
                        "Drop",
                        "No valid PDF files found or already present",
                    ));
                } else {
                    sink.notify(self.added_notification(added));
                }
            }
            Command::Select(indices) => {
                let len = self.files.len();
                self.selection = indices.into_iter().filter(|&idx| idx < len).collect();
            }
            Command::RemoveSelected => {
                let removed = self.files.remove(&self.selection)?;
                self.selection.clear();
                sink.notify(Notification::success(
                    "Files removed",
                    format!("Removed {removed} file(s)"),
                ));
            }
            Command::Clear => {
                if !self.files.is_empty() {
                    self.files.clear();
                    self.selection.clear();
                    sink.notify(Notification::success("List cleared", "All files were removed"));
                }
            }
            Command::MoveUp => {
                self.selection = self.files.move_items(&self.selection, Direction::Up);
            }
            Command::MoveDown => {
                self.selection = self.files.move_items(&self.selection, Direction::Down);
            }
            Command::Merge(Some(output)) => self.merge(&output, sink)?,
            Command::Merge(None) => {}
        }

        Ok(())
    }

    fn merge<S: NotificationSink + ?Sized>(&self, output: &Path, sink: &mut S) -> Result<()> {
        if self.files.is_empty() {
            return Err(MergerError::NoInputsSelected);
        }

        sink.notify(Notification::info("Merge", "Merging..."));
        let outcome = self.merger.merge_interactive(&self.files, output)?;
        report_outcome(&outcome, output, sink);

        Ok(())
    }

    fn added_notification(&self, added: usize) -> Notification {
        let content = format!("Added {added} file(s), {} in list", self.files.len());
        if added > 0 {
            Notification::success("Files added", content)
        } else {
            Notification::info("Files added", content)
        }
    }
}

fn report_outcome<S: NotificationSink + ?Sized>(outcome: &MergeOutcome, output: &Path, sink: &mut S) {
    for skipped in &outcome.skipped {
        sink.notify(Notification::warning(
            "Skipped",
            format!("{}: {}", skipped.path.display(), skipped.error.short_reason()),
        ));
    }

    match &outcome.result {
        Ok(_) => sink.notify(Notification::success(
            "Merge complete",
            format!(
                "Merged {} file(s) into {} pages, saved to {}",
                outcome.processed_count(),
                outcome.total_pages(),
                output.display()
            ),
        )),
        Err(err) => sink.notify(Notification::error("Merge failed", err.to_string())),
    }
}

/// Convert a `file://` URI into a local path, percent-decoding it.
///
/// Returns `None` for other schemes and for URIs that do not decode to
/// UTF-8. A `localhost` authority is accepted; any other host is not.
pub fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.trim().strip_prefix("file://")?;
    let path = match rest.strip_prefix("localhost") {
        Some(after_host) => after_host,
        None => rest,
    };

    if !path.starts_with('/') {
        return None;
    }

    let decoded = urlencoding::decode(path).ok()?;
    Some(PathBuf::from(decoded.into_owned()))
}
