//! Ordered, deduplicated list of input PDF paths.
//!
//! The list is what the interactive surface shows and what a merge consumes.
//! Admission checks (existence, `.pdf` extension, duplicates) happen once in
//! [`FileList::add`]; a path that disappears afterwards is only noticed at
//! merge time.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::file_list::{Direction, FileList};
//! use std::collections::BTreeSet;
//!
//! let mut files = FileList::new();
//! files.add(["a.pdf", "b.pdf", "c.pdf"]);
//!
//! let selection = BTreeSet::from([2]);
//! let moved = files.move_items(&selection, Direction::Up);
//! assert_eq!(moved, BTreeSet::from([1]));
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{MergerError, Result};

/// Direction for [`FileList::move_items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

/// Ordered collection of PDF paths pending a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every candidate that is an existing `.pdf` file not yet listed.
    ///
    /// Candidates are examined in order. Paths are compared exactly as
    /// supplied; no canonicalization happens here. Rejected candidates are
    /// skipped silently.
    ///
    /// # Returns
    ///
    /// The number of paths actually admitted.
    pub fn add<I, P>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.paths.len();

        for candidate in candidates {
            let path = candidate.into();
            if is_pdf_name(&path) && path.is_file() && !self.contains(&path) {
                self.paths.push(path);
            }
        }

        self.paths.len() - before
    }

    /// Remove the entries at the given zero-based positions.
    ///
    /// The remaining entries keep their relative order. Indices past the end
    /// of the list are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::NoSelectionForRemoval`] without touching the
    /// list if `indices` is empty.
    pub fn remove(&mut self, indices: &BTreeSet<usize>) -> Result<usize> {
        if indices.is_empty() {
            return Err(MergerError::NoSelectionForRemoval);
        }

        let before = self.paths.len();
        self.paths = std::mem::take(&mut self.paths)
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !indices.contains(idx))
            .map(|(_, path)| path)
            .collect();

        Ok(before - self.paths.len())
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Move the selected entries one step in `direction`.
    ///
    /// Selected entries keep their relative order: an entry blocked by the
    /// list boundary also blocks every selected entry packed directly behind
    /// it, so no selected entry jumps over another.
    ///
    /// # Returns
    ///
    /// The positions now occupied by the selected entries.
    pub fn move_items(&mut self, indices: &BTreeSet<usize>, direction: Direction) -> BTreeSet<usize> {
        let len = self.paths.len();
        let mut moved = BTreeSet::new();

        match direction {
            Direction::Up => {
                // Lowest position the next selected entry may move into.
                let mut floor = 0;
                for &idx in indices.iter().filter(|&&idx| idx < len) {
                    if idx > floor {
                        self.paths.swap(idx, idx - 1);
                        moved.insert(idx - 1);
                        floor = idx;
                    } else {
                        moved.insert(idx);
                        floor = idx + 1;
                    }
                }
            }
            Direction::Down => {
                let mut ceiling = len;
                for &idx in indices.iter().rev().filter(|&&idx| idx < len) {
                    if idx + 1 < ceiling {
                        self.paths.swap(idx, idx + 1);
                        moved.insert(idx + 1);
                        ceiling = idx + 1;
                    } else {
                        moved.insert(idx);
                        ceiling = idx;
                    }
                }
            }
        }

        moved
    }

    /// Check whether `path` is already listed.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|listed| listed == path)
    }

    /// Number of listed paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Iterate over the listed paths in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// The listed paths in merge order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// File names for display, in list order.
    pub fn display_names(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect()
    }
}

/// Whether the file name ends in `.pdf`, ignoring ASCII case.
pub fn is_pdf_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".pdf"))
}
