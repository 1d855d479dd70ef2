//! PDF merge orchestration.
//!
//! [`Merger`] drives a run over an ordered list of inputs and reports what
//! happened to each one in a [`MergeOutcome`]. [`PageSplicer`] does the
//! page tree surgery.

pub mod merger;
pub mod pages;

pub use merger::{MergeOutcome, MergePlan, Merger, ProcessedInput, SkippedInput};
pub use pages::PageSplicer;
