//! Output formatting and display for pdf-merger.
//!
//! This module handles all user-facing console output:
//! - Leveled status messages with quiet and verbose modes
//! - Merge plans and run summaries
//! - The `--json` run report
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::output::OutputFormatter;
//! use pdf_merger::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Starting merge operation");
//! formatter.success("Merge completed successfully");
//! # }
//! ```

pub mod formatter;
pub mod report;

pub use formatter::{MessageLevel, OutputFormatter};
pub use report::{MergeReport, ReportedFile, ReportedSkip};

use crate::merge::MergePlan;

/// Display a dry-run merge plan to the user.
pub fn display_merge_plan(formatter: &OutputFormatter, plan: &MergePlan) {
    formatter.section("Merge plan:");

    for (idx, entry) in plan.entries.iter().enumerate() {
        formatter.list_item(
            idx + 1,
            &format!("{} ({} pages)", entry.path.display(), entry.pages),
        );
    }

    for skipped in &plan.skipped {
        formatter.warning(&format!(
            "Would skip {}: {}",
            skipped.path.display(),
            skipped.error.short_reason()
        ));
    }

    formatter.section(&format!(
        "Total pages in merged document: {}",
        plan.total_pages()
    ));
}
