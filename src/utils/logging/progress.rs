//! Progress reporting utilities for batch evaluation
//!
//! This module provides standardized progress reporting for batch runs,
//! using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a batch evaluation progress bar
pub const BATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a progress bar for a batch evaluation with a standardized style
///
/// Batches small enough to finish instantly get a hidden bar so single
/// evaluations do not draw to the terminal.
#[must_use]
pub fn create_batch_progress_bar(length: u64) -> ProgressBar {
    if length < 2 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(BATCH_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("triage");
    pb
}
