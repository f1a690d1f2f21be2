//! Logging utilities for output and progress tracking
//!
//! This module provides standardized logging functions for evaluation
//! runs and progress reporting for batch processing.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_batch_complete, log_batch_start, log_triage_outcome};
pub use progress::create_batch_progress_bar;
