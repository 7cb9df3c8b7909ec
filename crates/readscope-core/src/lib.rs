//! Core library for readscope.
//!
//! Scores a prose document for readability and suggests how to simplify
//! it. Scoring is a pure function of the text and a handful of
//! thresholds: no I/O, no shared state, and no failure modes.
//!
//! # Modules
//!
//! - [`text`] - Paragraph, sentence, and word segmentation
//! - [`syllables`] - Heuristic syllable estimation
//! - [`readability`] - Flesch Reading Ease and Flesch-Kincaid Grade
//! - [`analysis`] - Complex sentences, paragraph structure, and the full report
//! - [`simplify`] - Plain-word substitutions
//! - [`markdown`] - Markdown-to-prose preprocessing
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscope_core::{AnalysisOptions, score_text};
//!
//! let report = score_text(
//!     "We need to utilize this tool prior to launch.",
//!     &AnalysisOptions::default(),
//! );
//! assert_eq!(report.sentence_count, 1);
//! assert_eq!(
//!     report.simplified_text_preview.as_deref(),
//!     Some("We need to use this tool before launch."),
//! );
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod simplify;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisOptions, ReadabilityReport, score_text};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use simplify::{Simplification, simplify_text};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject input larger than `limit` bytes. `None` disables the check.
pub const fn check_input_size(text: &str, limit: Option<usize>) -> InputResult<()> {
    match limit {
        Some(limit) if text.len() > limit => Err(InputError::TooLarge {
            size: text.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
