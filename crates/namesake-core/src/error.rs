//! Error types.
//!
//! Degenerate name input (empty strings, empty groups) is never an error:
//! every string operation in this crate is total and maps such input to a
//! defined empty or zero result. The only fallible surface is matcher
//! construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NameMatchError {
    /// The configured match threshold falls outside [0, 1].
    #[error("match threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
}
