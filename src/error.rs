//! Crate error types

use thiserror::Error;

/// Errors surfaced by pagination operations.
///
/// Construction never fails (out-of-range requests are normalized, not
/// rejected), so the only failure condition lives on the dynamic payload
/// path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Non-sequence payload: expected a JSON array, got {kind}")]
    NonSequenceData { kind: &'static str },
}
