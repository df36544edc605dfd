//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, CipherError>`](CipherError).

use thiserror::Error;

/// The error type for all encode/decode operations.
///
/// Every failure is returned as an `Err` value; the pipeline never panics
/// on caller input and never partially mutates caller-visible state before
/// failing. Failures are deterministic, so retrying with identical inputs
/// is pointless and is never attempted internally.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Empty password or empty payload.
    ///
    /// Reported before any transformation runs.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A tunable is out of range (`rounds < 1` or `block_size < 1`).
    ///
    /// Reported before any transformation runs, regardless of whether the
    /// PBR stage is enabled.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Ciphertext is not valid base64.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] base64::DecodeError),

    /// The PBR inverse stage could not be completed.
    #[error("PBR decode error: {0}")]
    PbrDecode(&'static str),

    /// The fully inverted byte sequence is not valid UTF-8.
    ///
    /// This is the expected outcome when the password or tunables do not
    /// match the ones used at encode time. The scheme carries no integrity
    /// tag, so this detection is probabilistic: a mismatch can also
    /// produce garbled-but-valid text.
    #[error("text decode error: {0}")]
    TextDecode(#[from] std::string::FromUtf8Error),
}
