//! Error handling module.
//!
//! Every failure the generator can produce is a variant of [`GenerateError`].
//! Errors carry a stable [`ErrorCode`] so the command line boundary can log
//! them in a machine-readable way before presenting the message.

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

use crate::domain::{CharClass, MAX_LENGTH};

/// Generation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A minimum count was requested for a class that is switched off.
    #[error("min-{} specified but {} disabled", .0.flag_name(), .0.plural_name())]
    DisabledClassMinimum(CharClass),

    /// All character classes are switched off.
    #[error("no character classes enabled")]
    NoClassesEnabled,

    /// A minimum count is below zero.
    #[error("minimum counts cannot be negative (min-{} = {})", .0.flag_name(), .1)]
    NegativeMinimum(CharClass, i64),

    /// The minimum counts cannot fit in the requested length.
    #[error("sum of minimum counts ({minimum}) exceeds requested length {length}")]
    MinimaExceedLength {
        /// Sum of all minimum counts.
        minimum: usize,
        /// Requested output length.
        length: usize,
    },

    /// Requested length is zero, negative, or above [`MAX_LENGTH`].
    #[error("length must be between 1 and {max}, got {0}", max = MAX_LENGTH)]
    InvalidLength(i64),

    /// App key segment count is zero or negative.
    #[error("segments must be > 0, got {0}")]
    InvalidSegmentCount(i64),

    /// App key segment length is zero or negative.
    #[error("segment-length must be > 0, got {0}")]
    InvalidSegmentLength(i64),

    /// Format name did not match any known format.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// The secure random source failed.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),
}

impl GenerateError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::DisabledClassMinimum(_) => ErrorCode::DISABLED_CLASS_MINIMUM,
            Self::NoClassesEnabled => ErrorCode::NO_CLASSES_ENABLED,
            Self::NegativeMinimum(..) => ErrorCode::NEGATIVE_MINIMUM,
            Self::MinimaExceedLength { .. } => ErrorCode::MINIMA_EXCEED_LENGTH,
            Self::InvalidLength(_) => ErrorCode::INVALID_LENGTH,
            Self::InvalidSegmentCount(_) => ErrorCode::INVALID_SEGMENT_COUNT,
            Self::InvalidSegmentLength(_) => ErrorCode::INVALID_SEGMENT_LENGTH,
            Self::UnknownFormat(_) => ErrorCode::UNKNOWN_FORMAT,
            Self::EntropySourceFailure(_) => ErrorCode::ENTROPY_SOURCE_FAILURE,
        }
    }

    /// Log this error with its code and category.
    pub fn report(&self) {
        let code = self.error_code();

        tracing::error!(
            error_code = code.as_i32(),
            category = %code.category(),
            message = %self,
            "Generation failed"
        );
    }
}

/// Result type alias using `GenerateError`.
pub type Result<T> = std::result::Result<T, GenerateError>;
