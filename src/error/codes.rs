//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Format selection errors
//! - 3xxx: Validation errors
//! - 5xxx: Entropy/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Format Errors (1xxx) =====

    /// Output format name not recognized.
    pub const UNKNOWN_FORMAT: Self = Self(1001);

    // ===== Validation Errors (3xxx) =====

    /// Minimum requested for a disabled character class.
    pub const DISABLED_CLASS_MINIMUM: Self = Self(3001);

    /// Every character class is disabled.
    pub const NO_CLASSES_ENABLED: Self = Self(3002);

    /// A minimum count is negative.
    pub const NEGATIVE_MINIMUM: Self = Self(3003);

    /// Minimum counts add up to more than the requested length.
    pub const MINIMA_EXCEED_LENGTH: Self = Self(3004);

    /// Requested length is out of range.
    pub const INVALID_LENGTH: Self = Self(3005);

    /// App key segment count is not positive.
    pub const INVALID_SEGMENT_COUNT: Self = Self(3006);

    /// App key segment length is not positive.
    pub const INVALID_SEGMENT_LENGTH: Self = Self(3007);

    // ===== Entropy/System Errors (5xxx) =====

    /// Secure random source failed.
    pub const ENTROPY_SOURCE_FAILURE: Self = Self(5001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Format,
            3000..=3999 => ErrorCategory::Validation,
            5000..=5999 => ErrorCategory::Entropy,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Format selection errors (1xxx).
    Format,
    /// Configuration validation errors (3xxx).
    Validation,
    /// Entropy source errors (5xxx).
    Entropy,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::Validation => write!(f, "validation"),
            Self::Entropy => write!(f, "entropy"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::UNKNOWN_FORMAT.as_i32(), 1001);
        assert_eq!(ErrorCode::DISABLED_CLASS_MINIMUM.as_i32(), 3001);
        assert_eq!(ErrorCode::INVALID_SEGMENT_LENGTH.as_i32(), 3007);
        assert_eq!(ErrorCode::ENTROPY_SOURCE_FAILURE.as_i32(), 5001);
        assert_eq!(i32::from(ErrorCode::NO_CLASSES_ENABLED), 3002);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorCode::UNKNOWN_FORMAT.category(), ErrorCategory::Format);
        assert_eq!(
            ErrorCode::MINIMA_EXCEED_LENGTH.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::ENTROPY_SOURCE_FAILURE.category(),
            ErrorCategory::Entropy
        );
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
