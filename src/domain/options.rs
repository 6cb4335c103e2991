//! Generator configuration types.

use std::str::FromStr;

use crate::domain::CharClass;
use crate::error::GenerateError;

/// Longest secret, in characters, a single call will compose.
///
/// Applies to the generic length and to an app key's total character
/// count; larger requests fail with [`GenerateError::InvalidLength`].
pub const MAX_LENGTH: usize = 1 << 20;

/// Overall output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Random characters drawn from the enabled classes.
    #[default]
    Generic,
    /// Dash-separated groups, e.g. `XXXX-XXXX-XXXX`.
    AppKey,
    /// RFC 4122 version 4 UUID.
    Guid,
}

impl Format {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::AppKey => "appkey",
            Self::Guid => "guid",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Self::Generic),
            "appkey" => Ok(Self::AppKey),
            "guid" => Ok(Self::Guid),
            other => Err(GenerateError::UnknownFormat(other.to_string())),
        }
    }
}

/// Immutable input to a single generation call.
///
/// Numeric fields are signed so that out-of-range values coming from the
/// command line or the environment are rejected by validation rather than
/// by parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output format.
    pub format: Format,
    /// Total length (generic format only).
    pub length: i64,

    /// Include lowercase letters.
    pub use_lower: bool,
    /// Include uppercase letters.
    pub use_upper: bool,
    /// Include digits.
    pub use_number: bool,
    /// Include symbols.
    pub use_symbol: bool,

    /// Minimum lowercase letters.
    pub min_lower: i64,
    /// Minimum uppercase letters.
    pub min_upper: i64,
    /// Minimum digits.
    pub min_number: i64,
    /// Minimum symbols.
    pub min_symbol: i64,

    /// Number of groups (appkey format only).
    pub segments: i64,
    /// Characters per group (appkey format only).
    pub segment_length: i64,
}

impl GeneratorConfig {
    /// Whether a character class is switched on.
    #[must_use]
    pub const fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.use_lower,
            CharClass::Upper => self.use_upper,
            CharClass::Number => self.use_number,
            CharClass::Symbol => self.use_symbol,
        }
    }

    /// Requested minimum for a character class.
    #[must_use]
    pub const fn minimum(&self, class: CharClass) -> i64 {
        match class {
            CharClass::Lower => self.min_lower,
            CharClass::Upper => self.min_upper,
            CharClass::Number => self.min_number,
            CharClass::Symbol => self.min_symbol,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            format: Format::Generic,
            length: 16,
            use_lower: true,
            use_upper: true,
            use_number: true,
            use_symbol: true,
            min_lower: 0,
            min_upper: 0,
            min_number: 0,
            min_symbol: 0,
            segments: 4,
            segment_length: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("generic".parse::<Format>(), Ok(Format::Generic));
        assert_eq!("appkey".parse::<Format>(), Ok(Format::AppKey));
        assert_eq!("guid".parse::<Format>(), Ok(Format::Guid));
        assert_eq!(
            "GUID".parse::<Format>(),
            Err(GenerateError::UnknownFormat("GUID".to_string()))
        );
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_round_trips_through_display() {
        for format in [Format::Generic, Format::AppKey, Format::Guid] {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.format, Format::Generic);
        assert_eq!(config.length, 16);
        assert!(CharClass::ALL.into_iter().all(|c| config.is_enabled(c)));
        assert!(CharClass::ALL.into_iter().all(|c| config.minimum(c) == 0));
        assert_eq!(config.segments, 4);
        assert_eq!(config.segment_length, 4);
    }

    #[test]
    fn test_class_accessors() {
        let config = GeneratorConfig {
            use_upper: false,
            min_number: 3,
            ..Default::default()
        };
        assert!(!config.is_enabled(CharClass::Upper));
        assert!(config.is_enabled(CharClass::Symbol));
        assert_eq!(config.minimum(CharClass::Number), 3);
        assert_eq!(config.minimum(CharClass::Lower), 0);
    }
}
