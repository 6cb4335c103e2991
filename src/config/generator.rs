//! Generator defaults.

use serde::Deserialize;

/// Defaults applied when a command line flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorDefaults {
    /// Output format name: "generic", "appkey", or "guid".
    #[serde(default = "default_format")]
    pub format: String,

    /// Total length for the generic format.
    #[serde(default = "default_length")]
    pub length: i64,

    /// Include lowercase letters.
    #[serde(default = "default_enabled")]
    pub lower: bool,

    /// Include uppercase letters.
    #[serde(default = "default_enabled")]
    pub upper: bool,

    /// Include digits.
    #[serde(default = "default_enabled")]
    pub number: bool,

    /// Include symbols.
    #[serde(default = "default_enabled")]
    pub symbol: bool,

    /// Minimum lowercase letters.
    #[serde(default)]
    pub min_lower: i64,

    /// Minimum uppercase letters.
    #[serde(default)]
    pub min_upper: i64,

    /// Minimum digits.
    #[serde(default)]
    pub min_number: i64,

    /// Minimum symbols.
    #[serde(default)]
    pub min_symbol: i64,

    /// Number of app key segments.
    #[serde(default = "default_segments")]
    pub segments: i64,

    /// Characters per app key segment.
    #[serde(default = "default_segment_length")]
    pub segment_length: i64,
}

fn default_format() -> String {
    "generic".to_string()
}

const fn default_length() -> i64 {
    16
}

const fn default_enabled() -> bool {
    true
}

const fn default_segments() -> i64 {
    4
}

const fn default_segment_length() -> i64 {
    4
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            format: default_format(),
            length: default_length(),
            lower: true,
            upper: true,
            number: true,
            symbol: true,
            min_lower: 0,
            min_upper: 0,
            min_number: 0,
            min_symbol: 0,
            segments: default_segments(),
            segment_length: default_segment_length(),
        }
    }
}
