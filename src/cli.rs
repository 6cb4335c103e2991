//! Command line interface.
//!
//! Flags are accepted both on the root command and on the `generate`
//! subcommand. A flag that is not given falls back to the loaded
//! [`GeneratorDefaults`].

use clap::{Args, Parser, Subcommand};

use crate::config::GeneratorDefaults;
use crate::domain::{Format, GeneratorConfig};
use crate::error::GenerateError;

/// pwgen generates cryptographically secure passwords / keys.
#[derive(Debug, Parser)]
#[command(name = "pwgen", version)]
#[command(about = "Generate secure passwords, app keys, or GUIDs")]
#[command(long_about = "pwgen generates cryptographically secure passwords / keys.

Formats:
  generic (default) - random characters according to selected classes
  appkey            - segmented key (e.g. XXXX-XXXX-XXXX)
  guid              - RFC 4122 UUID v4

Character classes can be toggled and minimum counts enforced.")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub args: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a password / key (same behavior as the root command)
    #[command(visible_alias = "gen")]
    #[command(after_help = "Examples:
  pwgen generate
  pwgen generate --length 32 --min-number 2 --min-symbol 2
  pwgen generate --format appkey --segments 5 --segment-length 6
  pwgen generate --format guid")]
    Generate,
}

/// Generation flags.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output format: generic|appkey|guid
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Total password length (generic format)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub length: Option<i64>,

    /// Include lowercase letters
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub lower: Option<bool>,

    /// Include uppercase letters
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub upper: Option<bool>,

    /// Include numbers
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub number: Option<bool>,

    /// Include symbols
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub symbol: Option<bool>,

    /// Minimum lowercase letters
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min_lower: Option<i64>,

    /// Minimum uppercase letters
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min_upper: Option<i64>,

    /// Minimum numbers
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min_number: Option<i64>,

    /// Minimum symbols
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min_symbol: Option<i64>,

    /// Number of segments (appkey format)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub segments: Option<i64>,

    /// Length of each segment (appkey format)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub segment_length: Option<i64>,
}

impl GenerateArgs {
    /// Merge flags over `defaults` into a generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownFormat`] if the format name is not
    /// recognized.
    pub fn resolve(&self, defaults: &GeneratorDefaults) -> Result<GeneratorConfig, GenerateError> {
        let format: Format = self
            .format
            .as_deref()
            .unwrap_or(&defaults.format)
            .parse()?;

        Ok(GeneratorConfig {
            format,
            length: self.length.unwrap_or(defaults.length),
            use_lower: self.lower.unwrap_or(defaults.lower),
            use_upper: self.upper.unwrap_or(defaults.upper),
            use_number: self.number.unwrap_or(defaults.number),
            use_symbol: self.symbol.unwrap_or(defaults.symbol),
            min_lower: self.min_lower.unwrap_or(defaults.min_lower),
            min_upper: self.min_upper.unwrap_or(defaults.min_upper),
            min_number: self.min_number.unwrap_or(defaults.min_number),
            min_symbol: self.min_symbol.unwrap_or(defaults.min_symbol),
            segments: self.segments.unwrap_or(defaults.segments),
            segment_length: self.segment_length.unwrap_or(defaults.segment_length),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pwgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_when_no_flags() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        let config = cli.args.resolve(&GeneratorDefaults::default()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--length",
            "32",
            "--symbol=false",
            "--min-number",
            "2",
            "--format",
            "appkey",
            "--segment-length",
            "6",
        ]);
        let config = cli.args.resolve(&GeneratorDefaults::default()).unwrap();
        assert_eq!(config.format, Format::AppKey);
        assert_eq!(config.length, 32);
        assert!(!config.use_symbol);
        assert!(config.use_lower);
        assert_eq!(config.min_number, 2);
        assert_eq!(config.segments, 4);
        assert_eq!(config.segment_length, 6);
    }

    #[test]
    fn test_bare_toggle_enables() {
        let defaults = GeneratorDefaults {
            upper: false,
            ..Default::default()
        };
        let cli = parse(&["--upper"]);
        assert!(cli.args.resolve(&defaults).unwrap().use_upper);
    }

    #[test]
    fn test_generate_subcommand_and_alias() {
        for name in ["generate", "gen"] {
            let cli = parse(&[name, "-l", "20", "-f", "guid"]);
            assert!(matches!(cli.command, Some(Command::Generate)));
            let config = cli.args.resolve(&GeneratorDefaults::default()).unwrap();
            assert_eq!(config.format, Format::Guid);
            assert_eq!(config.length, 20);
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = parse(&["--min-lower", "-1", "--length=-4"]);
        let config = cli.args.resolve(&GeneratorDefaults::default()).unwrap();
        assert_eq!(config.min_lower, -1);
        assert_eq!(config.length, -4);
    }

    #[test]
    fn test_unknown_format() {
        let cli = parse(&["--format", "base64"]);
        assert_eq!(
            cli.args.resolve(&GeneratorDefaults::default()),
            Err(GenerateError::UnknownFormat("base64".to_string()))
        );
    }
}
