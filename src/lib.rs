//! # pwgen
//!
//! Generates random secrets from the operating system's secure entropy
//! source:
//!
//! - **Generic**: random characters from the enabled classes, with per-class
//!   minimum counts
//! - **App keys**: the same, split into dash-separated segments like
//!   `XXXX-XXXX-XXXX-XXXX`
//! - **GUIDs**: RFC 4122 version 4 UUIDs
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                              pwgen                                │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐  ┌────────────┐  ┌─────────────┐  ┌────────────┐  │
//! │  │    CLI     │  │   Config   │  │   Service   │  │  Entropy   │  │
//! │  │   (clap)   │→ │  (config)  │→ │  generate() │→ │  (OsRng)   │  │
//! │  └────────────┘  └────────────┘  └─────────────┘  └────────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library entry point is [`generate`], a pure function from a
//! [`GeneratorConfig`] to a secret string:
//!
//! ```
//! use pwgen::{Format, GeneratorConfig, generate};
//!
//! let key = generate(&GeneratorConfig {
//!     format: Format::AppKey,
//!     use_symbol: false,
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(key.len(), 19);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::config::AppConfig;

pub use crate::domain::{CharClass, Format, GeneratorConfig};
pub use crate::error::{ErrorCode, GenerateError, Result};
pub use crate::service::{EntropySource, generate, generate_with};

/// Run the pwgen command line tool.
///
/// This function:
/// 1. Parses command line flags
/// 2. Loads configuration from `.env`, files, and environment
/// 3. Initializes logging on stderr
/// 4. Generates the secret and prints it to stdout
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The resolved generator configuration is invalid
/// - The entropy source fails
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config, cli.verbose);

    let options = cli
        .args
        .resolve(&config.generator)
        .inspect_err(GenerateError::report)?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        format = %options.format,
        "Resolved generator configuration"
    );

    let secret = generate(&options).inspect_err(GenerateError::report)?;
    println!("{secret}");

    Ok(())
}

/// Initialize logging based on configuration.
///
/// Logs go to stderr; stdout carries only the generated secret.
fn init_logging(config: &AppConfig, verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pwgen=debug,warn")
        } else {
            EnvFilter::new(&config.observability.log_level)
        }
    });

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
