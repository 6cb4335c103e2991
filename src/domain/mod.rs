//! Domain models for pwgen.
//!
//! This module contains the character class constants and the immutable
//! configuration value handed to the generator.

pub mod charset;
pub mod options;

pub use charset::CharClass;
pub use options::{Format, GeneratorConfig, MAX_LENGTH};
