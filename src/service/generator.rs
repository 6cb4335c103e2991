//! Top-level generation entry points.
//!
//! [`generate`] dispatches on [`Format`]:
//!
//! - `Guid` builds a UUID v4 and ignores every other field
//! - `AppKey` generates a generic sequence of `segments * segment_length`
//!   characters and splits it into groups
//! - `Generic` validates the class pool, composes, and shuffles

use std::num::NonZeroUsize;

use tracing::debug;

use crate::domain::{Format, GeneratorConfig, MAX_LENGTH};
use crate::error::{GenerateError, Result};
use crate::service::compose::{compose, shuffle};
use crate::service::entropy::{self, EntropySource};
use crate::service::guid;
use crate::service::pool::ClassPool;
use crate::service::segment::join_segments;

/// Generate a secret using the operating system CSPRNG.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the OS entropy
/// source is unavailable.
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    generate_with(config, &mut entropy::os())
}

/// Generate a secret drawing randomness from `rng`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `rng` fails.
pub fn generate_with<E>(config: &GeneratorConfig, rng: &mut E) -> Result<String>
where
    E: EntropySource + ?Sized,
{
    debug!(format = %config.format, "Generating secret");

    match config.format {
        Format::Guid => guid::uuid_v4(rng).map(|uuid| guid::to_hyphenated(&uuid)),
        Format::AppKey => generate_app_key(config, rng),
        Format::Generic => {
            let chars = generate_chars(config, config.length, rng)?;
            Ok(chars.into_iter().map(char::from).collect())
        }
    }
}

/// Generate `segments` dash-separated groups of `segment_length` characters.
fn generate_app_key<E>(config: &GeneratorConfig, rng: &mut E) -> Result<String>
where
    E: EntropySource + ?Sized,
{
    let segments = positive(config.segments)
        .ok_or(GenerateError::InvalidSegmentCount(config.segments))?;
    let segment_length = positive(config.segment_length)
        .ok_or(GenerateError::InvalidSegmentLength(config.segment_length))?;

    let total = segments
        .get()
        .checked_mul(segment_length.get())
        .and_then(|total| i64::try_from(total).ok())
        .ok_or(GenerateError::InvalidSegmentLength(config.segment_length))?;

    debug!(
        segments = segments.get(),
        segment_length = segment_length.get(),
        "Generating app key"
    );

    let chars = generate_chars(config, total, rng)?;
    Ok(join_segments(&chars, segment_length))
}

/// Compose and shuffle `length` characters from the configured classes.
fn generate_chars<E>(config: &GeneratorConfig, length: i64, rng: &mut E) -> Result<Vec<u8>>
where
    E: EntropySource + ?Sized,
{
    let length = positive(length)
        .map(NonZeroUsize::get)
        .filter(|&n| n <= MAX_LENGTH)
        .ok_or(GenerateError::InvalidLength(length))?;
    let pool = ClassPool::from_config(config)?;

    debug!(
        length,
        classes = pool.entries().len(),
        minimum = pool.total_minimum(),
        "Composing characters"
    );

    let mut chars = compose(length, &pool, rng)?;
    shuffle(&mut chars, rng)?;
    Ok(chars)
}

fn positive(value: i64) -> Option<NonZeroUsize> {
    usize::try_from(value).ok().and_then(NonZeroUsize::new)
}
