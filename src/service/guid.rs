//! UUID v4 construction.

use uuid::{Builder, Uuid};

use crate::error::Result;
use crate::service::entropy::EntropySource;

/// Build an RFC 4122 version 4 UUID from 16 random bytes.
///
/// The version nibble of byte 6 becomes `0100` and the top two bits of
/// byte 8 become `10`; the remaining 122 bits come straight from `rng`.
///
/// # Errors
///
/// Returns an error if the entropy source fails.
pub fn uuid_v4<E>(rng: &mut E) -> Result<Uuid>
where
    E: EntropySource + ?Sized,
{
    let mut bytes = [0u8; 16];
    rng.random_bytes(&mut bytes)?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}

/// Render a UUID in the lowercase 8-4-4-4-12 hyphenated layout.
#[must_use]
pub fn to_hyphenated(uuid: &Uuid) -> String {
    uuid.hyphenated().to_string()
}
