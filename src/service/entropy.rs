//! Secure randomness seam.
//!
//! The generator only needs two primitives from its random source: an
//! unbiased integer below a bound and a buffer of random bytes. Both are
//! fallible so an unavailable OS entropy pool surfaces as
//! [`GenerateError::EntropySourceFailure`] instead of a panic.

use std::num::NonZeroUsize;

use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

use crate::error::{GenerateError, Result};

/// A cryptographically secure random source.
pub trait EntropySource {
    /// Draw an integer uniformly from `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EntropySourceFailure`] if the source fails.
    fn uniform_int(&mut self, n: NonZeroUsize) -> Result<usize>;

    /// Fill `dest` with uniformly random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EntropySourceFailure`] if the source fails.
    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Any crypto-grade RNG from the `rand` ecosystem is an entropy source.
///
/// Infallible generators such as `StdRng` qualify through `rand`'s own
/// blanket `TryRngCore` impl.
impl<R: TryCryptoRng + ?Sized> EntropySource for R {
    fn uniform_int(&mut self, n: NonZeroUsize) -> Result<usize> {
        let bound = n.get() as u64;
        // Largest multiple of `bound` that fits; values at or above it are
        // redrawn so every residue is equally likely.
        let zone = u64::MAX - u64::MAX % bound;
        loop {
            let value = self.try_next_u64().map_err(entropy_failure)?;
            if value < zone {
                #[allow(clippy::cast_possible_truncation)]
                return Ok((value % bound) as usize);
            }
        }
    }

    fn random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest).map_err(entropy_failure)
    }
}

/// The operating system CSPRNG.
#[must_use]
pub const fn os() -> OsRng {
    OsRng
}

fn entropy_failure(err: impl std::fmt::Display) -> GenerateError {
    GenerateError::EntropySourceFailure(err.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;

    use rand::{TryCryptoRng, TryRngCore};

    /// A source whose entropy pool is never available.
    pub struct Exhausted;

    impl TryRngCore for Exhausted {
        type Error = io::Error;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Err(io::Error::other("entropy pool unavailable"))
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Err(io::Error::other("entropy pool unavailable"))
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Self::Error> {
            Err(io::Error::other("entropy pool unavailable"))
        }
    }

    impl TryCryptoRng for Exhausted {}
}
