//! Constrained random composition and shuffling.

use std::num::NonZeroUsize;

use crate::error::{GenerateError, Result};
use crate::service::entropy::EntropySource;
use crate::service::pool::ClassPool;

/// Build `length` characters that satisfy every minimum in `pool`.
///
/// Minima are drawn first, class by class, so the returned sequence is
/// clustered; callers must [`shuffle`] it before use.
///
/// # Errors
///
/// Returns an error if the minima do not fit in `length` or the entropy
/// source fails.
pub fn compose<E>(length: usize, pool: &ClassPool, rng: &mut E) -> Result<Vec<u8>>
where
    E: EntropySource + ?Sized,
{
    let minimum = pool.total_minimum();
    if minimum > length {
        return Err(GenerateError::MinimaExceedLength { minimum, length });
    }

    let mut out = Vec::with_capacity(length);

    for entry in pool.entries() {
        let set = entry.class.chars();
        for _ in 0..entry.minimum {
            out.push(pick(set, rng)?);
        }
    }

    let all = pool.union();
    while out.len() < length {
        out.push(pick(&all, rng)?);
    }

    Ok(out)
}

/// Fisher-Yates shuffle in place.
///
/// # Errors
///
/// Returns an error if the entropy source fails.
pub fn shuffle<T, E>(items: &mut [T], rng: &mut E) -> Result<()>
where
    E: EntropySource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(NonZeroUsize::MIN.saturating_add(i))?;
        items.swap(i, j);
    }
    Ok(())
}

fn pick<E>(set: &[u8], rng: &mut E) -> Result<u8>
where
    E: EntropySource + ?Sized,
{
    // Only an empty pool yields an empty set.
    let Some(n) = NonZeroUsize::new(set.len()) else {
        return Err(GenerateError::NoClassesEnabled);
    };
    Ok(set[rng.uniform_int(n)?])
}
