//! Class pool construction and validation.

use crate::domain::{CharClass, GeneratorConfig};
use crate::error::{GenerateError, Result};

/// An enabled class together with its required minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    /// The character class.
    pub class: CharClass,
    /// Characters from this class that must appear.
    pub minimum: usize,
}

/// Enabled character classes, in fixed lower/upper/number/symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPool {
    entries: Vec<PoolEntry>,
}

impl ClassPool {
    /// Build the pool for a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A minimum is set on a disabled class
    /// - No class is enabled
    /// - Any minimum is negative
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let mut entries = Vec::with_capacity(CharClass::ALL.len());

        for class in CharClass::ALL {
            let minimum = config.minimum(class);
            if config.is_enabled(class) {
                entries.push((class, minimum));
            } else if minimum > 0 {
                return Err(GenerateError::DisabledClassMinimum(class));
            }
        }

        if entries.is_empty() {
            return Err(GenerateError::NoClassesEnabled);
        }

        if let Some(class) = CharClass::ALL
            .into_iter()
            .find(|&class| config.minimum(class) < 0)
        {
            return Err(GenerateError::NegativeMinimum(class, config.minimum(class)));
        }

        // Minima are non-negative here; values past `usize::MAX` clamp and
        // fail the length check later.
        let entries = entries
            .into_iter()
            .map(|(class, minimum)| PoolEntry {
                class,
                minimum: usize::try_from(minimum).unwrap_or(usize::MAX),
            })
            .collect();

        Ok(Self { entries })
    }

    /// Pool entries in minima-satisfaction order.
    #[must_use]
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Sum of all minimum counts, saturating at `usize::MAX`.
    ///
    /// A saturated sum can never fit in a requested length, so callers see
    /// it as `MinimaExceedLength`.
    #[must_use]
    pub fn total_minimum(&self) -> usize {
        self.entries
            .iter()
            .try_fold(0usize, |acc, e| acc.checked_add(e.minimum))
            .unwrap_or(usize::MAX)
    }

    /// Whether a class is part of the pool.
    #[must_use]
    pub fn contains(&self, class: CharClass) -> bool {
        self.entries.iter().any(|e| e.class == class)
    }

    /// Concatenation of every enabled class's characters.
    ///
    /// Filling from this flat set makes larger classes proportionally more
    /// likely; it is not a class-then-character draw.
    #[must_use]
    pub fn union(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|e| e.class.chars().iter().copied())
            .collect()
    }
}
