//! Character classes.
//!
//! Each class is a fixed, ordered set of ASCII characters. The order of
//! [`CharClass::ALL`] is the order in which minimum counts are satisfied.

const LOWER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBER_CHARS: &[u8] = b"0123456789";
const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.?/<>~";

/// A named character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase ASCII letters.
    Lower,
    /// Uppercase ASCII letters.
    Upper,
    /// Decimal digits.
    Number,
    /// Punctuation symbols.
    Symbol,
}

impl CharClass {
    /// All classes in pool order.
    pub const ALL: [Self; 4] = [Self::Lower, Self::Upper, Self::Number, Self::Symbol];

    /// Characters belonging to this class.
    #[must_use]
    pub const fn chars(self) -> &'static [u8] {
        match self {
            Self::Lower => LOWER_CHARS,
            Self::Upper => UPPER_CHARS,
            Self::Number => NUMBER_CHARS,
            Self::Symbol => SYMBOL_CHARS,
        }
    }

    /// Check whether a character belongs to this class.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.chars().contains(&b))
    }

    /// Find the class a character belongs to, if any.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Suffix used by the `--min-*` and toggle flags.
    #[must_use]
    pub const fn flag_name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Number => "number",
            Self::Symbol => "symbol",
        }
    }

    /// Human-readable plural, used in error messages.
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Self::Lower => "lowercase",
            Self::Upper => "uppercase",
            Self::Number => "numbers",
            Self::Symbol => "symbols",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.flag_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharClass::Lower.chars().len(), 26);
        assert_eq!(CharClass::Upper.chars().len(), 26);
        assert_eq!(CharClass::Number.chars().len(), 10);
        assert_eq!(CharClass::Symbol.chars().len(), 27);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for c in (0u8..=127).map(char::from) {
            let owners = CharClass::ALL
                .into_iter()
                .filter(|class| class.contains(c))
                .count();
            assert!(owners <= 1, "{c:?} belongs to {owners} classes");
        }
    }

    #[test]
    fn test_of() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lower));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Upper));
        assert_eq!(CharClass::of('7'), Some(CharClass::Number));
        assert_eq!(CharClass::of('~'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of('-'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
    }
}
