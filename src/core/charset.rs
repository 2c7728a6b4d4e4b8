// src/core/charset.rs
//! Character classes shared by the strength estimator and the generator.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Pool size credited to a password containing any symbol (printable ASCII
/// punctuation), not the generator's `SYMBOLS`.
const SYMBOL_POOL: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Anything outside `[A-Za-z0-9]` counts as a symbol, including non-ASCII.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if c.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }

    pub fn chars(&self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

/// Which character classes occur in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl ClassSet {
    pub fn scan(text: &str) -> Self {
        let mut set = ClassSet::default();
        for c in text.chars() {
            match CharClass::of(c) {
                CharClass::Uppercase => set.upper = true,
                CharClass::Lowercase => set.lower = true,
                CharClass::Digit => set.digit = true,
                CharClass::Symbol => set.symbol = true,
            }
        }
        set
    }

    pub fn diversity(&self) -> usize {
        [self.upper, self.lower, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }

    /// Guess-space per character. Never zero so `log2` stays finite.
    pub fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.lower {
            size += LOWERCASE.len();
        }
        if self.upper {
            size += UPPERCASE.len();
        }
        if self.digit {
            size += DIGITS.len();
        }
        if self.symbol {
            size += SYMBOL_POOL;
        }
        size.max(1)
    }
}
