// Cipher key resolution.

use std::fmt;

/// Key handed to a cipher.
///
/// Keyed ciphers (Caesar) either apply one specific key or broadcast over
/// every key. Unkeyed ciphers ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    /// Apply exactly this key.
    Specific(i32),
    /// Produce one output per possible key.
    #[default]
    All,
}

impl Key {
    /// Resolve a raw key string.
    ///
    /// A string made only of ASCII digits (surrounding whitespace ignored)
    /// becomes `Specific`; anything else, including a missing or empty key,
    /// a sign, or a value that does not fit, becomes `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Key::All;
        };
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Key::All;
        }
        raw.parse().map(Key::Specific).unwrap_or(Key::All)
    }

    /// Returns the specific key, if any.
    pub fn specific(self) -> Option<i32> {
        match self {
            Key::Specific(k) => Some(k),
            Key::All => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Specific(k) => write!(f, "{k}"),
            Key::All => f.write_str("all"),
        }
    }
}
