//! Ordered output alphabets.

use crate::error::GeneratorError;

/// First printable ASCII code point (space).
pub const ASCII_FIRST: u8 = 32;
/// Last printable ASCII code point (`~`).
pub const ASCII_LAST: u8 = 126;

/// A non-empty, ordered sequence of output characters.
///
/// Indexing wraps: [`Palette::at`] returns `chars[index % len]`, so any
/// non-negative value maps to a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from any character sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyPalette`] for an empty sequence.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, GeneratorError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(GeneratorError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Printable ASCII, code points 32 through 126 (95 characters).
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            chars: (ASCII_FIRST..=ASCII_LAST).map(char::from).collect(),
        }
    }

    /// `0` through `9`.
    #[must_use]
    pub fn digits() -> Self {
        Self {
            chars: ('0'..='9').collect(),
        }
    }

    /// `A` through `Z`.
    #[must_use]
    pub fn upper() -> Self {
        Self {
            chars: ('A'..='Z').collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, wrapping around the palette length.
    #[must_use]
    pub fn at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
