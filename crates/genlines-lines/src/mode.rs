//! Content modes selectable from the command line or config file.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::GeneratorError;

/// What each generated line is made of.
///
/// Parsing is ASCII case-insensitive and accepts the aliases `digit`,
/// `uppercase` and `character`. `Display` yields the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Printable ASCII characters, cycled.
    #[default]
    Ascii,
    /// `0-9`, cycled.
    #[strum(to_string = "digits", serialize = "digit")]
    Digits,
    /// `A-Z`, cycled.
    #[strum(to_string = "upper", serialize = "uppercase")]
    Upper,
    /// One character repeated; needs a mode argument.
    #[strum(to_string = "char", serialize = "character")]
    Char,
    /// Digits of pi mapped onto the ASCII palette.
    Pi,
}

impl Mode {
    /// Parse user input. Surrounding whitespace is ignored and a blank string
    /// selects the default mode.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnknownMode`] with the normalized input.
    pub fn parse(input: &str) -> Result<Self, GeneratorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Self::from_str(trimmed).map_err(|_| GeneratorError::UnknownMode(trimmed.to_lowercase()))
    }

    #[must_use]
    pub fn requires_mode_arg(self) -> bool {
        matches!(self, Self::Char)
    }
}
