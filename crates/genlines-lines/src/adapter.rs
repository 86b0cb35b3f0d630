//! Digit stream to fixed-width line adapter.

use genlines_spigot::DigitSpigot;

use crate::generator::LineGenerator;
use crate::palette::Palette;

/// Anything that can hand out decimal digits one at a time.
pub trait DigitSource {
    /// Next digit, `0..=9`.
    fn next_digit(&mut self) -> u8;
}

impl DigitSource for DigitSpigot {
    fn next_digit(&mut self) -> u8 {
        DigitSpigot::next_digit(self)
    }
}

/// Pulls one digit per output position and maps it through a palette.
///
/// The adapter holds no cursor of its own, so a character depends only on the
/// digit drawn for it, never on its column.
#[derive(Debug, Clone)]
pub struct LineAdapter<S> {
    source: S,
    palette: Palette,
}

impl<S: DigitSource> LineAdapter<S> {
    pub fn new(source: S, palette: Palette) -> Self {
        Self { source, palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Give back the digit source, e.g. to inspect how far it advanced.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: DigitSource> LineGenerator for LineAdapter<S> {
    fn next_line(&mut self, width: usize) -> String {
        (0..width)
            .map(|_| self.palette.at(usize::from(self.source.next_digit())))
            .collect()
    }
}
