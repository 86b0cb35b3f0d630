//! Line generators and mode dispatch.

use std::iter;

use genlines_spigot::DigitSpigot;
use tracing::debug;

use crate::adapter::LineAdapter;
use crate::error::GeneratorError;
use crate::mode::Mode;
use crate::palette::Palette;

/// Produces successive fixed-width lines of text.
///
/// Every call returns exactly `width` characters, without a line terminator.
pub trait LineGenerator {
    fn next_line(&mut self, width: usize) -> String;
}

/// Walks a palette in order; the position carries over from one line to the next.
#[derive(Debug, Clone)]
pub struct CycleGenerator {
    palette: Palette,
    position: usize,
}

impl CycleGenerator {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            position: 0,
        }
    }
}

impl LineGenerator for CycleGenerator {
    fn next_line(&mut self, width: usize) -> String {
        let start = self.position;
        self.position = (self.position + width % self.palette.len()) % self.palette.len();
        (0..width)
            .map(|offset| self.palette.at(start + offset % self.palette.len()))
            .collect()
    }
}

/// Repeats one character.
#[derive(Debug, Clone, Copy)]
pub struct RepeatGenerator {
    ch: char,
}

impl RepeatGenerator {
    pub fn new(ch: char) -> Self {
        Self { ch }
    }
}

impl LineGenerator for RepeatGenerator {
    fn next_line(&mut self, width: usize) -> String {
        iter::repeat_n(self.ch, width).collect()
    }
}

/// Build the generator for `mode`.
///
/// `total_chars` is the number of characters the caller will request over the
/// generator's lifetime; pi mode sizes its digit spigot from it (at least 1).
///
/// # Errors
///
/// - [`GeneratorError::MissingModeArg`] for `char` mode without a non-blank argument.
/// - [`GeneratorError::Spigot`] if pi mode cannot size its spigot.
pub fn build_generator(
    mode: Mode,
    mode_arg: Option<&str>,
    total_chars: usize,
) -> Result<Box<dyn LineGenerator>, GeneratorError> {
    debug!(%mode, total_chars, "building line generator");

    let generator: Box<dyn LineGenerator> = match mode {
        Mode::Ascii => Box::new(CycleGenerator::new(Palette::ascii())),
        Mode::Digits => Box::new(CycleGenerator::new(Palette::digits())),
        Mode::Upper => Box::new(CycleGenerator::new(Palette::upper())),
        Mode::Char => {
            let ch = mode_arg
                .and_then(|arg| arg.trim().chars().next())
                .ok_or_else(|| GeneratorError::MissingModeArg {
                    mode: mode.to_string(),
                })?;
            Box::new(RepeatGenerator::new(ch))
        }
        Mode::Pi => {
            let spigot = DigitSpigot::new(total_chars.max(1))?;
            Box::new(LineAdapter::new(spigot, Palette::ascii()))
        }
    };
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_cycle_continues_across_lines() {
        let palette = Palette::ascii();
        let mut generator = build_generator(Mode::Ascii, None, 1000).unwrap();

        let first = generator.next_line(80);
        assert_eq!(first.chars().count(), 80);
        assert_eq!(first.chars().next(), Some(palette.at(0)));
        assert_eq!(first.chars().nth(10), Some(palette.at(10)));

        let second = generator.next_line(80);
        assert_eq!(second.chars().next(), Some(palette.at(80)));
        assert_eq!(second.chars().nth(20), Some(palette.at(100)));
    }

    #[test]
    fn digits_mode_emits_only_digits() {
        let mut generator = build_generator(Mode::Digits, None, 1000).unwrap();
        let line = generator.next_line(50);
        assert_eq!(line.len(), 50);
        assert!(line.bytes().all(|b| b.is_ascii_digit()));
        assert!(line.starts_with("0123456789012"));
    }

    #[test]
    fn upper_mode_emits_only_letters() {
        let mut generator = build_generator(Mode::Upper, None, 1000).unwrap();
        let line = generator.next_line(52);
        assert_eq!(line, "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(2));
    }

    #[test]
    fn char_mode_repeats_first_character() {
        let mut generator = build_generator(Mode::Char, Some(" #! "), 1000).unwrap();
        assert_eq!(generator.next_line(33), "#".repeat(33));
    }

    #[test]
    fn char_mode_keeps_multibyte_characters() {
        let mut generator = build_generator(Mode::Char, Some("é"), 1000).unwrap();
        let line = generator.next_line(4);
        assert_eq!(line, "éééé");
        assert_eq!(line.chars().count(), 4);
    }

    #[test]
    fn char_mode_requires_argument() {
        for arg in [None, Some(""), Some("   ")] {
            let err = build_generator(Mode::Char, arg, 100).err();
            assert_eq!(
                err,
                Some(GeneratorError::MissingModeArg {
                    mode: "char".to_string()
                })
            );
        }
    }

    #[test]
    fn pi_mode_maps_digits_onto_ascii() {
        let mut generator = build_generator(Mode::Pi, None, 80).unwrap();
        let palette = Palette::ascii();
        let expected: String = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3]
            .iter()
            .map(|&d| palette.at(d))
            .collect();
        assert_eq!(generator.next_line(10), expected);
    }

    #[test]
    fn pi_mode_accepts_zero_total() {
        let mut generator = build_generator(Mode::Pi, None, 0).unwrap();
        assert_eq!(generator.next_line(1), "#");
    }

    #[test]
    fn cycle_position_carries_over_lines() {
        let mut generator = CycleGenerator::new(Palette::digits());
        assert_eq!(generator.next_line(13), "0123456789012");
        assert_eq!(generator.next_line(3), "345");
    }
}
