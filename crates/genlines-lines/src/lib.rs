//! genlines-lines - fixed-width line generators
//!
//! Every content mode of genlines is a [`LineGenerator`]: ask it for the next
//! `width` characters and it returns exactly that many.
//!
//! - [`CycleGenerator`] walks a [`Palette`] (ASCII, digits, uppercase).
//! - [`RepeatGenerator`] repeats one character.
//! - [`LineAdapter`] pulls digits from a [`DigitSource`] such as
//!   [`genlines_spigot::DigitSpigot`] and maps each through a palette.
//!
//! Use [`build_generator`] to get the generator for a [`Mode`].

pub mod adapter;
pub mod error;
pub mod generator;
pub mod mode;
pub mod palette;

pub use adapter::{DigitSource, LineAdapter};
pub use error::GeneratorError;
pub use generator::{CycleGenerator, LineGenerator, RepeatGenerator, build_generator};
pub use mode::Mode;
pub use palette::Palette;
