//! genlines - generate text files of fixed-width lines
//!
//! genlines writes N lines of W characters each, drawn from a content mode:
//! cycled printable ASCII, digits or uppercase letters, a repeated character,
//! or the decimal digits of pi mapped onto printable ASCII.
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! genlines 1000 lines.txt
//! genlines 1000 pi.txt n 80 pi
//! genlines 50 stars.txt y 40 char '*'
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use genlines::{Mode, build_generator};
//!
//! let mut generator = build_generator(Mode::Digits, None, 24).unwrap();
//! assert_eq!(generator.next_line(12), "012345678901");
//! assert_eq!(generator.next_line(12), "234567890123");
//! ```
//!
//! The pi digits come from a streaming spigot that can also be used directly:
//!
//! ```rust
//! use genlines::DigitSpigot;
//!
//! let digits: Vec<u8> = DigitSpigot::new(8).unwrap().take(8).collect();
//! assert_eq!(digits, [3, 1, 4, 1, 5, 9, 2, 6]);
//! ```
//!
//! # Stable Public API
//!
//! - [`DigitSpigot`] - streaming digits of pi
//! - [`LineGenerator`], [`build_generator`], [`Mode`], [`Palette`] - line content
//! - [`Config`] and [`ConfigBuilder`] - configuration management
//! - [`GenLinesError`] and [`ExitCode`] - errors and CLI exit codes
//!
//! The [`cli`] module hosts the command-line program.

pub mod cli;

pub use genlines_config::{CliArgs, Config, ConfigBuilder, ConfigSource};
pub use genlines_lines::{
    DigitSource, GeneratorError, LineAdapter, LineGenerator, Mode, Palette, build_generator,
};
pub use genlines_spigot::{DigitSpigot, SpigotError};
pub use genlines_utils::error::{ArgsError, ConfigError, GenLinesError, UserFriendlyError};
pub use genlines_utils::exit_codes::ExitCode;
