//! genlines-spigot - streaming decimal digits of pi
//!
//! This crate provides [`DigitSpigot`], a bounded-memory spigot that releases the
//! decimal digits of pi one at a time, left to right, without ever holding the
//! full expansion.
//!
//! # Example
//!
//! ```rust
//! use genlines_spigot::DigitSpigot;
//!
//! let mut spigot = DigitSpigot::new(10)?;
//! let digits: Vec<u8> = spigot.by_ref().take(10).collect();
//! assert_eq!(digits, [3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
//! # Ok::<(), genlines_spigot::SpigotError>(())
//! ```
//!
//! # Precision
//!
//! The remainder table is sized from the capacity passed to [`DigitSpigot::new`].
//! Digits released beyond that capacity are still produced but may be wrong.
//! Use [`DigitSpigot::checked_next_digit`] when that must be a hard error.

pub mod error;
pub mod spigot;

pub use error::SpigotError;
pub use spigot::DigitSpigot;
