use thiserror::Error;

/// Errors raised while sizing or draining a [`DigitSpigot`](crate::DigitSpigot).
///
/// Construction is the only fallible step of the plain API. Draining past the
/// sized capacity is reported only through
/// [`checked_next_digit`](crate::DigitSpigot::checked_next_digit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpigotError {
    #[error("capacity {capacity} is too large to size a remainder table")]
    CapacityOverflow { capacity: usize },

    #[error("failed to allocate a remainder table of {cells} cells")]
    Allocation { cells: usize },

    #[error("all {capacity} digits this spigot was sized for have been released")]
    CapacityExceeded { capacity: usize },
}
