//! Base-10 spigot for pi with deferred carry resolution.
//!
//! Each round sweeps the remainder table from its highest cell down to cell 0
//! and yields one provisional digit `q`. A provisional 9 cannot be finalized
//! until a later round shows whether a carry rolls through it, so runs of 9s
//! are counted in `pending_nines` and the digit before them is held in
//! `latched`:
//!
//! | `q`   | Released                                  | New `latched` |
//! |-------|-------------------------------------------|---------------|
//! | 9     | nothing                                   | unchanged     |
//! | 10    | `latched + 1`, then one 0 per pending 9   | 0             |
//! | 0..=8 | `latched`, then one 9 per pending 9       | `q`           |

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::SpigotError;

/// Every cell of the remainder table starts at this value.
const INITIAL_REMAINDER: u32 = 2;

/// Streaming generator of the decimal digits of pi.
///
/// The only memory proportional to the requested precision is the remainder
/// table, allocated once by [`DigitSpigot::new`] and never resized. Released
/// digits are final; nothing is retracted after it leaves the spigot.
///
/// A spigot is a single-owner value. It is `Send` but offers no interior
/// synchronization; share it behind your own lock if you must.
#[derive(Debug, Clone)]
pub struct DigitSpigot {
    capacity: usize,
    state: Vec<u32>,
    pending: VecDeque<u8>,
    pending_nines: usize,
    latched: u8,
    emitted: bool,
    released: usize,
    overrun_reported: bool,
}

impl DigitSpigot {
    /// Create a spigot sized to release `capacity` correct digits.
    ///
    /// A capacity of 0 is treated as 1. The table holds
    /// `capacity * 10 / 3 + 1` cells.
    ///
    /// # Errors
    ///
    /// - [`SpigotError::CapacityOverflow`] if the table size, or its largest
    ///   denominator, cannot be represented.
    /// - [`SpigotError::Allocation`] if the table cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, SpigotError> {
        let capacity = capacity.max(1);
        let cells = table_len_for(capacity).ok_or(SpigotError::CapacityOverflow { capacity })?;

        let mut state = Vec::new();
        state
            .try_reserve_exact(cells)
            .map_err(|_| SpigotError::Allocation { cells })?;
        state.resize(cells, INITIAL_REMAINDER);

        debug!(capacity, table_len = cells, "spigot sized");

        Ok(Self {
            capacity,
            state,
            pending: VecDeque::with_capacity(32),
            pending_nines: 0,
            latched: 0,
            emitted: false,
            released: 0,
            overrun_reported: false,
        })
    }

    /// Number of digits this spigot was sized to release correctly.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cells in the remainder table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.state.len()
    }

    /// Number of digits handed to callers so far.
    #[must_use]
    pub fn digits_released(&self) -> usize {
        self.released
    }

    /// Whether the next digit is still inside the sized capacity.
    #[must_use]
    pub fn is_within_capacity(&self) -> bool {
        self.released < self.capacity
    }

    /// Release the next digit of pi, starting with the leading 3.
    ///
    /// Never fails. Past [`capacity`](Self::capacity) the digits may be
    /// inaccurate; a single warning is logged the first time that happens.
    pub fn next_digit(&mut self) -> u8 {
        let digit = loop {
            if let Some(digit) = self.pending.pop_front() {
                break digit;
            }
            self.round();
        };

        self.released += 1;
        if self.released > self.capacity && !self.overrun_reported {
            self.overrun_reported = true;
            warn!(
                capacity = self.capacity,
                "releasing digits beyond the sized capacity; precision is no longer guaranteed"
            );
        }
        digit
    }

    /// Release the next digit, refusing to go past the sized capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SpigotError::CapacityExceeded`] once `capacity` digits have
    /// been released. The spigot is left untouched in that case.
    pub fn checked_next_digit(&mut self) -> Result<u8, SpigotError> {
        if !self.is_within_capacity() {
            return Err(SpigotError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.next_digit())
    }

    /// One sweep of the recurrence, then settle the provisional digit.
    fn round(&mut self) {
        let mut carry: u64 = 0;
        for (index, cell) in self.state.iter_mut().enumerate().rev() {
            let position = index as u64 + 1;
            let denominator = 2 * position - 1;
            let x = 10 * u64::from(*cell) + carry * position;
            // Below the largest denominator, which fits in u32 (checked in `new`).
            *cell = (x % denominator) as u32;
            carry = x / denominator;
        }
        self.state[0] = (carry % 10) as u32;
        carry /= 10;

        debug_assert!(carry <= 10, "provisional digit out of range: {carry}");
        self.settle(carry as u8);
    }

    fn settle(&mut self, provisional: u8) {
        match provisional {
            9 => self.pending_nines += 1,
            10 => {
                self.release(self.latched + 1);
                self.release_nines_as(0);
                self.latched = 0;
            }
            _ => {
                self.release(self.latched);
                self.release_nines_as(9);
                self.latched = provisional;
            }
        }
    }

    fn release_nines_as(&mut self, digit: u8) {
        for _ in 0..self.pending_nines {
            self.release(digit);
        }
        self.pending_nines = 0;
    }

    /// Queue a finalized digit. Zeros ahead of the first real digit are dropped:
    /// `latched` starts at 0 and the first flush always releases it.
    fn release(&mut self, digit: u8) {
        if !self.emitted && digit == 0 {
            return;
        }
        self.emitted = true;
        self.pending.push_back(digit);
    }
}

impl Iterator for DigitSpigot {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_digit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// `capacity * 10 / 3 + 1`, provided every denominator `2 * len - 1` fits a cell.
fn table_len_for(capacity: usize) -> Option<usize> {
    let cells = capacity.checked_mul(10)? / 3 + 1;
    let largest_denominator = cells.checked_mul(2)? - 1;
    u32::try_from(largest_denominator).ok()?;
    Some(cells)
}
