//! Rotor: wired substitution permutation with a rotating offset.
//!
//! Implements the atomic scrambling unit of the machine. Each rotor combines
//! a fixed wiring permutation from the catalog with a fixed ring setting and
//! a mutable rotational position. The position is the only state that evolves
//! while the machine runs.

use crate::catalog::{RotorSpec, ALPHABET_LEN};
use crate::error::ConfigurationError;

/// A single rotor: catalog wiring plus ring setting and current position.
#[derive(Debug)]
pub(crate) struct Rotor {
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notch: u8,
    ring: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor from a catalog entry.
    ///
    /// # Parameters
    /// - `spec`: The validated catalog entry to take wiring and notch from.
    /// - `ring`: Ring setting, in [0, 26).
    /// - `position`: Initial rotational position, in [0, 26).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::PositionOutOfRange`] or
    /// [`ConfigurationError::RingSettingOutOfRange`] for out-of-range values.
    pub(crate) fn new(spec: &RotorSpec, ring: u8, position: u8) -> Result<Self, ConfigurationError> {
        if usize::from(position) >= ALPHABET_LEN {
            return Err(ConfigurationError::PositionOutOfRange);
        }
        if usize::from(ring) >= ALPHABET_LEN {
            return Err(ConfigurationError::RingSettingOutOfRange);
        }
        Ok(Rotor {
            wiring: spec.wiring,
            inverse: spec.inverse,
            notch: spec.notch,
            ring,
            position,
        })
    }

    /// Shifts an external rank into the rotor's internal frame.
    fn shift_in(&self, rank: u8) -> usize {
        (usize::from(rank) + usize::from(self.position) + ALPHABET_LEN - usize::from(self.ring))
            % ALPHABET_LEN
    }

    /// Shifts an internal rank back out to the external frame.
    fn shift_out(&self, rank: u8) -> u8 {
        ((usize::from(rank) + usize::from(self.ring) + ALPHABET_LEN - usize::from(self.position))
            % ALPHABET_LEN) as u8
    }

    /// Maps a rank through the wiring, right to left.
    pub(crate) fn forward(&self, rank: u8) -> u8 {
        self.shift_out(self.wiring[self.shift_in(rank)])
    }

    /// Maps a rank through the inverse wiring, left to right.
    ///
    /// Exact inverse of [`forward`](Self::forward) under the same position
    /// and ring state.
    pub(crate) fn backward(&self, rank: u8) -> u8 {
        self.shift_out(self.inverse[self.shift_in(rank)])
    }

    /// Advances the position by one, wrapping at 26.
    pub(crate) fn step(&mut self) {
        self.position = ((usize::from(self.position) + 1) % ALPHABET_LEN) as u8;
    }

    /// Whether the rotor currently sits at its turnover notch.
    ///
    /// Evaluated on the pre-step position; the ring setting does not move
    /// the notch.
    pub(crate) fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Returns the current rotational position.
    pub(crate) fn position(&self) -> u8 {
        self.position
    }
}
