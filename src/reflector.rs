//! Reflector: fixed involutive letter mapping.
//!
//! The reflector turns the signal back through the rotor stack. Its wiring
//! must be an involution with no fixed point: the involution makes the whole
//! machine self-inverse, and the absence of fixed points means no letter ever
//! encrypts to itself.

use crate::catalog::ALPHABET_LEN;
use crate::error::ConfigurationError;

/// Stateless reflector over a validated rank table.
#[derive(Debug)]
pub(crate) struct Reflector {
    wiring: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Builds a reflector from a rank table.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::CorruptReflectorWiring`] if the table
    /// has a fixed point or is not its own inverse.
    pub(crate) fn from_wiring(wiring: [u8; ALPHABET_LEN]) -> Result<Self, ConfigurationError> {
        for (rank, &out) in wiring.iter().enumerate() {
            if out as usize == rank || wiring[out as usize] as usize != rank {
                return Err(ConfigurationError::CorruptReflectorWiring);
            }
        }
        Ok(Reflector { wiring })
    }

    /// Returns the partner of the given letter rank.
    pub(crate) fn reflect(&self, rank: u8) -> u8 {
        self.wiring[rank as usize]
    }
}
