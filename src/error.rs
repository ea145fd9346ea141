//! Error types for the Enigma library.

use std::fmt;

/// Configuration errors raised while constructing an [`Enigma`](crate::Enigma).
///
/// All validation is eager: every variant is produced at construction time,
/// never while processing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Rotor ID is outside the catalog range.
    RotorIdOutOfRange,
    /// The same rotor ID was selected more than once.
    DuplicateRotorId,
    /// Rotor position is outside the valid range [0, 26).
    PositionOutOfRange,
    /// Ring setting is outside the valid range [0, 26).
    RingSettingOutOfRange,
    /// A plug pair contains a character that is not an uppercase letter.
    PlugPairNotUppercase,
    /// A plug pair connects a letter to itself.
    PlugPairSameLetter,
    /// A letter appears in more than one plug pair.
    PlugLetterReused,
    /// A rotor catalog entry is not a bijective wiring.
    CorruptRotorWiring,
    /// The reflector wiring is not a fixed-point-free involution.
    CorruptReflectorWiring,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::RotorIdOutOfRange => {
                write!(f, "Rotor ID is outside the catalog range")
            }
            ConfigurationError::DuplicateRotorId => {
                write!(f, "The same rotor cannot be selected more than once")
            }
            ConfigurationError::PositionOutOfRange => {
                write!(f, "Rotor position must be in the range [0, 26)")
            }
            ConfigurationError::RingSettingOutOfRange => {
                write!(f, "Ring setting must be in the range [0, 26)")
            }
            ConfigurationError::PlugPairNotUppercase => {
                write!(f, "Plug pairs must consist of uppercase letters")
            }
            ConfigurationError::PlugPairSameLetter => {
                write!(f, "A plug pair cannot connect a letter to itself")
            }
            ConfigurationError::PlugLetterReused => {
                write!(f, "A letter cannot appear in more than one plug pair")
            }
            ConfigurationError::CorruptRotorWiring => {
                write!(f, "Rotor catalog wiring is not a bijection on the alphabet")
            }
            ConfigurationError::CorruptReflectorWiring => {
                write!(f, "Reflector wiring is not a fixed-point-free involution")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
