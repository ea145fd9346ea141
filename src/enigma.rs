//! Enigma: rotor cipher machine orchestrator.
//!
//! Owns one Plugboard, one RotorSet, and the shared catalog Reflector, and
//! composes them into the symmetric per-character transform. The only state
//! that evolves across calls is the rotor position vector; everything else is
//! fixed at construction.

use crate::catalog::{catalog, letter_rank, rank_letter};
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_set::RotorSet;

/// Three-rotor Enigma machine.
///
/// # Architecture
///
/// Each alphabetic character first steps the rotor stack, then travels
/// plugboard → rotors (right to left) → reflector → rotors (left to right)
/// → plugboard. Because the plugboard and reflector are involutions and each
/// rotor's backward pass inverts its forward pass, two machines built from
/// the same configuration are exact inverses of each other in lockstep:
/// processing a ciphertext reproduces the uppercased plaintext.
///
/// Non-alphabetic characters pass through unchanged and do not step the
/// rotors. There is no reset; construct a new instance to return to a
/// configuration's initial state.
#[derive(Debug)]
pub struct Enigma {
    plugboard: Plugboard,
    rotors: RotorSet,
    reflector: &'static Reflector,
}

impl Default for Enigma {
    /// Stock configuration: rotors `[0, 1, 2]`, all positions and ring
    /// settings zero, empty plugboard.
    fn default() -> Self {
        Self::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[])
            .expect("stock configuration is valid")
    }
}

impl Enigma {
    /// Creates a machine from a complete configuration.
    ///
    /// Index 0 of each array configures the rightmost (fastest) rotor,
    /// index 1 the middle, index 2 the leftmost.
    ///
    /// # Parameters
    /// - `rotor_ids`: Three pairwise-distinct catalog IDs.
    /// - `positions`: Initial rotor positions, each in [0, 26).
    /// - `ring_settings`: Ring settings, each in [0, 26).
    /// - `plug_pairs`: Disjoint pairs of distinct uppercase letters.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] for an unknown or duplicate rotor
    /// ID, an out-of-range position or ring setting, or an invalid plug
    /// pair. All validation happens here; [`process`](Self::process) cannot
    /// fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
    /// let ciphertext = machine.process("HELLO WORLD");
    /// assert_ne!(ciphertext, "HELLO WORLD");
    /// ```
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let result = Enigma::new([0, 0, 2], [0, 0, 0], [0, 0, 0], &[]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        rotor_ids: [usize; 3],
        positions: [u8; 3],
        ring_settings: [u8; 3],
        plug_pairs: &[(char, char)],
    ) -> Result<Self, ConfigurationError> {
        if rotor_ids[0] == rotor_ids[1]
            || rotor_ids[0] == rotor_ids[2]
            || rotor_ids[1] == rotor_ids[2]
        {
            return Err(ConfigurationError::DuplicateRotorId);
        }

        let cat = catalog()?;
        let right = Rotor::new(cat.rotor(rotor_ids[0])?, ring_settings[0], positions[0])?;
        let middle = Rotor::new(cat.rotor(rotor_ids[1])?, ring_settings[1], positions[1])?;
        let left = Rotor::new(cat.rotor(rotor_ids[2])?, ring_settings[2], positions[2])?;

        Ok(Enigma {
            plugboard: Plugboard::new(plug_pairs)?,
            rotors: RotorSet::new(right, middle, left),
            reflector: cat.reflector(),
        })
    }

    /// Encrypts or decrypts a stream of characters.
    ///
    /// Letters are folded to uppercase, step the rotors once each, and run
    /// through the full scramble. Everything else — spaces, punctuation,
    /// digits — is appended verbatim without stepping. Decrypting text that
    /// was originally mixed-case therefore yields the all-uppercase
    /// transliteration.
    ///
    /// # Parameters
    /// - `text`: The text to transform. Any string is valid input.
    ///
    /// # Returns
    /// The transformed text, same length and non-letter layout as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut encoder = Enigma::default();
    /// let ciphertext = encoder.process("HELLO, WORLD! 123");
    ///
    /// let mut decoder = Enigma::default();
    /// assert_eq!(decoder.process(&ciphertext), "HELLO, WORLD! 123");
    /// ```
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut encoder = Enigma::default();
    /// let ciphertext = encoder.process("Hello World");
    ///
    /// let mut decoder = Enigma::default();
    /// assert_eq!(decoder.process(&ciphertext), "HELLO WORLD");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                output.push(self.scramble(c.to_ascii_uppercase()));
            } else {
                output.push(c);
            }
        }
        output
    }

    /// Runs one uppercase letter through the machine, stepping first.
    fn scramble(&mut self, letter: char) -> char {
        self.rotors.step_once();

        let mut rank = letter_rank(letter);
        rank = self.plugboard.swap(rank);
        rank = self.rotors.scramble_forward(rank);
        rank = self.reflector.reflect(rank);
        rank = self.rotors.scramble_backward(rank);
        rank = self.plugboard.swap(rank);
        rank_letter(rank)
    }

    /// Returns the current rotor positions as `[right, middle, left]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::default();
    /// machine.process("AB");
    /// assert_eq!(machine.rotor_positions(), [2, 0, 0]);
    /// ```
    pub fn rotor_positions(&self) -> [u8; 3] {
        self.rotors.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_explicit_stock_config() {
        let mut stock = Enigma::default();
        let mut explicit = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
        assert_eq!(stock.process("ATTACK AT DAWN"), explicit.process("ATTACK AT DAWN"));
    }

    #[test]
    fn test_empty_input() {
        let mut machine = Enigma::default();
        assert_eq!(machine.process(""), "");
        assert_eq!(machine.rotor_positions(), [0, 0, 0]);
    }

    #[test]
    fn test_non_alphabetic_pass_through_without_stepping() {
        let mut machine = Enigma::default();
        assert_eq!(machine.process("123 ,.!?"), "123 ,.!?");
        assert_eq!(machine.rotor_positions(), [0, 0, 0]);
    }

    #[test]
    fn test_output_is_uppercase() {
        let mut machine = Enigma::default();
        let out = machine.process("mixed Case input");
        assert!(out.chars().all(|c| !c.is_ascii_lowercase()), "{}", out);
    }

    #[test]
    fn test_duplicate_rotor_id_rejected() {
        for ids in [[0, 0, 2], [0, 1, 0], [1, 2, 2]] {
            assert_eq!(
                Enigma::new(ids, [0, 0, 0], [0, 0, 0], &[]).unwrap_err(),
                ConfigurationError::DuplicateRotorId,
                "ids {:?}",
                ids
            );
        }
    }

    #[test]
    fn test_rotor_id_out_of_range_rejected() {
        assert_eq!(
            Enigma::new([0, 1, 5], [0, 0, 0], [0, 0, 0], &[]).unwrap_err(),
            ConfigurationError::RotorIdOutOfRange
        );
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        assert_eq!(
            Enigma::new([0, 1, 2], [0, 26, 0], [0, 0, 0], &[]).unwrap_err(),
            ConfigurationError::PositionOutOfRange
        );
    }

    #[test]
    fn test_out_of_range_ring_setting_rejected() {
        assert_eq!(
            Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 255], &[]).unwrap_err(),
            ConfigurationError::RingSettingOutOfRange
        );
    }

    #[test]
    fn test_invalid_plug_pair_rejected() {
        assert_eq!(
            Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[('A', 'A')]).unwrap_err(),
            ConfigurationError::PlugPairSameLetter
        );
    }
}
