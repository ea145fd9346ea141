//! Rotor and reflector wiring catalog.
//!
//! The closed set of wirings the machine can be configured with: five rotor
//! permutations with their turnover notches, and one reflector. The catalog
//! is parsed and validated once per process, then shared read-only by every
//! machine instance, so concurrent construction needs no locking.

use std::sync::OnceLock;

use crate::error::ConfigurationError;
use crate::reflector::Reflector;

/// Number of letters in the machine alphabet.
pub(crate) const ALPHABET_LEN: usize = 26;

/// Rotor wiring tables and turnover notch letters (rotors I through V).
const ROTOR_WIRINGS: [(&str, char); 5] = [
    ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
    ("AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
    ("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
    ("ESOVPZJAYQUIRHXLNFTGKDCMWB", 'J'),
    ("VZBRGITYUPSDNHLXAWMJQOFECK", 'Z'),
];

/// Reflector wiring table (UKW-B).
const REFLECTOR_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// A validated rotor catalog entry: wiring permutation, its inverse, and
/// the notch offset at which the stepping mechanism engages the next rotor.
#[derive(Debug)]
pub(crate) struct RotorSpec {
    pub(crate) wiring: [u8; ALPHABET_LEN],
    pub(crate) inverse: [u8; ALPHABET_LEN],
    pub(crate) notch: u8,
}

/// The process-wide wiring catalog.
#[derive(Debug)]
pub(crate) struct Catalog {
    rotors: Vec<RotorSpec>,
    reflector: Reflector,
}

impl Catalog {
    /// Returns the rotor entry for the given catalog ID.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::RotorIdOutOfRange`] if `id` does not
    /// name a catalog entry.
    pub(crate) fn rotor(&self, id: usize) -> Result<&RotorSpec, ConfigurationError> {
        self.rotors
            .get(id)
            .ok_or(ConfigurationError::RotorIdOutOfRange)
    }

    /// Returns the shared reflector.
    pub(crate) fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the number of rotor entries.
    #[allow(dead_code)]
    pub(crate) fn num_rotors(&self) -> usize {
        self.rotors.len()
    }
}

static CATALOG: OnceLock<Result<Catalog, ConfigurationError>> = OnceLock::new();

/// Returns the process-wide catalog, building and validating it on first use.
///
/// # Errors
/// Returns [`ConfigurationError::CorruptRotorWiring`] or
/// [`ConfigurationError::CorruptReflectorWiring`] if a table fails its
/// structural invariant. This signals a defect in the tables above, not a
/// user configuration error, and is reported identically on every call.
pub(crate) fn catalog() -> Result<&'static Catalog, ConfigurationError> {
    CATALOG
        .get_or_init(build_catalog)
        .as_ref()
        .map_err(|e| e.clone())
}

fn build_catalog() -> Result<Catalog, ConfigurationError> {
    let mut rotors = Vec::with_capacity(ROTOR_WIRINGS.len());
    for (text, notch) in ROTOR_WIRINGS {
        let wiring = parse_wiring(text).ok_or(ConfigurationError::CorruptRotorWiring)?;
        let inverse = invert_wiring(&wiring);
        rotors.push(RotorSpec {
            wiring,
            inverse,
            notch: letter_rank(notch),
        });
    }
    let reflector_wiring =
        parse_wiring(REFLECTOR_WIRING).ok_or(ConfigurationError::CorruptReflectorWiring)?;
    Ok(Catalog {
        rotors,
        reflector: Reflector::from_wiring(reflector_wiring)?,
    })
}

/// Parses a 26-letter wiring string into a rank table, rejecting anything
/// that is not a total bijection on the uppercase alphabet.
fn parse_wiring(text: &str) -> Option<[u8; ALPHABET_LEN]> {
    let mut wiring = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    let mut count = 0;
    for (i, c) in text.chars().enumerate() {
        if i >= ALPHABET_LEN || !c.is_ascii_uppercase() {
            return None;
        }
        let rank = letter_rank(c) as usize;
        if seen[rank] {
            return None;
        }
        seen[rank] = true;
        wiring[i] = rank as u8;
        count += 1;
    }
    if count == ALPHABET_LEN {
        Some(wiring)
    } else {
        None
    }
}

/// Builds the inverse of a bijective rank table.
fn invert_wiring(wiring: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &out) in wiring.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}

/// Returns the alphabet rank (0..26) of an uppercase ASCII letter.
///
/// The caller guarantees `c` is in `'A'..='Z'`.
pub(crate) fn letter_rank(c: char) -> u8 {
    (c as u8) - b'A'
}

/// Returns the uppercase ASCII letter for an alphabet rank (0..26).
pub(crate) fn rank_letter(rank: u8) -> char {
    (b'A' + rank) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let cat = catalog().expect("catalog tables are valid");
        assert_eq!(cat.num_rotors(), 5);
    }

    #[test]
    fn test_rotor_wirings_are_bijections() {
        let cat = catalog().unwrap();
        for id in 0..cat.num_rotors() {
            let spec = cat.rotor(id).unwrap();
            for rank in 0..ALPHABET_LEN as u8 {
                let mapped = spec.wiring[rank as usize];
                assert_eq!(
                    spec.inverse[mapped as usize], rank,
                    "inverse[wiring[{}]] != {} for rotor {}",
                    rank, rank, id
                );
            }
        }
    }

    #[test]
    fn test_rotor_notch_offsets() {
        let cat = catalog().unwrap();
        let expected: [u8; 5] = [16, 4, 21, 9, 25]; // Q, E, V, J, Z
        for (id, &notch) in expected.iter().enumerate() {
            assert_eq!(cat.rotor(id).unwrap().notch, notch, "rotor {} notch", id);
        }
    }

    #[test]
    fn test_rotor_id_out_of_range() {
        let cat = catalog().unwrap();
        assert_eq!(
            cat.rotor(5).unwrap_err(),
            ConfigurationError::RotorIdOutOfRange
        );
        assert_eq!(
            cat.rotor(usize::MAX).unwrap_err(),
            ConfigurationError::RotorIdOutOfRange
        );
    }

    #[test]
    fn test_parse_wiring_rejects_short_table() {
        assert!(parse_wiring("ABC").is_none());
    }

    #[test]
    fn test_parse_wiring_rejects_long_table() {
        assert!(parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJA").is_none());
    }

    #[test]
    fn test_parse_wiring_rejects_repeated_letter() {
        // 'E' appears twice, 'K' never.
        assert!(parse_wiring("EEMFLGDQVZNTOWYHXUSPAIBRCJ").is_none());
    }

    #[test]
    fn test_parse_wiring_rejects_lowercase() {
        assert!(parse_wiring("eKMFLGDQVZNTOWYHXUSPAIBRCJ").is_none());
    }

    #[test]
    fn test_letter_rank_round_trip() {
        for rank in 0..ALPHABET_LEN as u8 {
            assert_eq!(letter_rank(rank_letter(rank)), rank);
        }
        assert_eq!(letter_rank('A'), 0);
        assert_eq!(letter_rank('Z'), 25);
    }
}
