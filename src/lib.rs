//! Enigma rotor cipher machine.
//!
//! Simulates a three-rotor Enigma: a plugboard, three wired rotors selected
//! from a fixed catalog, and a reflector, composed into a symmetric
//! per-character transform. Encryption and decryption are the same
//! operation: two machines constructed with identical configuration step in
//! lockstep and invert each other exactly.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (symmetric letter-swap table — applied on entry and exit)
//!     ↕
//! RotorSet    (right/middle/left Rotors — owns the stepping mechanism,
//!              including the double-stepping anomaly)
//!     ↕
//! Reflector   (fixed involution — turns the signal back through the stack)
//!     ↑ composed by
//! Enigma      (orchestrator — steps, then scrambles, one letter at a time)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut encoder = Enigma::new([0, 1, 2], [3, 14, 8], [1, 0, 5], &[]).unwrap();
//! let ciphertext = encoder.process("MEET AT NOON");
//!
//! let mut decoder = Enigma::new([0, 1, 2], [3, 14, 8], [1, 0, 5], &[]).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "MEET AT NOON");
//! ```
//!
//! Plugboard pairs swap letters before and after the scramble:
//!
//! ```
//! use enigma::Enigma;
//!
//! let plugs = [('A', 'B'), ('C', 'D')];
//!
//! let mut encoder = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &plugs).unwrap();
//! let ciphertext = encoder.process("ABCDEF");
//!
//! let mut decoder = Enigma::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &plugs).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "ABCDEF");
//! ```

#![deny(clippy::all)]

pub mod error;

mod catalog;
mod enigma;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_set;

pub use enigma::Enigma;
