//! SipHash — reference core
//! ------------------------
//! A keyed 64-bit pseudorandom function built from add–rotate–xor rounds.
//! This crate is the heap-free baseline: every other backend in the
//! workspace must reproduce its output bit for bit.
//!
//! • Key    : 128 bit, split into two little-endian words k0, k1
//! • State  : 4 × 64-bit words, all arithmetic mod 2^64
//! • Input  : 64-bit little-endian words + one length-tagged padding word
//! • Rounds : `c` SipRounds per word, `d` SipRounds at finalization
//! • Output : 64-bit word serialized **big-endian**
//!
//! SipHash-1-3 and SipHash-2-4 are the named presets ([`Rounds::SIP_1_3`],
//! [`Rounds::SIP_2_4`]); any other pair is executed literally.
//!
//! ```
//! use sipdigest_core::{siphash13, Key};
//!
//! let digest = siphash13(b"siphash", &Key::DEFAULT);
//! assert_eq!(digest, [0x82, 0x64, 0xce, 0xec, 0xcb, 0x16, 0xbc, 0xbe]);
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod hasher;
mod key;
mod state;
mod words;

pub use error::Error;
pub use hasher::{Rounds, SipHasher};
pub use key::{Key, KEY_LEN};
pub use state::State;
pub use words::{padding_word, read_word, Words, WORD_LEN};

/// Length of a raw digest in bytes.
pub const DIGEST_LEN: usize = 8;

/// Raw SipHash output, most significant byte first.
pub type Digest = [u8; DIGEST_LEN];

/// Hash `message` under `key` with explicit round counts.
#[must_use]
pub fn siphash(message: &[u8], key: &Key, rounds: Rounds) -> Digest {
    SipHasher::hash(key, rounds, message)
}

/// SipHash-1-3 of `message`.
#[must_use]
pub fn siphash13(message: &[u8], key: &Key) -> Digest {
    siphash(message, key, Rounds::SIP_1_3)
}

/// SipHash-2-4 of `message`.
#[must_use]
pub fn siphash24(message: &[u8], key: &Key) -> Digest {
    siphash(message, key, Rounds::SIP_2_4)
}
