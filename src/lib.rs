//! sipdigest: SipHash keyed digests
//! =================================
//! A **64-bit keyed PRF** for hash-table keying and short-message
//! authentication, with configurable compression (`c`) and finalization
//! (`d`) round counts. Digests are bit-for-bit identical to the reference
//! core in `sipdigest_core` for every input, key and round pair.
//!
//! ## Algorithm
//! * 128-bit key → four 64-bit state words (key schedule)
//! * message → little-endian 64-bit words + one length-tagged padding word
//! * per word: `v3 ^= m`, `c` × SipRound, `v0 ^= m`
//! * finalization: `v2 ^= 0xff`, `d` × SipRound, output `v0^v1^v2^v3`
//!   big-endian
//!
//! ## What this crate adds over the core
//! * **Static backend selection**: [`backend::Active`] is picked by cargo
//!   feature at compile time. The default `unrolled` backend monomorphizes
//!   SipHash-1-3 / 2-4; without the feature the portable reference is used.
//!   Both produce identical output, so the choice is never observable.
//! * **Streaming**: [`SipHash`] buffers chunks and hashes them as one
//!   message on demand.
//! * Feature-gated **Rayon batch API** ([`digest_batch`]) for hashing many
//!   independent messages on all cores.
//!
//! ```
//! use sipdigest::{hexdigest, Key, SipHash};
//!
//! let mut hasher = SipHash::sip13(Key::DEFAULT);
//! hasher.update("sip").update("hash");
//! assert_eq!(hasher.hexdigest(), "8264ceeccb16bcbe");
//! assert_eq!(hexdigest(b"siphash", &Key::DEFAULT), "8264ceeccb16bcbe");
//! ```
//!
//! ---
//! **Security NOTE:** SipHash is a PRF, not a collision-resistant hash. It
//! is meant for keyed use with a secret key.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
mod stream;

use backend::{Active, Backend};

pub use sipdigest_core::{Digest, Error, Key, Rounds, DIGEST_LEN, KEY_LEN};
pub use stream::SipHash;

/// Length of a hex digest in characters.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_LEN;

// ---------------------------------------------------------------------------
// One-shot API
// ---------------------------------------------------------------------------

/// SipHash-1-3 digest of `message`.
#[must_use]
pub fn digest(message: &[u8], key: &Key) -> Digest {
    digest_with(message, key, Rounds::SIP_1_3)
}

/// SipHash-1-3 digest of `message` as lowercase hex.
#[must_use]
pub fn hexdigest(message: &[u8], key: &Key) -> String {
    hex::encode(digest(message, key))
}

/// Digest of `message` with explicit round counts.
#[must_use]
pub fn digest_with(message: &[u8], key: &Key, rounds: Rounds) -> Digest {
    Active::hash(message, key, rounds)
}

/// Hex digest of `message` with explicit round counts.
#[must_use]
pub fn hexdigest_with(message: &[u8], key: &Key, rounds: Rounds) -> String {
    hex::encode(digest_with(message, key, rounds))
}

/// SipHash-1-3 of `message`.
#[must_use]
pub fn siphash13(message: &[u8], key: &Key) -> Digest {
    digest_with(message, key, Rounds::SIP_1_3)
}

/// SipHash-2-4 of `message`.
#[must_use]
pub fn siphash24(message: &[u8], key: &Key) -> Digest {
    digest_with(message, key, Rounds::SIP_2_4)
}

/// Hash many independent messages in **parallel** using Rayon (feature `parallel`).
///
/// Results are in input order and equal to hashing each message on its own.
#[cfg(feature = "parallel")]
pub fn digest_batch(messages: &[&[u8]], key: &Key, rounds: Rounds) -> Vec<Digest> {
    use rayon::prelude::*;

    messages
        .par_iter()
        .map(|m| digest_with(m, key, rounds))
        .collect()
}
