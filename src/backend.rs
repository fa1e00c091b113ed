//! Interchangeable SipHash backends.
//!
//! Every backend implements the same contract,
//! `hash(message, key, rounds) -> Digest`, and must agree with the
//! reference core bit for bit. Which one serves the public API is decided at
//! compile time through [`Active`]; there is no per-call dispatch.
//!
//! * [`Portable`] drives the reference state machine from `sipdigest_core`
//!   word by word.
//! * [`Unrolled`] monomorphizes the SipHash-1-3 and SipHash-2-4 presets so
//!   the round loops disappear, and reads words straight out of
//!   `chunks_exact`. Other round counts go through [`Portable`].

use sipdigest_core::{padding_word, read_word, Digest, Key, Rounds, SipHasher, WORD_LEN};

/// A complete SipHash implementation.
pub trait Backend {
    /// Short name, for diagnostics.
    const NAME: &'static str;

    /// Digest of `message` under `key` with the given round counts.
    fn hash(message: &[u8], key: &Key, rounds: Rounds) -> Digest;
}

/// Backend bound to the public API, fixed when the crate is compiled.
#[cfg(feature = "unrolled")]
pub type Active = Unrolled;

/// Backend bound to the public API, fixed when the crate is compiled.
#[cfg(not(feature = "unrolled"))]
pub type Active = Portable;

// ---------------------------------------------------------------------------
// Baseline
// ---------------------------------------------------------------------------

/// The reference implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl Backend for Portable {
    const NAME: &'static str = "portable";

    fn hash(message: &[u8], key: &Key, rounds: Rounds) -> Digest {
        SipHasher::hash(key, rounds, message)
    }
}

// ---------------------------------------------------------------------------
// Fixed-round fast path
// ---------------------------------------------------------------------------

/// Const-generic SipHash for the two named presets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrolled;

impl Backend for Unrolled {
    const NAME: &'static str = "unrolled";

    fn hash(message: &[u8], key: &Key, rounds: Rounds) -> Digest {
        match (rounds.compression, rounds.finalization) {
            (1, 3) => hash_fixed::<1, 3>(message, key),
            (2, 4) => hash_fixed::<2, 4>(message, key),
            _ => Portable::hash(message, key, rounds),
        }
    }
}

/// Same pipeline as the reference, with `C` and `D` known at compile time.
#[inline(always)]
fn hash_fixed<const C: u32, const D: u32>(message: &[u8], key: &Key) -> Digest {
    let mut st = key.initial_state();

    let mut chunks = message.chunks_exact(WORD_LEN);
    for chunk in &mut chunks {
        let m = read_word(chunk);
        st.v3 ^= m;
        for _ in 0..C {
            st.round();
        }
        st.v0 ^= m;
    }

    let m = padding_word(message.len(), chunks.remainder());
    st.v3 ^= m;
    for _ in 0..C {
        st.round();
    }
    st.v0 ^= m;

    st.v2 ^= 0xff;
    for _ in 0..D {
        st.round();
    }
    st.fold().to_be_bytes()
}
