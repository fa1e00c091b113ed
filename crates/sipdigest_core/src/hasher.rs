//! The compression / finalization state machine.

use crate::key::Key;
use crate::state::State;
use crate::words::Words;
use crate::Digest;

/// Round counts: `compression` SipRounds per message word and
/// `finalization` SipRounds before the digest is extracted.
///
/// Any pair is accepted and executed literally; `0` simply skips the
/// corresponding mixing. Callers that want to forbid degenerate values have
/// to check them themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rounds {
    /// `c`: rounds per compressed word.
    pub compression: u32,
    /// `d`: rounds at finalization.
    pub finalization: u32,
}

impl Rounds {
    /// SipHash-1-3.
    pub const SIP_1_3: Self = Self::new(1, 3);
    /// SipHash-2-4.
    pub const SIP_2_4: Self = Self::new(2, 4);

    /// Arbitrary `c`-`d` variant.
    #[must_use]
    pub const fn new(compression: u32, finalization: u32) -> Self {
        Self {
            compression,
            finalization,
        }
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::SIP_1_3
    }
}

/// SipHash state machine for one digest computation.
///
/// `new` leaves the hasher initialized from the key schedule, `compress`
/// absorbs words in order, and `finalize` consumes the hasher, so a finished
/// computation cannot be fed again.
#[derive(Clone, Debug)]
pub struct SipHasher {
    state: State,
    rounds: Rounds,
}

impl SipHasher {
    /// Start a computation under `key`.
    #[must_use]
    pub const fn new(key: &Key, rounds: Rounds) -> Self {
        Self {
            state: key.initial_state(),
            rounds,
        }
    }

    /// Full pipeline: key schedule, every word of `message` (padding word
    /// included), finalization.
    #[must_use]
    pub fn hash(key: &Key, rounds: Rounds, message: &[u8]) -> Digest {
        let mut hasher = Self::new(key, rounds);
        for word in Words::new(message) {
            hasher.compress(word);
        }
        hasher.finalize()
    }

    /// Absorb one message word. Full and padding words go through the same
    /// path.
    #[inline]
    pub fn compress(&mut self, word: u64) {
        self.state.v3 ^= word;
        self.state.rounds(self.rounds.compression);
        self.state.v0 ^= word;
    }

    /// Finalization rounds and digest extraction (big-endian).
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        self.state.v2 ^= 0xff;
        self.state.rounds(self.rounds.finalization);
        self.state.fold().to_be_bytes()
    }

    /// Current state, for inspection between steps.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Round counts this hasher runs with.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        self.rounds
    }
}
