//! The four-word SipHash state and its ARX round.

/// Internal SipHash state.
///
/// Created by [`Key::initial_state`](crate::Key::initial_state), mutated by
/// every compressed word and dropped once the digest is extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    /// First state word.
    pub v0: u64,
    /// Second state word.
    pub v1: u64,
    /// Third state word.
    pub v2: u64,
    /// Fourth state word.
    pub v3: u64,
}

impl State {
    /// One SipRound.
    ///
    /// The statements are strictly sequential: each reads words already
    /// updated earlier in the same round, so they must not be reordered.
    #[inline(always)]
    pub fn round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13) ^ self.v0;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16) ^ self.v2;

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21) ^ self.v0;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17) ^ self.v2;
        self.v2 = self.v2.rotate_left(32);
    }

    /// Apply [`round`](Self::round) `n` times.
    #[inline(always)]
    pub fn rounds(&mut self, n: u32) {
        for _ in 0..n {
            self.round();
        }
    }

    /// XOR-fold of all four words; the output word before serialization.
    #[inline(always)]
    #[must_use]
    pub const fn fold(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}
