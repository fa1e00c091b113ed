//! Buffered, incrementally fed SipHash.

use std::io;

use sipdigest_core::{Digest, Key, Rounds};

use crate::backend::{Active, Backend};

/// Initial buffer capacity; most inputs are short keys and identifiers.
const INITIAL_CAPACITY: usize = 64;

/// A SipHash instance that accumulates input until a digest is requested.
///
/// Input passed to [`update`](Self::update) is only buffered. Hashing
/// happens in [`finish`](Self::finish) over everything buffered so far, so
/// any chunking of the input yields the same digest as hashing the whole
/// message at once. `finish` does not consume the buffer: calling it twice
/// returns the same digest until [`reset`](Self::reset) is called.
///
/// The buffer is not synchronized; share an instance between threads only
/// behind a lock.
#[derive(Clone, Debug)]
pub struct SipHash {
    key: Key,
    rounds: Rounds,
    buffer: Vec<u8>,
}

impl SipHash {
    /// New instance with explicit round counts.
    #[must_use]
    pub fn new(key: Key, rounds: Rounds) -> Self {
        Self {
            key,
            rounds,
            buffer: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// SipHash-1-3 under `key`.
    #[must_use]
    pub fn sip13(key: Key) -> Self {
        Self::new(key, Rounds::SIP_1_3)
    }

    /// SipHash-2-4 under `key`.
    #[must_use]
    pub fn sip24(key: Key) -> Self {
        Self::new(key, Rounds::SIP_2_4)
    }

    /// Append `data` to the buffered message.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.buffer.extend_from_slice(data.as_ref());
        self
    }

    /// Digest of everything buffered since construction or the last reset.
    #[must_use]
    pub fn finish(&self) -> Digest {
        Active::hash(&self.buffer, &self.key, self.rounds)
    }

    /// Alias of [`finish`](Self::finish).
    #[must_use]
    pub fn digest(&self) -> Digest {
        self.finish()
    }

    /// Lowercase hex of [`digest`](Self::digest); always 16 characters.
    #[must_use]
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Drop the buffered input. Key and rounds are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// The key digests are computed under.
    #[must_use]
    pub const fn key(&self) -> &Key {
        &self.key
    }

    /// Replace the key. Buffered input is kept.
    pub fn set_key(&mut self, key: Key) -> &mut Self {
        self.key = key;
        self
    }

    /// Round counts digests are computed with.
    #[must_use]
    pub const fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Name of the backend that computes the digests.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        Active::NAME
    }
}

impl Default for SipHash {
    fn default() -> Self {
        Self::new(Key::DEFAULT, Rounds::default())
    }
}

impl io::Write for SipHash {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Extend<u8> for SipHash {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<'a> Extend<&'a u8> for SipHash {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}
