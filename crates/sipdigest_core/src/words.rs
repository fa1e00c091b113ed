//! Message segmentation: full little-endian words plus one padding word.

use core::iter::FusedIterator;
use core::slice::ChunksExact;

/// Size of a message word in bytes.
pub const WORD_LEN: usize = 8;

/// Read one full message word (little-endian).
///
/// `chunk` must be exactly [`WORD_LEN`] bytes; callers get it from
/// `chunks_exact(WORD_LEN)`.
#[inline(always)]
#[must_use]
pub fn read_word(chunk: &[u8]) -> u64 {
    let mut word = [0u8; WORD_LEN];
    word.copy_from_slice(chunk);
    u64::from_le_bytes(word)
}

/// Build the final word of a message of `len` bytes whose trailing partial
/// word is `tail` (`tail.len() < 8`).
///
/// Tail bytes are packed little-endian into the low bytes and the top byte
/// carries `len mod 256`. Every message produces exactly one of these, even
/// when `len` is a multiple of 8 (then `tail` is empty).
#[inline(always)]
#[must_use]
pub fn padding_word(len: usize, tail: &[u8]) -> u64 {
    debug_assert!(tail.len() < WORD_LEN);
    let mut word = ((len as u64) & 0xff) << 56;
    for (i, &byte) in tail.iter().enumerate() {
        word |= u64::from(byte) << (8 * i);
    }
    word
}

/// Iterator over the words SipHash compresses for a message.
///
/// Yields `len / 8` full words followed by exactly one padding word, so it
/// is never empty.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    chunks: ChunksExact<'a, u8>,
    len: usize,
    padded: bool,
}

impl<'a> Words<'a> {
    /// Segment `message`.
    #[must_use]
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            chunks: message.chunks_exact(WORD_LEN),
            len: message.len(),
            padded: false,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if let Some(chunk) = self.chunks.next() {
            return Some(read_word(chunk));
        }
        if self.padded {
            return None;
        }
        self.padded = true;
        Some(padding_word(self.len, self.chunks.remainder()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.chunks.len() + usize::from(!self.padded);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Words<'_> {}

impl FusedIterator for Words<'_> {}
