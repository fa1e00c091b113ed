use thiserror::Error;

/// Errors raised by the SipHash core.
///
/// The hash itself is total over its input; the only way to fail is to hand
/// over key material of the wrong size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material was not exactly [`KEY_LEN`](crate::KEY_LEN) bytes.
    #[error("key must be exactly 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key material.
        len: usize,
    },
}
