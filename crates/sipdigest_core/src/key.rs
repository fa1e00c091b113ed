//! 128-bit key and the key schedule.

use crate::error::Error;
use crate::state::State;

/// Key size in bytes.
pub const KEY_LEN: usize = 16;

/// Initialisation constants: "somepseudorandomlygeneratedbytes" cut into
/// four 8-byte big-endian words. *Changing these changes the hash*.
const IV: [u64; 4] = [
    u64::from_be_bytes(*b"somepseu"),
    u64::from_be_bytes(*b"dorandom"),
    u64::from_be_bytes(*b"lygenera"),
    u64::from_be_bytes(*b"tedbytes"),
];

/// A SipHash key.
///
/// Always exactly [`KEY_LEN`] bytes; construction from a slice of any other
/// length fails with [`Error::InvalidKeyLength`] instead of truncating or
/// padding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// The all-zero key.
    pub const DEFAULT: Self = Self([0; KEY_LEN]);

    /// Wraps 16 raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Copies key material out of `bytes`, which must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The little-endian key words `(k0, k1)`.
    #[must_use]
    pub const fn words(&self) -> (u64, u64) {
        let k = &self.0;
        let k0 = u64::from_le_bytes([k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7]]);
        let k1 = u64::from_le_bytes([k[8], k[9], k[10], k[11], k[12], k[13], k[14], k[15]]);
        (k0, k1)
    }

    /// Key schedule: the state every digest computation starts from.
    #[must_use]
    pub const fn initial_state(&self) -> State {
        let (k0, k1) = self.words();
        State {
            v0: IV[0] ^ k0,
            v1: IV[1] ^ k1,
            v2: IV[2] ^ k0,
            v3: IV[3] ^ k1,
        }
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Key material stays out of logs and panic messages.
impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Key(..)")
    }
}
