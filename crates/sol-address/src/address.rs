//! The 32-byte address key.
//!
//! Ledger addresses are raw 32-byte values: Ed25519 public keys for wallets,
//! SHA-256 digests for program-derived addresses. Text form is Base58 through
//! [`base58::trim_encode`], so keys inherit that codec's trimming behavior:
//! a key with a leading zero byte, or whose encoding ends in `'1'`, does not
//! survive a text round trip. The raw 32-byte form always does.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::base58;
use crate::error::AddressError;

/// Number of bytes in an address key.
pub const KEY_LEN: usize = 32;

/// Maximum length of a Base58-encoded address key.
pub const MAX_BASE58_LEN: usize = 44;

/// A fixed 32-byte ledger address.
///
/// Equality and ordering are byte-wise lexicographic.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressKey([u8; KEY_LEN]);

impl AddressKey {
    /// Wrap 32 bytes verbatim.
    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a slice that must be exactly 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; KEY_LEN] = bytes.try_into().map_err(|_| AddressError::LengthMismatch {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Build a key from a 32-byte hash output, e.g. `Sha256::finalize()`.
    pub fn from_digest<D: Into<[u8; KEY_LEN]>>(digest: D) -> Self {
        Self(digest.into())
    }

    /// Base58 text form, produced by [`base58::trim_encode`].
    pub fn to_base58(&self) -> String {
        base58::trim_encode(&self.0)
    }

    /// Parse Base58 text, returning `None` for anything that is not exactly
    /// one key: text longer than 44 characters, a non-alphabet character, or
    /// a decoded length other than 32 bytes.
    pub fn from_string(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parse Base58 text, reporting why it was rejected.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        if text.len() > MAX_BASE58_LEN {
            return Err(AddressError::TextTooLong {
                max: MAX_BASE58_LEN,
                actual: text.len(),
            });
        }
        let bytes = base58::decode_checked(text)?;
        Self::try_from_slice(&bytes)
    }

    /// The raw 32-byte wire form.
    pub fn serialize(&self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Read the raw wire form; the input must be exactly 32 bytes.
    pub fn deserialize(data: &[u8]) -> Result<Self, AddressError> {
        Self::try_from_slice(data)
    }

    pub const fn to_bytes(self) -> [u8; KEY_LEN] {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for AddressKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for AddressKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<AddressKey> for [u8; KEY_LEN] {
    fn from(key: AddressKey) -> Self {
        key.0
    }
}

impl TryFrom<&[u8]> for AddressKey {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(bytes)
    }
}

impl TryFrom<Vec<u8>> for AddressKey {
    type Error = AddressError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from_slice(&bytes)
    }
}

impl FromStr for AddressKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressKey({})", self.to_base58())
    }
}

// JSON-RPC payloads carry keys as Base58 strings.
impl Serialize for AddressKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for AddressKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
