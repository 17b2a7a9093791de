//! External capabilities consumed by program address derivation.
//!
//! The deriver only needs two things from the outside world: a 32-byte
//! digest over a list of byte slices, and a yes/no answer to "is this a
//! valid Ed25519 point". Both are traits so the deriver does not depend on
//! how a particular crypto library answers them.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

/// A deterministic 32-byte hash over the concatenation of `parts`.
pub trait AddressHasher {
    fn hash32(&self, parts: &[&[u8]]) -> [u8; 32];
}

/// Membership test for the curve that ledger public keys live on.
pub trait CurvePredicate {
    fn is_valid_curve_point(&self, bytes: &[u8; 32]) -> bool;
}

impl<T: AddressHasher + ?Sized> AddressHasher for &T {
    fn hash32(&self, parts: &[&[u8]]) -> [u8; 32] {
        (**self).hash32(parts)
    }
}

impl<T: CurvePredicate + ?Sized> CurvePredicate for &T {
    fn is_valid_curve_point(&self, bytes: &[u8; 32]) -> bool {
        (**self).is_valid_curve_point(bytes)
    }
}

/// SHA-256, the ledger's address hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl AddressHasher for Sha256Hasher {
    fn hash32(&self, parts: &[&[u8]]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }
}

/// Ed25519 point check via compressed Edwards-Y decompression.
///
/// Decompression succeeds exactly when the bytes name a point on the curve,
/// which is the same test the ledger runtime applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519Curve;

impl CurvePredicate for Ed25519Curve {
    fn is_valid_curve_point(&self, bytes: &[u8; 32]) -> bool {
        CompressedEdwardsY(*bytes).decompress().is_some()
    }
}
