//! Program Derived Address (PDA) derivation.
//!
//! A PDA is `SHA-256(seed_0 || ... || seed_n || program_id || "ProgramDerivedAddress")`,
//! accepted only if the digest is NOT a valid Ed25519 point, so no private
//! key can exist for it. [`ProgramAddressDeriver::find_program_address`]
//! appends a one-byte bump seed, trying 255 down to 1, until the digest
//! falls off the curve.
//!
//! The hash order is fixed by the ledger: seeds in order, then the program
//! id, then the marker with no terminator. Changing it changes every address.

use tracing::{debug, trace};

use crate::address::AddressKey;
use crate::collaborators::{AddressHasher, CurvePredicate, Ed25519Curve, Sha256Hasher};
use crate::error::AddressError;

/// Maximum number of seeds, bump seed included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// First bump seed tried by the search.
pub const MAX_BUMP_SEED: u8 = 255;

/// Domain separation marker hashed after the program id.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// A seed list that can never derive an address, whatever the bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    TooManySeeds { count: usize },
    SeedTooLong { index: usize, len: usize },
}

impl From<ConstraintViolation> for AddressError {
    fn from(violation: ConstraintViolation) -> Self {
        match violation {
            ConstraintViolation::TooManySeeds { count } => AddressError::TooManySeeds {
                count,
                max: MAX_SEEDS,
            },
            ConstraintViolation::SeedTooLong { index, len } => AddressError::SeedTooLong {
                index,
                len,
                max: MAX_SEED_LEN,
            },
        }
    }
}

/// Outcome of a single derivation attempt.
///
/// `RejectedOnCurve` is worth retrying with another bump seed;
/// `RejectedConstraint` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    Accepted(AddressKey),
    RejectedOnCurve,
    RejectedConstraint(ConstraintViolation),
}

impl Derivation {
    pub fn accepted(self) -> Option<AddressKey> {
        match self {
            Derivation::Accepted(address) => Some(address),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<AddressKey, AddressError> {
        match self {
            Derivation::Accepted(address) => Ok(address),
            Derivation::RejectedOnCurve => Err(AddressError::InvalidSeeds),
            Derivation::RejectedConstraint(violation) => Err(violation.into()),
        }
    }
}

fn check_seeds(seeds: &[&[u8]]) -> Result<(), ConstraintViolation> {
    if seeds.len() > MAX_SEEDS {
        return Err(ConstraintViolation::TooManySeeds { count: seeds.len() });
    }
    match seeds.iter().position(|seed| seed.len() > MAX_SEED_LEN) {
        Some(index) => Err(ConstraintViolation::SeedTooLong {
            index,
            len: seeds[index].len(),
        }),
        None => Ok(()),
    }
}

/// Check seed count and seed lengths without hashing anything.
pub fn validate_seeds(seeds: &[&[u8]]) -> Result<(), AddressError> {
    check_seeds(seeds).map_err(AddressError::from)
}

/// Derives program addresses with a pluggable hash and curve check.
///
/// `ProgramAddressDeriver::new()` uses SHA-256 and the Ed25519 point check,
/// which is what the ledger does. Other collaborators are for tests and for
/// hosts that supply their own crypto.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramAddressDeriver<H = Sha256Hasher, C = Ed25519Curve> {
    hasher: H,
    curve: C,
}

impl ProgramAddressDeriver {
    pub const fn new() -> Self {
        Self {
            hasher: Sha256Hasher,
            curve: Ed25519Curve,
        }
    }
}

impl<H: AddressHasher, C: CurvePredicate> ProgramAddressDeriver<H, C> {
    pub const fn with_collaborators(hasher: H, curve: C) -> Self {
        Self { hasher, curve }
    }

    /// Derive an address from `seeds` without searching for a bump seed.
    ///
    /// Useful to verify that a stored bump still derives a known address:
    /// pass the original seeds with `&[bump]` appended.
    pub fn create_program_address(&self, seeds: &[&[u8]], program_id: &AddressKey) -> Derivation {
        if let Err(violation) = check_seeds(seeds) {
            return Derivation::RejectedConstraint(violation);
        }

        let mut parts: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 2);
        parts.extend_from_slice(seeds);
        parts.push(program_id.as_ref());
        parts.push(PDA_MARKER);

        let candidate = AddressKey::new(self.hasher.hash32(&parts));

        if self.curve.is_valid_curve_point(candidate.as_bytes()) {
            return Derivation::RejectedOnCurve;
        }
        Derivation::Accepted(candidate)
    }

    /// Find the address for the highest bump seed in `1..=255` that lands
    /// off the curve.
    ///
    /// Returns `None` if every bump lands on the curve, or immediately if the
    /// seeds break a length limit (the bump seed counts toward `MAX_SEEDS`).
    pub fn try_find_program_address(
        &self,
        seeds: &[&[u8]],
        program_id: &AddressKey,
    ) -> Option<(AddressKey, u8)> {
        for bump in (1..=MAX_BUMP_SEED).rev() {
            let bump_seed = [bump];
            let mut seeds_with_bump = seeds.to_vec();
            seeds_with_bump.push(&bump_seed);

            match self.create_program_address(&seeds_with_bump, program_id) {
                Derivation::Accepted(address) => return Some((address, bump)),
                Derivation::RejectedOnCurve => {
                    trace!(bump, "candidate on curve, trying next bump");
                }
                Derivation::RejectedConstraint(violation) => {
                    debug!(?violation, "seeds can never derive an address");
                    return None;
                }
            }
        }

        debug!(program_id = %program_id, "exhausted all bump seeds");
        None
    }

    /// Like [`try_find_program_address`](Self::try_find_program_address),
    /// but a missing result is an error.
    pub fn find_program_address(
        &self,
        seeds: &[&[u8]],
        program_id: &AddressKey,
    ) -> Result<(AddressKey, u8), AddressError> {
        self.try_find_program_address(seeds, program_id)
            .ok_or(AddressError::BumpSeedNotFound)
    }

    /// Whether Base58 `text` names a valid curve point. Unparseable text is
    /// never on the curve.
    pub fn is_on_curve(&self, text: &str) -> bool {
        AddressKey::from_string(text)
            .is_some_and(|key| self.curve.is_valid_curve_point(key.as_bytes()))
    }
}

/// [`ProgramAddressDeriver::create_program_address`] with the ledger's
/// hash and curve.
pub fn create_program_address(seeds: &[&[u8]], program_id: &AddressKey) -> Derivation {
    ProgramAddressDeriver::new().create_program_address(seeds, program_id)
}

pub fn try_find_program_address(
    seeds: &[&[u8]],
    program_id: &AddressKey,
) -> Option<(AddressKey, u8)> {
    ProgramAddressDeriver::new().try_find_program_address(seeds, program_id)
}

pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &AddressKey,
) -> Result<(AddressKey, u8), AddressError> {
    ProgramAddressDeriver::new().find_program_address(seeds, program_id)
}

pub fn is_on_curve(text: &str) -> bool {
    ProgramAddressDeriver::new().is_on_curve(text)
}

impl AddressKey {
    pub fn create_program_address(
        seeds: &[&[u8]],
        program_id: &AddressKey,
    ) -> Result<AddressKey, AddressError> {
        create_program_address(seeds, program_id).into_result()
    }

    pub fn try_find_program_address(
        seeds: &[&[u8]],
        program_id: &AddressKey,
    ) -> Option<(AddressKey, u8)> {
        try_find_program_address(seeds, program_id)
    }

    pub fn find_program_address(
        seeds: &[&[u8]],
        program_id: &AddressKey,
    ) -> Result<(AddressKey, u8), AddressError> {
        find_program_address(seeds, program_id)
    }

    /// Whether this key is a valid Ed25519 point.
    pub fn is_on_curve(&self) -> bool {
        Ed25519Curve.is_valid_curve_point(self.as_bytes())
    }
}
