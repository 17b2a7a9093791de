//! Solana address keys and program-derived addresses.
//!
//! This crate handles the 32-byte address type, its Base58 text form, and
//! program-derived address (PDA) derivation with bump-seed search, without
//! pulling in `solana-sdk`.
//!
//! The Base58 codec here reproduces a reference ledger library whose trimmed
//! encoding drops leading zero bytes; see [`base58`] before mixing these
//! strings with standard Base58 producers.

pub mod address;
pub mod base58;
pub mod collaborators;
pub mod error;
pub mod pda;
pub mod well_known;

// Re-export key public types for ergonomic imports.
pub use address::{AddressKey, KEY_LEN, MAX_BASE58_LEN};
pub use collaborators::{AddressHasher, CurvePredicate, Ed25519Curve, Sha256Hasher};
pub use error::AddressError;
pub use pda::{
    create_program_address, find_program_address, is_on_curve, try_find_program_address,
    validate_seeds, ConstraintViolation, Derivation, ProgramAddressDeriver, MAX_BUMP_SEED,
    MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER,
};
pub use well_known::{
    derive_associated_token_address, derive_associated_token_address_with_bump,
    ASSOCIATED_TOKEN_PROGRAM_ID, MEMO_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
