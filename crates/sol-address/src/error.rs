use thiserror::Error;

/// Address parsing and program-derived address errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// `index` is the byte offset of `character` in the input text.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("base58 text too long: max {max} characters, got {actual}")]
    TextTooLong { max: usize, actual: usize },

    #[error("too many seeds: {count} exceeds the maximum of {max}")]
    TooManySeeds { count: usize, max: usize },

    #[error("seed {index} is {len} bytes, exceeds the maximum of {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("provided seeds do not result in a valid address")]
    InvalidSeeds,

    #[error("unable to find a viable program address bump seed")]
    BumpSeedNotFound,
}
