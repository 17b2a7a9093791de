//! Well-known program ids and associated token account derivation.

use crate::address::AddressKey;
use crate::error::AddressError;
use crate::pda;

// ---------------------------------------------------------------------------
// Well-known program IDs
// ---------------------------------------------------------------------------

/// System Program: 32 zero bytes.
///
/// Its usual text form is `11111111111111111111111111111111`, but
/// [`AddressKey::to_base58`] trims every zero digit and yields `""`.
pub const SYSTEM_PROGRAM_ID: AddressKey = AddressKey::new([0u8; 32]);

/// SPL Token Program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: AddressKey = AddressKey::new([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Associated Token Account Program: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: AddressKey = AddressKey::new([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
]);

/// Memo Program v2: `MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr`
pub const MEMO_PROGRAM_ID: AddressKey = AddressKey::new([
    0x05, 0x4a, 0x53, 0x5a, 0x99, 0x29, 0x21, 0x06, 0x4d, 0x24, 0xe8, 0x71, 0x60, 0xda, 0x38,
    0x7c, 0x7c, 0x35, 0xb5, 0xdd, 0xbc, 0x92, 0xbb, 0x81, 0xe4, 0x1f, 0xa8, 0x40, 0x41, 0x05,
    0x44, 0x8d,
]);

// ---------------------------------------------------------------------------
// Associated Token Account (PDA) derivation
// ---------------------------------------------------------------------------

/// Derive the associated token account address for a wallet + mint pair.
///
/// The ATA is the PDA of `[wallet, token_program_id, mint]` under the
/// Associated Token Account program.
pub fn derive_associated_token_address(
    wallet: &AddressKey,
    mint: &AddressKey,
) -> Result<AddressKey, AddressError> {
    derive_associated_token_address_with_bump(wallet, mint).map(|(address, _bump)| address)
}

/// Same as [`derive_associated_token_address`], also returning the bump seed
/// the ATA program expects in its create instruction.
pub fn derive_associated_token_address_with_bump(
    wallet: &AddressKey,
    mint: &AddressKey,
) -> Result<(AddressKey, u8), AddressError> {
    pda::find_program_address(
        &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}
