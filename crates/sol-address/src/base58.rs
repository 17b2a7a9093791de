//! Base58 big-number codec.
//!
//! Bytes are treated as a big-endian base-256 number and converted to base 58
//! over the Bitcoin/Solana alphabet. The conversion works on fixed-size
//! scratch buffers, so [`encode`] emits the full padded buffer (leading `'1'`
//! digits included) and [`decode`] drops every leading zero byte.
//!
//! # Trimming caveat
//!
//! [`trim_encode`] strips *all* leading and trailing `'1'` characters and
//! [`trim_decode`] strips *all* leading zero bytes. Unlike the usual Base58
//! convention, leading zero bytes of the input are NOT preserved as leading
//! `'1'` characters, and a key whose encoding ends in a zero digit loses that
//! digit. This matches the reference ledger library bit-for-bit and must not
//! be changed to the zero-preserving scheme without coordinating with every
//! consumer of these strings.

use crate::error::AddressError;

/// The 58-symbol alphabet (no `0`, `O`, `I`, `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The alphabet symbol for digit zero.
pub const ZERO_DIGIT: char = '1';

/// Reverse lookup from ASCII to digit value; `-1` marks a non-alphabet byte.
const DIGIT_VALUES: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

fn digit_value(character: char) -> Option<u8> {
    let code = usize::try_from(u32::from(character)).ok()?;
    match DIGIT_VALUES.get(code) {
        Some(&value) if value >= 0 => Some(value as u8),
        _ => None,
    }
}

/// Encode bytes as base-58 digits, most significant first.
///
/// The output always has `2 * input.len()` characters: the scratch buffer is
/// sized for the worst-case expansion and unused high digits appear as `'1'`.
pub fn encode(input: &[u8]) -> String {
    let mut digits = vec![0u8; input.len() * 2];

    for &byte in input {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut().rev() {
            let acc = u32::from(*digit) * 256 + carry;
            *digit = (acc % 58) as u8;
            carry = acc / 58;
        }
    }

    digits
        .iter()
        .map(|&d| char::from(ALPHABET[usize::from(d)]))
        .collect()
}

/// Decode base-58 text into bytes, dropping leading zero bytes.
///
/// A character outside the alphabet yields an empty vector. Use
/// [`decode_checked`] to learn which character was rejected.
pub fn decode(text: &str) -> Vec<u8> {
    decode_checked(text).unwrap_or_default()
}

/// Like [`decode`], but reports the first non-alphabet character and its
/// byte offset in `text`.
pub fn decode_checked(text: &str) -> Result<Vec<u8>, AddressError> {
    // log(58) / log(256) ~= 0.733, plus one byte of headroom.
    let mut buf = vec![0u8; text.len() * 733 / 1000 + 1];

    for (index, character) in text.char_indices() {
        let value =
            digit_value(character).ok_or(AddressError::InvalidCharacter { character, index })?;

        let mut carry = u32::from(value);
        for byte in buf.iter_mut().rev() {
            carry += 58 * u32::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
    }

    let start = buf.iter().position(|&b| b != 0).unwrap_or(buf.len());
    Ok(buf.split_off(start))
}

/// [`encode`] with every leading and trailing `'1'` removed.
///
/// See the module docs: this discards information for inputs with leading
/// zero bytes or a trailing zero digit.
pub fn trim_encode(input: &[u8]) -> String {
    encode(input).trim_matches(ZERO_DIGIT).to_owned()
}

/// [`decode`] with every leading zero byte removed.
pub fn trim_decode(text: &str) -> Vec<u8> {
    let decoded = decode(text);
    let start = decoded.iter().position(|&b| b != 0).unwrap_or(decoded.len());
    decoded[start..].to_vec()
}
