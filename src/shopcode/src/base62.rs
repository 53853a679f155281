//! Base-62 id codec for ChestShop item codes
//!
//! Encoded ids use ChestShop's Base62 ordering: digits first, then
//! lowercase, then uppercase. Symbols are evaluated most-significant
//! first, and ids have no upper bound, so values decode to BigUint.

use num_bigint::BigUint;
use num_traits::Zero;

/// ChestShop's Base62 alphabet. A symbol's index is its digit value.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors that can occur during base-62 decoding
#[derive(Debug, thiserror::Error)]
pub enum Base62Error {
    #[error("Symbol '{0}' is not in the base-62 alphabet")]
    InvalidSymbol(char),
}

/// Decode a base-62 string to its integer value.
///
/// Positional evaluation, most-significant symbol first:
/// `value = value * 62 + digit`. The empty string evaluates to zero.
pub fn decode(encoded: &str) -> Result<BigUint, Base62Error> {
    // Reverse lookup table; 0xFF marks bytes outside the alphabet
    let mut lookup = [0xFFu8; 256];
    for (i, &ch) in BASE62_ALPHABET.iter().enumerate() {
        lookup[ch as usize] = i as u8;
    }

    let mut value = BigUint::zero();
    for symbol in encoded.chars() {
        if !symbol.is_ascii() {
            return Err(Base62Error::InvalidSymbol(symbol));
        }
        let digit = lookup[symbol as usize];
        if digit == 0xFF {
            return Err(Base62Error::InvalidSymbol(symbol));
        }
        value = value * 62u32 + u32::from(digit);
    }

    Ok(value)
}

/// Encode an integer as base-62.
///
/// Zero encodes as `"0"`; other values never carry leading zeros.
pub fn encode(id: &BigUint) -> String {
    if id.is_zero() {
        return "0".to_string();
    }

    let base = BigUint::from(BASE62_ALPHABET.len() as u32);
    let mut remaining = id.clone();
    let mut symbols = Vec::new();

    while !remaining.is_zero() {
        let rem = &remaining % &base;
        let digit = rem.to_u64_digits().first().copied().unwrap_or(0) as usize;
        symbols.push(BASE62_ALPHABET[digit]);
        remaining /= &base;
    }

    symbols.reverse();
    symbols.iter().map(|&b| b as char).collect()
}
