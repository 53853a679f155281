//! Base-62 id conversion handlers

use anyhow::{Context, Result};
use num_bigint::BigUint;

use shopcode::base62;

/// Print the integer id behind a base-62 string
pub fn id(encoded: &str) -> Result<()> {
    let id = base62::decode(encoded)?;
    println!("{}", id);
    Ok(())
}

/// Print the base-62 form of an integer id
pub fn encode(id: &str) -> Result<()> {
    let id: BigUint = id
        .parse()
        .with_context(|| format!("Invalid integer id: {}", id))?;
    println!("{}", base62::encode(&id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_base62() {
        id("2NV").unwrap();
    }

    #[test]
    fn test_id_rejects_bad_symbols() {
        assert!(id("2N!").is_err());
    }

    #[test]
    fn test_encode_accepts_decimal() {
        encode("10783").unwrap();
    }

    #[test]
    fn test_encode_accepts_huge_ids() {
        encode("340282366920938463463374607431768211455").unwrap();
    }

    #[test]
    fn test_encode_rejects_non_numeric() {
        assert!(encode("ten").is_err());
    }
}
