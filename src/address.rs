//! Account addresses and their EIP-55 mixed-case checksum.
//!
//! An address is accepted as 40 hex digits with an optional `0x` prefix.
//! All-lowercase and all-uppercase input is taken at face value; mixed-case
//! input is treated as a claimed checksum and must match exactly.

use std::fmt;
use std::str::FromStr;

use sha3::{Digest, Keccak256};

use crate::error::{Error, Result};

/// A 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Canonical `0x`-prefixed checksummed form.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = Keccak256::digest(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidAddress {
            address: input.to_string(),
            message: message.to_string(),
        };

        let digits = input.strip_prefix("0x").unwrap_or(input);

        if digits.len() != 40 {
            return Err(invalid("expected 40 hex digits"));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid("not a hex string"))?;
        let address = Address(bytes);

        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *digits {
            return Err(invalid("bad address checksum"));
        }

        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// Parses `input` and returns its checksummed form.
pub fn checksum(input: &str) -> Result<String> {
    Ok(input.parse::<Address>()?.to_checksum())
}
