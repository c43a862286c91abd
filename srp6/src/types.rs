//! Shared SRP types.

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::ConstantTimeEq;

use crate::errors::{Error, Result};
use crate::utils;

// SRP-6 fixes the multiplier; SRP-6a derives it from N and g instead.
const MULTIPLIER_K: u32 = 3;

/// Group used for SRP computations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SrpGroup {
    /// A large safe prime (N = 2q + 1, where q is prime)
    pub n: BigUint,
    /// A generator modulo N
    pub g: BigUint,
    /// The protocol multiplier, fixed at 3
    pub k: BigUint,
}

impl SrpGroup {
    /// Build a group from the given modulus and generator.
    ///
    /// Rejects any violation of `0 < g < N` and `0 < k < N`.
    pub fn new(n: BigUint, g: BigUint) -> Result<Self> {
        let k = BigUint::from(MULTIPLIER_K);
        if n.is_zero() {
            return Err(Error::IllegalParameter { name: "modulus" });
        }
        if g.is_zero() || g >= n {
            return Err(Error::IllegalParameter { name: "generator" });
        }
        if k >= n {
            return Err(Error::IllegalParameter { name: "multiplier" });
        }
        Ok(Self { n, g, k })
    }

    /// Build a group with the modulus given as a hexadecimal string.
    pub fn from_hex(n_hex: &str, g: u32) -> Result<Self> {
        Self::new(utils::parse_hex(n_hex)?, BigUint::from(g))
    }
}

/// Bit widths of the random values drawn at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SrpParams {
    /// Bit length of the server-generated salt
    pub salt_bits: u64,
    /// Bit length of the server-generated scrambler
    pub scrambler_bits: u64,
    /// Bit length of the server private ephemeral `b`
    pub server_private_bits: u64,
    /// Bit length of the client private ephemeral `a`
    pub client_private_bits: u64,
}

impl Default for SrpParams {
    /// The reference parameter set: 256-bit salt, 128-bit scrambler,
    /// 256-bit server ephemeral, 128-bit client ephemeral. The a/b
    /// asymmetry is part of the protocol design.
    fn default() -> Self {
        Self {
            salt_bits: 256,
            scrambler_bits: 128,
            server_private_bits: 256,
            client_private_bits: 128,
        }
    }
}

impl SrpParams {
    pub(crate) fn validate(&self) -> Result<()> {
        let widths = [
            (self.salt_bits, "salt_bits"),
            (self.scrambler_bits, "scrambler_bits"),
            (self.server_private_bits, "server_private_bits"),
            (self.client_private_bits, "client_private_bits"),
        ];
        for (bits, name) in widths {
            if bits == 0 {
                return Err(Error::IllegalParameter { name });
            }
        }
        Ok(())
    }
}

/// Outcome of a completed key agreement.
///
/// Both roles end in this state; whether the two keys are equal is the
/// protocol's verdict on the password.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SrpSession {
    key: BigUint,
}

impl SrpSession {
    pub(crate) fn new(key: BigUint) -> Self {
        Self { key }
    }

    /// The session key as an integer.
    pub fn key(&self) -> &BigUint {
        &self.key
    }

    /// The session key as big-endian bytes.
    pub fn key_bytes(&self) -> Vec<u8> {
        self.key.to_bytes_be()
    }

    /// The session key as lowercase hexadecimal.
    pub fn key_hex(&self) -> String {
        utils::to_hex(&self.key)
    }

    /// Constant-time check that the counterpart derived the same key.
    pub fn agrees_with(&self, other: &SrpSession) -> bool {
        let ours = self.key.to_bytes_be();
        let theirs = other.key.to_bytes_be();
        let width = ours.len().max(theirs.len());
        let pad = |bytes: Vec<u8>| {
            let mut padded = vec![0u8; width - bytes.len()];
            padded.extend_from_slice(&bytes);
            padded
        };
        pad(ours).ct_eq(&pad(theirs)).unwrap_u8() == 1
    }
}
