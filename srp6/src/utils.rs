//! Shared computations of the handshake.

use digest::{Digest, Output};
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, Rng};

use crate::errors::{Error, Result};

/// Encode `username:password` as UTF-16LE, two bytes per code unit, low
/// byte first, no BOM.
///
/// This encoding is observable through the verifier; peers that encode the
/// identity differently derive different keys.
pub fn encode_identity(username: &str, password: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 * (username.len() + password.len() + 1));
    let units = username
        .encode_utf16()
        .chain(":".encode_utf16())
        .chain(password.encode_utf16());
    for unit in units {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Hash the credentials into the 32-byte identity hash:
/// `H(UTF-16LE(username ":" password))`.
pub fn compute_identity_hash<D: Digest>(username: &str, password: &str) -> Output<D> {
    D::digest(encode_identity(username, password))
}

/// Derive the private exponent `x = H(salt || identity_hash)`, with the
/// salt in big-endian bytes and the result read big-endian.
pub fn compute_x<D: Digest>(identity_hash: &[u8], salt: &BigUint) -> BigUint {
    let mut d = D::new();
    d.update(salt.to_bytes_be());
    d.update(identity_hash);
    BigUint::from_bytes_be(&d.finalize())
}

/// Draw a uniform integer from `[0, 2^bits)`, resampling until nonzero.
pub(crate) fn generate_nonzero<R>(rng: &mut R, bits: u64) -> BigUint
where
    R: Rng + CryptoRng,
{
    loop {
        let value = rng.gen_biguint(bits);
        if !value.is_zero() {
            return value;
        }
    }
}

/// Parse a hexadecimal integer, upper- or lowercase, no prefix.
pub fn parse_hex(hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::MalformedHex)
}

/// Render an integer as lowercase hexadecimal, no prefix, no separators.
pub fn to_hex(value: &BigUint) -> String {
    value.to_str_radix(16)
}
