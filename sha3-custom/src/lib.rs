#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Pure Rust SHA3-256 built from first principles.
//!
//! The Keccak-f[1600] permutation, the multi-rate padding and the sponge
//! framing are implemented directly from FIPS 202 rather than delegating to
//! a platform hash. The hasher plugs into the [`digest`] trait family, so it
//! drops into any code that is generic over [`digest::Digest`].
//!
//! # Usage
//!
//! ```
//! use digest::Digest;
//! use sha3_custom::Sha3_256;
//!
//! // one-shot
//! let out = Sha3_256::digest(b"abc");
//! assert_eq!(out.len(), 32);
//!
//! // streaming
//! let mut hasher = Sha3_256::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize(), out);
//! ```

pub mod keccak;
mod sha3;

pub use digest;
pub use sha3::{Sha3_256, RATE_BYTES};
