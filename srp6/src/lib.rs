#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! An implementation of the SRP-6 password-authenticated key agreement.
//!
//! A client holding a username and password and a server holding a
//! verifier derived from those credentials derive byte-identical session
//! keys over an untrusted channel without ever transmitting the password.
//! The multiplier is the SRP-6 protocol constant `k = 3`; SRP-6a's
//! hash-derived multiplier is not implemented.
//!
//! All arithmetic is over a shared group: a large safe prime `N` and a
//! small generator `g`. `H` below is any [`digest::Digest`] hash, SHA3-256
//! ([`sha3_custom::Sha3_256`]) in the default instantiations.
//!
//! | Server                           | Data transfer       | Client                             |
//! |----------------------------------|---------------------|------------------------------------|
//! | `s = ${0,1}^salt_bits`, `s > 0`  |                     |                                    |
//! | `u = ${0,1}^scram_bits`, `u > 0` |                     |                                    |
//! | `x = H(s ‖ ih)`                  |                     |                                    |
//! | `v = g^x mod N`                  |                     |                                    |
//! | `b = ${0,1}^256`                 |                     | `a = ${0,1}^128`                   |
//! | `B = (k*v + g^b) mod N`          | <- `A`  `s, u, B` ->| `A = g^a mod N`                    |
//! |                                  |                     | `x = H(s ‖ ih)`                    |
//! | `K = (A * v^u)^b mod N`          |                     | `K = (B - k*g^x)^(a + u*x) mod N`  |
//!
//! Variables and notation:
//!
//! - `ih` — identity hash, `H(UTF-16LE(username ‖ ":" ‖ password))`
//! - `${0,1}^n` — draw `n` uniform random bits
//! - ‖ — concatenation of big-endian byte strings
//! - `s` — salt, `u` — scrambler, `k` — multiplier (3)
//! - `a`, `b` — private ephemerals; `A`, `B` — public ephemerals
//! - `K` — the shared session key; never transmitted
//!
//! Both sides compute `K = g^(b*(a + u*x)) mod N`, so the keys agree
//! exactly when both derived the same `x`, that is, the same password.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::OsRng;
//! use sha3_custom::Sha3_256;
//! use srp6::groups::G_256;
//! use srp6::utils::compute_identity_hash;
//! use srp6::{Client, Server, SrpParams};
//!
//! # fn main() -> srp6::Result<()> {
//! let params = SrpParams::default();
//! let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
//!
//! let server = Server::new(&mut OsRng, &identity, &G_256, &params)?;
//! let client = Client::new(&mut OsRng, &identity, &G_256, server.salt(), &params)?;
//!
//! let a_pub = client.public_key().clone();
//! let b_pub = server.public_key().clone();
//! let u = server.scrambler().clone();
//!
//! let server_session = server.process_reply(&a_pub)?;
//! let client_session = client.process_reply(&b_pub, &u)?;
//! assert!(server_session.agrees_with(&client_session));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod groups;
pub mod server;
pub mod types;
pub mod utils;

pub use crate::client::SrpClient;
pub use crate::errors::{Error, Result};
pub use crate::server::SrpServer;
pub use crate::types::{SrpGroup, SrpParams, SrpSession};

/// Default server instantiation hashing with SHA3-256.
pub type Server<'a> = SrpServer<'a, sha3_custom::Sha3_256>;

/// Default client instantiation hashing with SHA3-256.
pub type Client<'a> = SrpClient<'a, sha3_custom::Sha3_256>;
