//! SRP client implementation.
//!
//! # Usage
//! Construct the client with the salt received from the server; the private
//! ephemeral `a` is drawn during construction and the public ephemeral
//! `A = g^a mod N` is derived immediately:
//!
//! ```ignore
//! let client = SrpClient::<Sha3_256>::new(&mut rng, &identity_hash, &G_256, &salt, &params)?;
//! ```
//!
//! Send `public_key()` to the server; once the server's public ephemeral
//! `B` and scrambler `u` arrive, complete the exchange:
//!
//! ```ignore
//! let session = client.process_reply(&b_pub, &scrambler)?;
//! ```
//!
//! `process_reply` consumes the client: a participant derives its key once
//! and is read-only afterwards.

use core::marker::PhantomData;

use digest::Digest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, Rng};

use crate::errors::{Error, Result};
use crate::types::{SrpGroup, SrpParams, SrpSession};
use crate::utils::compute_x;

/// SRP client state between construction and key agreement.
pub struct SrpClient<'a, D: Digest> {
    group: &'a SrpGroup,
    x: BigUint,
    a: BigUint,
    a_pub: BigUint,
    d: PhantomData<D>,
}

impl<'a, D: Digest> SrpClient<'a, D> {
    /// Create a client for one handshake with the salt the server sent.
    pub fn new<R>(
        rng: &mut R,
        identity_hash: &[u8],
        group: &'a SrpGroup,
        salt: &BigUint,
        params: &SrpParams,
    ) -> Result<Self>
    where
        R: Rng + CryptoRng,
    {
        params.validate()?;
        if salt.is_zero() {
            return Err(Error::IllegalParameter { name: "salt" });
        }

        let a = rng.gen_biguint(params.client_private_bits);
        let a_pub = group.g.modpow(&a, &group.n);
        let x = compute_x::<D>(identity_hash, salt);

        Ok(Self {
            group,
            x,
            a,
            a_pub,
            d: PhantomData,
        })
    }

    /// The public ephemeral `A = g^a mod N` sent to the server.
    pub fn public_key(&self) -> &BigUint {
        &self.a_pub
    }

    /// Derive the session key from the server's public ephemeral and
    /// scrambler: `K = (B - k*g^x)^(a + u*x) mod N`.
    pub fn process_reply(self, b_pub: &BigUint, scrambler: &BigUint) -> Result<SrpSession> {
        let n = &self.group.n;

        if scrambler.is_zero() {
            return Err(Error::IllegalParameter { name: "scrambler" });
        }
        // Safeguard against a malicious B
        if (b_pub % n).is_zero() {
            return Err(Error::IllegalParameter { name: "b_pub" });
        }

        let interm = (&self.group.k * self.group.g.modpow(&self.x, n)) % n;
        // The server reduces B modulo N, so (k*v + g^b) can come out below
        // k*g^x; lift by N before subtracting.
        let base = if b_pub > &interm {
            (b_pub - &interm) % n
        } else {
            (n + b_pub - &interm) % n
        };
        let exp = &self.a + scrambler * &self.x;
        Ok(SrpSession::new(base.modpow(&exp, n)))
    }
}
