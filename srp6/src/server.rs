//! SRP server implementation.
//!
//! # Usage
//! Construct the server from the identity hash of the stored credentials;
//! construction draws the salt, the scrambler and the private ephemeral,
//! and derives the verifier and the public ephemeral:
//!
//! ```ignore
//! let server = SrpServer::<Sha3_256>::new(&mut rng, &identity_hash, &G_256, &params)?;
//! ```
//!
//! Send `salt()`, `scrambler()` and `public_key()` to the client, receive
//! its public ephemeral `A`, and complete:
//!
//! ```ignore
//! let session = server.process_reply(&a_pub)?;
//! ```

use core::marker::PhantomData;

use digest::Digest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, Rng};

use crate::errors::{Error, Result};
use crate::types::{SrpGroup, SrpParams, SrpSession};
use crate::utils::{compute_x, generate_nonzero};

/// SRP server state between construction and key agreement.
#[derive(Debug)]
pub struct SrpServer<'a, D: Digest> {
    group: &'a SrpGroup,
    salt: BigUint,
    scrambler: BigUint,
    verifier: BigUint,
    b: BigUint,
    b_pub: BigUint,
    d: PhantomData<D>,
}

impl<'a, D: Digest> SrpServer<'a, D> {
    /// Create a server for one handshake.
    ///
    /// The salt and scrambler are drawn at the widths given in `params`,
    /// resampling on zero. `identity_hash` is the digest of the user's
    /// credentials (see [`crate::utils::compute_identity_hash`]).
    pub fn new<R>(
        rng: &mut R,
        identity_hash: &[u8],
        group: &'a SrpGroup,
        params: &SrpParams,
    ) -> Result<Self>
    where
        R: Rng + CryptoRng,
    {
        params.validate()?;

        let salt = generate_nonzero(rng, params.salt_bits);
        let scrambler = generate_nonzero(rng, params.scrambler_bits);

        let x = compute_x::<D>(identity_hash, &salt);
        let verifier = group.g.modpow(&x, &group.n);

        let b = rng.gen_biguint(params.server_private_bits);
        // B = (k*v + g^b) mod N
        let b_pub = (&group.k * &verifier + group.g.modpow(&b, &group.n)) % &group.n;

        Ok(Self {
            group,
            salt,
            scrambler,
            verifier,
            b,
            b_pub,
            d: PhantomData,
        })
    }

    /// The salt `s` sent to the client.
    pub fn salt(&self) -> &BigUint {
        &self.salt
    }

    /// The scrambler `u` sent to the client.
    pub fn scrambler(&self) -> &BigUint {
        &self.scrambler
    }

    /// The password verifier `v = g^x mod N`.
    pub fn verifier(&self) -> &BigUint {
        &self.verifier
    }

    /// The public ephemeral `B` sent to the client.
    pub fn public_key(&self) -> &BigUint {
        &self.b_pub
    }

    /// Derive the session key from the client's public ephemeral:
    /// `K = (A * v^u mod N)^b mod N`.
    pub fn process_reply(self, a_pub: &BigUint) -> Result<SrpSession> {
        let n = &self.group.n;

        // Safeguard against a malicious A
        if (a_pub % n).is_zero() {
            return Err(Error::IllegalParameter { name: "a_pub" });
        }

        let base = (a_pub * self.verifier.modpow(&self.scrambler, n)) % n;
        Ok(SrpSession::new(base.modpow(&self.b, n)))
    }
}
