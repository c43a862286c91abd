use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};
use sha3_custom::Sha3_256;
use srp6::groups::{G_1024, G_256};
use srp6::utils::{compute_identity_hash, parse_hex, to_hex};
use srp6::{Client, Error, Server, SrpGroup, SrpParams, SrpSession};

fn key_agreement(
    group: &SrpGroup,
    params: &SrpParams,
    username: &str,
    server_password: &str,
    client_password: &str,
) -> (SrpSession, SrpSession) {
    let server_identity = compute_identity_hash::<Sha3_256>(username, server_password);
    let client_identity = compute_identity_hash::<Sha3_256>(username, client_password);

    // each side runs on its own randomness
    let server = Server::new(&mut OsRng, &server_identity, group, params).unwrap();
    let client = Client::new(&mut OsRng, &client_identity, group, server.salt(), params).unwrap();

    let a_pub = client.public_key().clone();
    let b_pub = server.public_key().clone();
    let u = server.scrambler().clone();

    let server_session = server.process_reply(&a_pub).unwrap();
    let client_session = client.process_reply(&b_pub, &u).unwrap();
    (server_session, client_session)
}

#[test]
fn agreement_reference_group() {
    let (server, client) = key_agreement(&G_256, &SrpParams::default(), "TEST", "test", "test");
    assert_eq!(server.key(), client.key());
    assert!(server.agrees_with(&client));
}

#[test]
fn agreement_rfc5054_group() {
    let (server, client) = key_agreement(
        &G_1024,
        &SrpParams::default(),
        "alice",
        "password123",
        "password123",
    );
    assert_eq!(server.key(), client.key());
}

#[test]
fn agreement_wide_parameters() {
    let group = SrpGroup::new(G_1024.n.clone(), BigUint::from(10u32)).unwrap();
    let params = SrpParams {
        salt_bits: 512,
        scrambler_bits: 256,
        ..SrpParams::default()
    };
    let (server, client) = key_agreement(&group, &params, "TEST", "test", "test");
    assert_eq!(server.key(), client.key());
}

#[test]
fn wrong_password_disagrees() {
    let (server, client) = key_agreement(&G_256, &SrpParams::default(), "TEST", "test", "tesu");
    assert_ne!(server.key(), client.key());
    assert!(!server.agrees_with(&client));
}

#[test]
fn deterministic_with_seeded_rng() {
    let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
    let params = SrpParams::default();

    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);
    let server1 = Server::new(&mut rng1, &identity, &G_256, &params).unwrap();
    let server2 = Server::new(&mut rng2, &identity, &G_256, &params).unwrap();

    assert_eq!(server1.salt(), server2.salt());
    assert_eq!(server1.scrambler(), server2.scrambler());
    assert_eq!(server1.verifier(), server2.verifier());
    assert_eq!(server1.public_key(), server2.public_key());

    // and the full exchange is reproducible too
    let mut rng3 = StdRng::seed_from_u64(7);
    let client1 = Client::new(&mut rng3, &identity, &G_256, server1.salt(), &params).unwrap();
    let u = server1.scrambler().clone();
    let b_pub = server1.public_key().clone();
    let session1 = server1.process_reply(client1.public_key()).unwrap();
    let session2 = client1.process_reply(&b_pub, &u).unwrap();
    assert_eq!(session1.key(), session2.key());
}

/// Hands out zero bytes until the budget is spent, then defers to a seeded
/// CSPRNG. Used to force the salt and scrambler draws to resample.
struct ZeroThenRandom {
    zero_budget: usize,
    inner: StdRng,
}

impl RngCore for ZeroThenRandom {
    fn next_u32(&mut self) -> u32 {
        if self.zero_budget > 0 {
            self.zero_budget = self.zero_budget.saturating_sub(4);
            0
        } else {
            self.inner.next_u32()
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.zero_budget > 0 {
            self.zero_budget = self.zero_budget.saturating_sub(8);
            0
        } else {
            self.inner.next_u64()
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.zero_budget > 0 {
            self.zero_budget = self.zero_budget.saturating_sub(dest.len());
            dest.fill(0);
        } else {
            self.inner.fill_bytes(dest);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ZeroThenRandom {}

#[test]
fn zero_salt_is_resampled() {
    let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
    let mut rng = ZeroThenRandom {
        zero_budget: 200,
        inner: StdRng::seed_from_u64(7),
    };
    let server = Server::new(&mut rng, &identity, &G_256, &SrpParams::default()).unwrap();
    assert!(!server.salt().is_zero());
    assert!(!server.scrambler().is_zero());
}

#[test]
fn hex_round_trip() {
    for bits in [1u64, 8, 64, 255, 256, 1024] {
        let value = num_bigint::RandBigInt::gen_biguint(&mut OsRng, bits) + 1u32;
        assert_eq!(parse_hex(&to_hex(&value)).unwrap(), value);
    }

    let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
    let server = Server::new(&mut OsRng, &identity, &G_256, &SrpParams::default()).unwrap();
    for value in [server.salt(), server.scrambler(), server.public_key()] {
        assert_eq!(&parse_hex(&to_hex(value)).unwrap(), value);
    }
}

#[test]
fn malformed_modulus_is_rejected() {
    assert_eq!(SrpGroup::from_hex("not-hex", 2).unwrap_err(), Error::MalformedHex);
}

#[test]
fn zero_generator_is_rejected() {
    let err = SrpGroup::new(G_256.n.clone(), BigUint::zero()).unwrap_err();
    assert_eq!(err, Error::IllegalParameter { name: "generator" });
}

#[test]
fn zero_bit_widths_are_rejected() {
    let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
    let params = SrpParams {
        salt_bits: 0,
        ..SrpParams::default()
    };
    let err = Server::new(&mut OsRng, &identity, &G_256, &params).unwrap_err();
    assert_eq!(err, Error::IllegalParameter { name: "salt_bits" });
}

#[test]
fn public_key_multiple_of_modulus_is_rejected() {
    let identity = compute_identity_hash::<Sha3_256>("TEST", "test");
    let params = SrpParams::default();

    let server = Server::new(&mut OsRng, &identity, &G_256, &params).unwrap();
    let err = server.process_reply(&G_256.n.clone()).unwrap_err();
    assert_eq!(err, Error::IllegalParameter { name: "a_pub" });

    let server = Server::new(&mut OsRng, &identity, &G_256, &params).unwrap();
    let client = Client::new(&mut OsRng, &identity, &G_256, server.salt(), &params).unwrap();
    let err = client
        .process_reply(&BigUint::zero(), server.scrambler())
        .unwrap_err();
    assert_eq!(err, Error::IllegalParameter { name: "b_pub" });
}
