//! Full SRP-6 handshake between an in-process server and client.
//!
//! Run with `cargo run --example key_agreement`.

use rand::rngs::OsRng;
use sha3_custom::Sha3_256;
use srp6::groups::G_256;
use srp6::utils::{compute_identity_hash, to_hex};
use srp6::{Client, Result, Server, SrpParams};

fn main() -> Result<()> {
    const USERNAME: &str = "TEST";
    const PASSWORD: &str = "test";

    let params = SrpParams::default();
    let identity = compute_identity_hash::<Sha3_256>(USERNAME, PASSWORD);

    // The server knows the verifier; here it derives it from the same
    // credentials the client holds.
    let server = Server::new(&mut OsRng, &identity, &G_256, &params)?;

    println!("modulus (N)    = {}", to_hex(&G_256.n));
    println!("generator (g)  = {}", G_256.g);
    println!("multiplier (k) = {}", G_256.k);
    println!("salt (s)       = {}", to_hex(server.salt()));
    println!("verifier (v)   = {}", to_hex(server.verifier()));
    println!("scrambler (u)  = {}", to_hex(server.scrambler()));
    println!();

    // The server publishes s, u and B; the client answers with A.
    let client = Client::new(&mut OsRng, &identity, &G_256, server.salt(), &params)?;
    println!("B              = {}", to_hex(server.public_key()));
    println!("A              = {}", to_hex(client.public_key()));
    println!();

    let a_pub = client.public_key().clone();
    let b_pub = server.public_key().clone();
    let u = server.scrambler().clone();

    let server_session = server.process_reply(&a_pub)?;
    let client_session = client.process_reply(&b_pub, &u)?;

    println!("server K       = {}", server_session.key_hex());
    println!("client K       = {}", client_session.key_hex());
    println!();
    println!(
        "session keys{}match",
        if server_session.agrees_with(&client_session) {
            " "
        } else {
            " DO NOT "
        }
    );
    Ok(())
}
