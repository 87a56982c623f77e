//! Demonstration: generate a key pair, round-trip it through compression,
//! sign a message digest and verify the signature.
//!
//! ```text
//! weierstrass [CURVE] [MESSAGE]
//! ```
//!
//! `CURVE` defaults to `secp256k1`, `MESSAGE` to `foo`. Set `RUST_LOG=trace`
//! to see rejected scalar draws.

use log::info;
use sha2::{Digest, Sha256};
use std::process::ExitCode;
use weierstrass::{CurveParams, Ecdsa, OsRng, Result};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let curve_name = args.next().unwrap_or_else(|| "secp256k1".to_owned());
    let message = args.next().unwrap_or_else(|| "foo".to_owned());

    let curve = match CurveParams::by_name(&curve_name) {
        Some(curve) => curve,
        None => {
            eprintln!("unknown curve: {}", curve_name);
            return ExitCode::FAILURE;
        }
    };

    match run(curve, message.as_bytes()) {
        Ok(true) => {
            println!("Wow! Signature is valid.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Oh no! Signature is invalid.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(curve: &CurveParams, message: &[u8]) -> Result<bool> {
    info!("using curve {}", curve.name());
    let ecdsa = Ecdsa::new(curve);

    let private_key = ecdsa.generate_private_key(&mut OsRng)?;
    let public_key = ecdsa.derive_public_key(&private_key)?;

    println!("private key: {}", private_key.to_hex(curve)?);
    println!("public key:  {}", public_key.to_hex(curve)?);

    let compressed = ecdsa.compress_public_key(&public_key)?;
    println!("compressed:  {}", hex::encode(&compressed));

    let decompressed = ecdsa.decompress_public_key(&compressed)?;
    if decompressed != public_key {
        println!("decompressed key does not match");
        return Ok(false);
    }

    let digest = Sha256::digest(message);
    println!("digest:      {}", hex::encode(digest));

    let signature = ecdsa.sign(&digest, &private_key, &mut OsRng)?;
    println!("signature:   {}", signature.to_hex(curve)?);

    ecdsa.verify(&digest, &signature, &decompressed)
}
