//! ECDSA benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;
use weierstrass::{secp256k1, secp256r1, Ecdsa, PrivateKey};

const SIGNING_KEY_BYTES: [u8; 32] =
    hex!("1cf6bc6c7f642a84994119e206c9f0753ff100709f4fd12f2338c1be60bf4175");

// SHA-256 digest of "foo"
const DIGEST: [u8; 32] = hex!("2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae");

fn bench_ecdsa(c: &mut Criterion) {
    for curve in [secp256k1(), secp256r1()] {
        let ecdsa = Ecdsa::new(curve);
        let private_key = PrivateKey::from_bytes(curve, &SIGNING_KEY_BYTES).unwrap();
        let public_key = ecdsa.derive_public_key(&private_key).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let signature = ecdsa.sign(&DIGEST, &private_key, &mut rng).unwrap();

        let mut group = c.benchmark_group(format!("ECDSA/{}", curve.name()));

        group.bench_function("try_sign_prehash", |b| {
            b.iter(|| {
                ecdsa
                    .sign(black_box(&DIGEST), black_box(&private_key), &mut rng)
                    .unwrap()
            })
        });

        group.bench_function("verify_prehash", |b| {
            b.iter(|| {
                ecdsa
                    .verify(
                        black_box(&DIGEST),
                        black_box(&signature),
                        black_box(&public_key),
                    )
                    .unwrap()
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
