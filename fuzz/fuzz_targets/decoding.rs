#![no_main]
// Decoders and verification must reject malformed input without panicking.
use libfuzzer_sys::fuzz_target;
use weierstrass::{
    secp224r1, secp256k1, secp256r1, secp384r1, AffinePoint, Ecdsa, PrivateKey, PublicKey,
    Signature,
};

fuzz_target!(|data: &[u8]| {
    for curve in [secp224r1(), secp256k1(), secp256r1(), secp384r1()] {
        let ecdsa = Ecdsa::new(curve);
        let width = curve.coordinate_width();

        let _ = AffinePoint::from_bytes(curve, data);
        let _ = PrivateKey::from_bytes(curve, data);
        let _ = Signature::from_bytes(curve, data);
        let _ = std::str::from_utf8(data).map(|s| PublicKey::from_hex(curve, s));

        if let Ok(public_key) = ecdsa.decompress_public_key(data) {
            assert!(ecdsa.public_key_is_valid(&public_key));
            assert_eq!(ecdsa.compress_public_key(&public_key).unwrap(), data);
        }

        // digest ‖ signature ‖ public key
        if data.len() >= 32 + 4 * width {
            let (digest, rest) = data.split_at(32);
            let (signature, public_key) = rest.split_at(2 * width);
            let signature = Signature::from_bytes(curve, signature).unwrap();
            let public_key = PublicKey::from_bytes(curve, &public_key[..2 * width]).unwrap();
            assert!(ecdsa.verify(digest, &signature, &public_key).is_ok());
        }
    }
});
