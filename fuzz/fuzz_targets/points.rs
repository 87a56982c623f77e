#![no_main]
// Targets: secp224r1, secp256k1, secp256r1, secp384r1
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};
use weierstrass::{
    secp224r1, secp256k1, secp256r1, secp384r1, AffinePoint, BigUint, CurveParams,
};

fn test_group(curve: &CurveParams, p1: &AffinePoint, p2: &AffinePoint, s: &BigUint) {
    // Test point arithmetic
    let sum = curve.add(p1, p2).unwrap();
    let scalar_mul = curve.mul(p1, s).unwrap();

    // Test that addition and doubling are consistent
    assert_eq!(curve.double(p1).unwrap(), curve.add(p1, p1).unwrap());

    // Test that negation works correctly
    assert!(curve.add(&sum, &curve.negate(&sum)).unwrap().is_identity());

    // Test scalar multiplication distributive property
    assert_eq!(
        curve.add(&scalar_mul, &scalar_mul).unwrap(),
        curve.mul(p1, &(s + s)).unwrap()
    );
}

fn point_from(curve: &CurveParams, data: &[u8], rng: &mut ChaChaRng) -> AffinePoint {
    let len = curve.coordinate_width();

    // compressed encoding first, then a random multiple of the generator
    AffinePoint::from_compressed_bytes(curve, &data[..len + 1]).unwrap_or_else(|_| {
        let k = curve.generate_valid_scalar(rng).unwrap();
        curve.mul_by_generator(&k).unwrap()
    })
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    for curve in [secp224r1(), secp256k1(), secp256r1(), secp384r1()] {
        let len = curve.coordinate_width();

        let p1 = point_from(curve, &data[32..], &mut rng);
        let p2 = point_from(curve, &data[48..], &mut rng);
        assert!(curve.contains_point(&p1));
        assert!(curve.contains_point(&p2));

        // round trip through both encodings
        let bytes = p1.to_bytes(curve).unwrap();
        assert_eq!(AffinePoint::from_bytes(curve, &bytes).unwrap(), p1);
        let compressed = p1.to_compressed_bytes(curve).unwrap();
        assert_eq!(
            AffinePoint::from_compressed_bytes(curve, &compressed).unwrap(),
            p1
        );

        let scalar = BigUint::from_bytes_be(&data[data.len() - len..]);
        test_group(curve, &p1, &p2, &scalar);
    }
});
