//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! ## Algorithm
//!
//! ```text
//! Signing, given digest h and private key d:
//! S1: pick a random number k in [1, n-1]
//! S2: calculate the elliptic curve point (x1, y1) = [k]G
//! S3: calculate r = x1 mod n, return to S1 if r = 0
//! S4: calculate s = k^(-1) * (h + r*d) mod n, return to S1 if s = 0
//! S5: the signature of h is (r, s)
//!
//! Verification, given digest h, signature (r, s) and public key Q:
//! V1: verify whether r and s are in [1, n-1], verification failed if not
//! V2: calculate w = s^(-1) mod n, u1 = h*w mod n, u2 = r*w mod n
//! V3: calculate the point (x1, y1) = [u1]G + [u2]Q, verification failed if it is the identity
//! V4: verification passes iff x1 mod n = r
//! ```
//!
//! The digest is interpreted as a big-endian integer as-is: it is neither
//! hashed again nor truncated to the bit length of `n`.

use crate::{
    field, AffinePoint, CurveParams, Error, PrivateKey, PublicKey, Result, Signature,
};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// ECDSA engine bound to one set of curve parameters.
///
/// Holds nothing but a reference to the immutable curve, so it is cheap to
/// copy and safe to share between threads.
#[derive(Clone, Copy, Debug)]
pub struct Ecdsa<'c> {
    curve: &'c CurveParams,
}

impl<'c> Ecdsa<'c> {
    /// Create an engine for the given curve.
    pub fn new(curve: &'c CurveParams) -> Self {
        Self { curve }
    }

    /// Curve parameters this engine operates on.
    pub fn curve(&self) -> &'c CurveParams {
        self.curve
    }

    /// Generate a random private key.
    pub fn generate_private_key(&self, rng: &mut impl CryptoRngCore) -> Result<PrivateKey> {
        self.curve.generate_valid_scalar(rng).map(PrivateKey::new)
    }

    /// Is the private key's scalar in `[1, n-1]`?
    pub fn private_key_is_valid(&self, private_key: &PrivateKey) -> bool {
        self.curve.is_valid_scalar(private_key.secret_scalar())
    }

    /// Is the public key an affine point with coordinates in `[0, p)` which
    /// lies on the curve?
    pub fn public_key_is_valid(&self, public_key: &PublicKey) -> bool {
        let p = self.curve.p();
        match public_key.as_affine().coordinates() {
            Some((x, y)) if x < p && y < p => self.curve.contains_point(public_key.as_affine()),
            _ => false,
        }
    }

    /// Compute the public key `Q = d·G`.
    pub fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        if !self.private_key_is_valid(private_key) {
            return Err(Error::InvalidKey);
        }

        self.curve
            .mul_by_generator(private_key.secret_scalar())
            .map(PublicKey::from_affine)
    }

    /// Sign a precomputed message digest with a fresh random nonce.
    ///
    /// Nonces yielding `r = 0` or `s = 0` are discarded and redrawn. A
    /// failing random source aborts signing with [`Error::RandomSource`].
    pub fn sign(
        &self,
        hash: &[u8],
        private_key: &PrivateKey,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Signature> {
        if !self.private_key_is_valid(private_key) {
            return Err(Error::InvalidKey);
        }

        loop {
            // S1: pick a random number k in [1, n-1]
            let k = self.curve.generate_valid_scalar(rng)?;

            if let Some(signature) = self.sign_with_nonce(hash, private_key, &k)? {
                return Ok(signature);
            }

            trace!("{}: discarding nonce with r = 0 or s = 0", self.curve.name());
        }
    }

    /// Compute the signature for an explicitly provided nonce `k`.
    ///
    /// Returns `Ok(None)` if `k` yields `r = 0` or `s = 0`, in which case a
    /// different nonce must be used.
    ///
    /// ⚠️ Reusing a nonce for two different digests, or using a nonce that
    /// is not uniformly random and secret, reveals the private key. This is
    /// intended for known-answer tests and callers implementing their own
    /// nonce derivation.
    pub fn sign_with_nonce(
        &self,
        hash: &[u8],
        private_key: &PrivateKey,
        k: &BigUint,
    ) -> Result<Option<Signature>> {
        let n = self.curve.n();
        let d = private_key.secret_scalar();

        if !self.curve.is_valid_scalar(d) {
            return Err(Error::InvalidKey);
        }

        if !self.curve.is_valid_scalar(k) {
            return Err(Error::InvalidScalar);
        }

        let h = BigUint::from_bytes_be(hash);

        // S2: calculate the elliptic curve point (x1, y1) = [k]G
        let x1 = match self.curve.mul_by_generator(k)? {
            AffinePoint::Affine { x, .. } => x,
            AffinePoint::Identity => return Err(Error::Arithmetic),
        };

        // S3: calculate r = x1 mod n, return to S1 if r = 0
        let r = x1 % n;
        if r.is_zero() {
            return Ok(None);
        }

        // S4: calculate s = k^(-1) * (h + r*d) mod n, return to S1 if s = 0
        let k_inv = field::invert(k, n)?;
        let s = field::mul(&k_inv, &((h + field::mul(&r, d, n)) % n), n);
        if s.is_zero() {
            return Ok(None);
        }

        // S5: the signature of h is (r, s)
        Ok(Some(Signature::new(r, s)))
    }

    /// Verify a signature over a precomputed message digest.
    ///
    /// Malformed signatures and invalid public keys yield `Ok(false)`.
    /// An `Err` is only returned for [`Error::Arithmetic`], which indicates
    /// broken curve parameters.
    pub fn verify(&self, hash: &[u8], signature: &Signature, public_key: &PublicKey) -> Result<bool> {
        let n = self.curve.n();
        let (r, s) = (signature.r(), signature.s());

        if !self.public_key_is_valid(public_key) {
            debug!("{}: rejecting invalid public key", self.curve.name());
            return Ok(false);
        }

        // V1: verify whether r and s are in [1, n-1], verification failed if not
        if !self.curve.is_valid_scalar(r) || !self.curve.is_valid_scalar(s) {
            debug!("{}: signature component out of range", self.curve.name());
            return Ok(false);
        }

        // V2: calculate w = s^(-1) mod n, u1 = h*w mod n, u2 = r*w mod n
        let h = BigUint::from_bytes_be(hash);
        let w = field::invert(s, n)?;
        let u1 = field::mul(&h, &w, n);
        let u2 = field::mul(r, &w, n);

        // V3: calculate the point (x1, y1) = [u1]G + [u2]Q
        let point = self.curve.add(
            &self.curve.mul_by_generator(&u1)?,
            &self.curve.mul(public_key.as_affine(), &u2)?,
        )?;

        let x1 = match point {
            AffinePoint::Affine { x, .. } => x,
            AffinePoint::Identity => {
                debug!("{}: u1·G + u2·Q is the identity", self.curve.name());
                return Ok(false);
            }
        };

        // V4: verification passes iff x1 mod n = r
        Ok(&(x1 % n) == r)
    }

    /// SEC1 compressed encoding of a valid public key: parity tag followed by
    /// `X`.
    pub fn compress_public_key(&self, public_key: &PublicKey) -> Result<Vec<u8>> {
        if !self.public_key_is_valid(public_key) {
            return Err(Error::InvalidKey);
        }

        public_key.as_affine().to_compressed_bytes(self.curve)
    }

    /// Decode a SEC1 compressed public key, solving the curve equation for
    /// `Y`.
    pub fn decompress_public_key(&self, bytes: &[u8]) -> Result<PublicKey> {
        AffinePoint::from_compressed_bytes(self.curve, bytes).map(PublicKey::from_affine)
    }
}

#[cfg(test)]
mod tests {
    use super::Ecdsa;
    use crate::{
        secp224r1, secp256k1, secp256r1, secp384r1, test_vectors, AffinePoint, Error, PrivateKey,
        PublicKey, Signature,
    };
    use num_bigint::BigUint;
    use num_traits::One;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{CryptoRng, RngCore, SeedableRng};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn known_answer_vectors() {
        for vector in test_vectors::ECDSA_TEST_VECTORS {
            let curve = vector.curve().unwrap();
            let ecdsa = Ecdsa::new(curve);

            let private_key = PrivateKey::new(BigUint::from_bytes_be(vector.d));
            let public_key = ecdsa.derive_public_key(&private_key).unwrap();
            assert_eq!(
                public_key.as_affine(),
                &AffinePoint::new(
                    BigUint::from_bytes_be(vector.q_x),
                    BigUint::from_bytes_be(vector.q_y)
                )
            );

            let k = BigUint::from_bytes_be(vector.k);
            let signature = ecdsa
                .sign_with_nonce(vector.m, &private_key, &k)
                .unwrap()
                .unwrap();
            assert_eq!(signature.r(), &BigUint::from_bytes_be(vector.r));
            assert_eq!(signature.s(), &BigUint::from_bytes_be(vector.s));

            assert!(ecdsa.verify(vector.m, &signature, &public_key).unwrap());
        }
    }

    #[test]
    fn sign_and_verify_on_every_preset() {
        let mut rng = rng();
        for curve in [secp224r1(), secp256k1(), secp256r1(), secp384r1()] {
            let ecdsa = Ecdsa::new(curve);
            let private_key = ecdsa.generate_private_key(&mut rng).unwrap();
            let public_key = ecdsa.derive_public_key(&private_key).unwrap();
            assert!(ecdsa.public_key_is_valid(&public_key));

            let digest = [0xa5u8; 32];
            let signature = ecdsa.sign(&digest, &private_key, &mut rng).unwrap();
            assert!(ecdsa.verify(&digest, &signature, &public_key).unwrap());
        }
    }

    #[test]
    fn derive_rejects_out_of_range_keys() {
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        for d in [BigUint::from(0u32), curve.n().clone()] {
            let result = ecdsa.derive_public_key(&PrivateKey::new(d));
            assert!(matches!(result, Err(Error::InvalidKey)));
        }
    }

    #[test]
    fn sign_rejects_invalid_key_before_drawing_randomness() {
        let ecdsa = Ecdsa::new(secp256k1());
        let mut rng = test_vectors::FailingRng;
        let result = ecdsa.sign(&[1u8; 32], &PrivateKey::new(BigUint::from(0u32)), &mut rng);
        assert!(matches!(result, Err(Error::InvalidKey)));
    }

    #[test]
    fn failing_rng_aborts_signing() {
        let ecdsa = Ecdsa::new(secp256k1());
        let private_key = PrivateKey::new(BigUint::one());
        let result = ecdsa.sign(&[1u8; 32], &private_key, &mut test_vectors::FailingRng);
        assert!(matches!(result, Err(Error::RandomSource(_))));
    }

    #[test]
    fn sign_with_nonce_rejects_invalid_nonce() {
        let curve = secp256k1();
        let ecdsa = Ecdsa::new(curve);
        let private_key = PrivateKey::new(BigUint::one());
        let result = ecdsa.sign_with_nonce(&[1u8; 32], &private_key, curve.n());
        assert!(matches!(result, Err(Error::InvalidScalar)));
    }

    #[test]
    fn sign_with_nonce_reports_zero_s() {
        // With d = 1 and k = 1, r = Gx mod n and s = h + r. Choosing
        // h = n - r makes s vanish.
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        let r = curve.generator().x().unwrap() % curve.n();
        let h = (curve.n() - &r).to_bytes_be();
        let result = ecdsa
            .sign_with_nonce(&h, &PrivateKey::new(BigUint::one()), &BigUint::one())
            .unwrap();
        assert_eq!(result, None);
    }

    /// Hands out the given nonces in order, each as one full-width draw.
    struct ScriptedNonces {
        nonces: Vec<BigUint>,
        draws: usize,
    }

    impl RngCore for ScriptedNonces {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).unwrap()
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let nonce = self.nonces[self.draws].to_bytes_be();
            self.draws += 1;
            dest.fill(0);
            let start = dest.len() - nonce.len();
            dest[start..].copy_from_slice(&nonce);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedNonces {}

    #[test]
    fn sign_redraws_nonce_when_s_is_zero() {
        // k = 1 yields s = 0 for this digest (see above), k = 2 does not
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        let private_key = PrivateKey::new(BigUint::one());
        let public_key = ecdsa.derive_public_key(&private_key).unwrap();
        let r = curve.generator().x().unwrap() % curve.n();
        let h = (curve.n() - &r).to_bytes_be();

        let mut rng = ScriptedNonces {
            nonces: vec![BigUint::one(), BigUint::from(2u32)],
            draws: 0,
        };
        let signature = ecdsa.sign(&h, &private_key, &mut rng).unwrap();

        assert_eq!(rng.draws, 2);
        let expected = ecdsa
            .sign_with_nonce(&h, &private_key, &BigUint::from(2u32))
            .unwrap()
            .unwrap();
        assert_eq!(signature, expected);
        assert!(ecdsa.verify(&h, &signature, &public_key).unwrap());
    }

    #[test]
    fn verify_rejects_when_combination_is_identity() {
        // With Q = G, s = 1 and h = n - r: u1·G + u2·Q = (n - r + r)·G = ∞
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        let public_key = PublicKey::from_affine(curve.generator().clone());
        let r = BigUint::from(5u32);
        let h = (curve.n() - &r).to_bytes_be();
        let signature = Signature::new(r, BigUint::one());

        assert!(ecdsa.public_key_is_valid(&public_key));
        assert!(!ecdsa.verify(&h, &signature, &public_key).unwrap());
    }

    #[test]
    fn verify_rejects_out_of_range_components() {
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        let public_key = PublicKey::from_affine(curve.generator().clone());
        let one = BigUint::one();

        for signature in [
            Signature::new(BigUint::from(0u32), one.clone()),
            Signature::new(one.clone(), BigUint::from(0u32)),
            Signature::new(curve.n().clone(), one.clone()),
            Signature::new(one.clone(), curve.n().clone()),
        ] {
            assert!(!ecdsa.verify(&[0u8; 32], &signature, &public_key).unwrap());
        }
    }

    #[test]
    fn verify_rejects_invalid_public_key() {
        let curve = secp256r1();
        let ecdsa = Ecdsa::new(curve);
        let one = BigUint::one();
        let signature = Signature::new(one.clone(), one.clone());

        let off_curve = PublicKey::from_affine(AffinePoint::new(one.clone(), one));
        assert!(!ecdsa.verify(&[0u8; 32], &signature, &off_curve).unwrap());

        let identity = PublicKey::from_affine(AffinePoint::IDENTITY);
        assert!(!ecdsa.verify(&[0u8; 32], &signature, &identity).unwrap());
    }

    #[test]
    fn public_key_with_unreduced_coordinates_is_invalid() {
        let curve = secp256k1();
        let ecdsa = Ecdsa::new(curve);
        let (x, y) = curve.generator().coordinates().unwrap();
        let unreduced = PublicKey::from_affine(AffinePoint::new(x + curve.p(), y.clone()));
        assert!(curve.contains_point(unreduced.as_affine()));
        assert!(!ecdsa.public_key_is_valid(&unreduced));
    }

    #[test]
    fn compress_rejects_invalid_key() {
        let ecdsa = Ecdsa::new(secp256r1());
        let result = ecdsa.compress_public_key(&PublicKey::from_affine(AffinePoint::IDENTITY));
        assert!(matches!(result, Err(Error::InvalidKey)));
    }

    #[test]
    fn compression_round_trip() {
        let mut rng = rng();
        for curve in [secp224r1(), secp256k1(), secp256r1(), secp384r1()] {
            let ecdsa = Ecdsa::new(curve);
            for _ in 0..4 {
                let private_key = ecdsa.generate_private_key(&mut rng).unwrap();
                let public_key = ecdsa.derive_public_key(&private_key).unwrap();
                let compressed = ecdsa.compress_public_key(&public_key).unwrap();
                assert_eq!(compressed.len(), curve.coordinate_width() + 1);
                assert_eq!(ecdsa.decompress_public_key(&compressed).unwrap(), public_key);
            }
        }
    }
}
