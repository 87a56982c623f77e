//! Group law and scalar operations over [`CurveParams`].
//!
//! Formulas are the textbook affine ones, e.g. from
//! "Guide to Elliptic Curve Cryptography" §3.1.2. They are variable-time.

use crate::{field, AffinePoint, CurveParams, Error, Result};
use log::trace;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

impl CurveParams {
    /// Is `s` a valid scalar, i.e. `0 < s < n`?
    pub fn is_valid_scalar(&self, s: &BigUint) -> bool {
        !s.is_zero() && s < self.n()
    }

    /// Is `point` an affine point satisfying the curve equation?
    ///
    /// The point at infinity is not considered a usable curve point and
    /// yields `false`. Coordinates are reduced modulo `p` before checking;
    /// range checks are the caller's business.
    pub fn contains_point(&self, point: &AffinePoint) -> bool {
        match point.coordinates() {
            Some((x, y)) => field::mul(y, y, self.p()) == self.rhs(x),
            None => false,
        }
    }

    /// Right hand side of the curve equation: `x³ + a·x + b mod p`.
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        let p = self.p();
        let x = field::reduce(x, p);
        let x3 = field::mul(&field::mul(&x, &x, p), &x, p);
        (x3 + field::mul(self.a(), &x, p) + self.b()) % p
    }

    /// Draw a uniformly random scalar in `(0, n)`.
    ///
    /// Reads `coordinate_width` bytes at a time as a big-endian integer and
    /// retries until the value is in range. A failing random source aborts
    /// with [`Error::RandomSource`].
    pub fn generate_valid_scalar(&self, rng: &mut impl CryptoRngCore) -> Result<BigUint> {
        let mut bytes = vec![0u8; self.coordinate_width()];

        loop {
            rng.try_fill_bytes(&mut bytes)?;
            let candidate = BigUint::from_bytes_be(&bytes);

            if self.is_valid_scalar(&candidate) {
                return Ok(candidate);
            }

            trace!("{}: rejected out-of-range scalar candidate", self.name());
        }
    }

    /// Group negation. The point at infinity is its own negation.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => AffinePoint::new(x.clone(), field::neg(y, self.p())),
        }
    }

    /// Group addition `P + Q`.
    ///
    /// Returns [`Error::Arithmetic`] only for inputs which are not on the
    /// curve and share an x-coordinate without being equal or opposite.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let ((x1, y1), (x2, y2)) = match (lhs.coordinates(), rhs.coordinates()) {
            (None, _) => return Ok(rhs.clone()),
            (_, None) => return Ok(lhs.clone()),
            (Some(a), Some(b)) => (a, b),
        };

        let p = self.p();

        if field::reduce(x1, p) == field::reduce(x2, p) {
            if ((y1 + y2) % p).is_zero() {
                return Ok(AffinePoint::Identity);
            }

            if field::reduce(y1, p) == field::reduce(y2, p) {
                return self.double(lhs);
            }

            return Err(Error::Arithmetic);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = field::mul(
            &field::sub(y2, y1, p),
            &field::invert(&field::sub(x2, x1, p), p)?,
            p,
        );

        Ok(self.chord(&lambda, x1, y1, x2))
    }

    /// Point doubling `2P`.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        let (x, y) = match point.coordinates() {
            Some(coords) => coords,
            None => return Ok(AffinePoint::Identity),
        };

        let p = self.p();

        if field::reduce(y, p).is_zero() {
            return Ok(AffinePoint::Identity);
        }

        // λ = (3x² + a) / 2y
        let x2 = field::mul(x, x, p);
        let mut numerator = field::mul(&BigUint::from(3u32), &x2, p);
        if !self.a_is_zero() {
            numerator = (numerator + self.a()) % p;
        }
        let denominator = field::mul(&BigUint::from(2u32), y, p);
        let lambda = field::mul(&numerator, &field::invert(&denominator, p)?, p);

        Ok(self.chord(&lambda, x, y, x))
    }

    /// Third intersection of the line with slope `λ` through `(x1, y1)`,
    /// reflected: `x3 = λ² - x1 - x2`, `y3 = λ(x1 - x3) - y1`.
    fn chord(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> AffinePoint {
        let p = self.p();
        let x3 = field::sub(&field::sub(&field::mul(lambda, lambda, p), x1, p), x2, p);
        let y3 = field::sub(&field::mul(lambda, &field::sub(x1, &x3, p), p), y1, p);
        AffinePoint::new(x3, y3)
    }

    /// Scalar multiplication `k·P` by left-to-right double-and-add.
    ///
    /// `k = 0` and `P = ∞` both yield the point at infinity.
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        let mut acc = AffinePoint::Identity;

        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;
            if k.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }

        Ok(acc)
    }

    /// Scalar multiplication of the generator, `k·G`.
    pub fn mul_by_generator(&self, k: &BigUint) -> Result<AffinePoint> {
        self.mul(self.generator(), k)
    }
}
