//! Elliptic curves in short Weierstrass form: `y² = x³ + a·x + b (mod p)`.

mod k256;
mod p224;
mod p256;
mod p384;

use crate::{AffinePoint, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

/// Domain parameters of a prime order elliptic curve in short Weierstrass
/// form.
///
/// Instances are immutable once constructed. The named presets
/// ([`secp256r1`], [`secp256k1`], ...) are process-wide values built on first
/// use and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    name: &'static str,

    /// Size of a serialized coordinate or scalar in bytes.
    coordinate_width: usize,

    /// Coefficient `a` in the curve equation.
    a: BigUint,

    /// Coefficient `b` in the curve equation.
    b: BigUint,

    /// Field modulus.
    p: BigUint,

    /// Order of the generator.
    n: BigUint,

    /// Base point.
    generator: AffinePoint,
}

impl CurveParams {
    /// Create curve parameters, checking that they are self-consistent:
    ///
    /// - `p` and `n` fit in `coordinate_width` bytes,
    /// - `a` and `b` are reduced modulo `p`,
    /// - the generator is an affine point on the curve.
    ///
    /// Primality of `p` and `n` and the order of the generator are the
    /// caller's responsibility.
    pub fn new(
        name: &'static str,
        coordinate_width: usize,
        a: BigUint,
        b: BigUint,
        p: BigUint,
        n: BigUint,
        generator: AffinePoint,
    ) -> Result<Self> {
        let max_bits = (coordinate_width as u64) * 8;

        if coordinate_width == 0
            || p < BigUint::from(3u32)
            || n < BigUint::from(2u32)
            || p.bits() > max_bits
            || n.bits() > max_bits
            || a >= p
            || b >= p
        {
            return Err(Error::InvalidCurve);
        }

        let curve = Self {
            name,
            coordinate_width,
            a,
            b,
            p,
            n,
            generator,
        };

        let in_field = match curve.generator.coordinates() {
            Some((x, y)) => x < &curve.p && y < &curve.p,
            None => false,
        };

        if in_field && curve.contains_point(&curve.generator) {
            Ok(curve)
        } else {
            Err(Error::InvalidCurve)
        }
    }

    /// Look up a named curve preset. Matching is case-insensitive and
    /// accepts the common aliases (`p256`, `prime256v1`, `k256`, ...).
    pub fn by_name(name: &str) -> Option<&'static CurveParams> {
        match name.to_ascii_lowercase().as_str() {
            "secp256r1" | "prime256v1" | "p256" | "p-256" => Some(secp256r1()),
            "secp256k1" | "k256" => Some(secp256k1()),
            "secp384r1" | "p384" | "p-384" => Some(secp384r1()),
            "secp224r1" | "p224" | "p-224" => Some(secp224r1()),
            _ => None,
        }
    }

    /// Curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size in bytes of a serialized field element or scalar.
    pub fn coordinate_width(&self) -> usize {
        self.coordinate_width
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Is `a` zero? Enables the `a = 0` shortcut in point doubling.
    pub(crate) fn a_is_zero(&self) -> bool {
        self.a.is_zero()
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Order `n` of the generator (i.e. scalar modulus).
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }
}

/// Big-endian serialized domain parameters of a named curve.
struct Preset {
    name: &'static str,
    coordinate_width: usize,
    a: &'static [u8],
    b: &'static [u8],
    p: &'static [u8],
    n: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
}

impl From<&Preset> for CurveParams {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name,
            coordinate_width: preset.coordinate_width,
            a: BigUint::from_bytes_be(preset.a),
            b: BigUint::from_bytes_be(preset.b),
            p: BigUint::from_bytes_be(preset.p),
            n: BigUint::from_bytes_be(preset.n),
            generator: AffinePoint::new(
                BigUint::from_bytes_be(preset.gx),
                BigUint::from_bytes_be(preset.gy),
            ),
        }
    }
}

static SECP224R1: Lazy<CurveParams> = Lazy::new(|| (&p224::PRESET).into());
static SECP256K1: Lazy<CurveParams> = Lazy::new(|| (&k256::PRESET).into());
static SECP256R1: Lazy<CurveParams> = Lazy::new(|| (&p256::PRESET).into());
static SECP384R1: Lazy<CurveParams> = Lazy::new(|| (&p384::PRESET).into());

/// NIST P-224 (secp224r1).
pub fn secp224r1() -> &'static CurveParams {
    &SECP224R1
}

/// secp256k1, the curve used by Bitcoin.
pub fn secp256k1() -> &'static CurveParams {
    &SECP256K1
}

/// NIST P-256 (secp256r1, prime256v1).
pub fn secp256r1() -> &'static CurveParams {
    &SECP256R1
}

/// NIST P-384 (secp384r1).
pub fn secp384r1() -> &'static CurveParams {
    &SECP384R1
}
