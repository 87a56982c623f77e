//! Public keys: wrapper around affine curve points.

use crate::{AffinePoint, CurveParams, Result};

/// ECDSA public key: the point `Q = d·G`.
///
/// Decoding does not validate the point; use
/// [`Ecdsa::public_key_is_valid`](crate::Ecdsa::public_key_is_valid) before
/// trusting a key from the outside.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wrap an affine point as a public key.
    pub fn from_affine(point: AffinePoint) -> Self {
        Self { point }
    }

    /// Borrow the inner [`AffinePoint`].
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Uncompressed `X ‖ Y` encoding (no SEC1 tag byte).
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>> {
        self.point.to_bytes(curve)
    }

    /// Decode an uncompressed `X ‖ Y` encoding.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        AffinePoint::from_bytes(curve, bytes).map(Self::from_affine)
    }

    /// Lowercase hex of [`PublicKey::to_bytes`].
    pub fn to_hex(&self, curve: &CurveParams) -> Result<String> {
        self.point.to_hex(curve)
    }

    /// Parse the hex form of [`PublicKey::from_bytes`]. Case-insensitive.
    pub fn from_hex(curve: &CurveParams, s: &str) -> Result<Self> {
        AffinePoint::from_hex(curve, s).map(Self::from_affine)
    }
}

impl From<AffinePoint> for PublicKey {
    fn from(point: AffinePoint) -> Self {
        Self::from_affine(point)
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}

impl AsRef<AffinePoint> for PublicKey {
    fn as_ref(&self) -> &AffinePoint {
        &self.point
    }
}
