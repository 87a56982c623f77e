//! Affine curve points.

use crate::{field, utils, CurveParams, Error, Result};
use num_bigint::BigUint;

/// Tag byte of a compressed point with an even y-coordinate.
const TAG_EVEN: u8 = 0x02;

/// Tag byte of a compressed point with an odd y-coordinate.
const TAG_ODD: u8 = 0x03;

/// Point on a short Weierstrass curve in affine coordinates, or the point at
/// infinity.
///
/// Points don't carry their curve: encoding, decoding and arithmetic take the
/// [`CurveParams`] explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AffinePoint {
    /// Point at infinity, the identity of the group. Has no coordinates.
    Identity,

    /// Affine point `(x, y)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self::Identity;

    /// Create an affine point from its coordinates. No curve membership
    /// check is performed.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self::Affine { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Affine x-coordinate, if any.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine y-coordinate, if any.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// Serialize as `X ‖ Y`, each coordinate big-endian and zero-padded to
    /// the curve's coordinate width.
    ///
    /// The point at infinity has no encoding and fails with
    /// [`Error::Encoding`].
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>> {
        let (x, y) = self.coordinates().ok_or(Error::Encoding)?;
        utils::join_pair(x, y, curve.coordinate_width())
    }

    /// Parse an `X ‖ Y` encoding of exactly twice the coordinate width.
    ///
    /// The result is *not* checked to be on the curve; use
    /// [`CurveParams::contains_point`] where that matters.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        let (x, y) = utils::split_pair(bytes, curve.coordinate_width())?;
        Ok(Self::new(x, y))
    }

    /// Lowercase hex of [`AffinePoint::to_bytes`].
    pub fn to_hex(&self, curve: &CurveParams) -> Result<String> {
        self.to_bytes(curve).map(hex::encode)
    }

    /// Parse the hex form of [`AffinePoint::from_bytes`]. Case-insensitive.
    pub fn from_hex(curve: &CurveParams, s: &str) -> Result<Self> {
        Self::from_bytes(curve, &hex::decode(s)?)
    }

    /// Serialize in SEC1 compressed form: a tag byte giving the parity of
    /// `Y` followed by `X` zero-padded to the coordinate width.
    pub fn to_compressed_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>> {
        let (x, y) = self.coordinates().ok_or(Error::Encoding)?;
        let tag = if field::is_odd(y) { TAG_ODD } else { TAG_EVEN };

        let mut bytes = Vec::with_capacity(curve.coordinate_width() + 1);
        bytes.push(tag);
        bytes.extend_from_slice(&utils::to_be_bytes_padded(x, curve.coordinate_width())?);
        Ok(bytes)
    }

    /// Parse a SEC1 compressed point, recovering `Y` from the curve
    /// equation.
    ///
    /// Fails with [`Error::Decoding`] on a wrong length, an unknown tag,
    /// `X ≥ p`, or an `X` with no point on the curve.
    pub fn from_compressed_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.coordinate_width() + 1 {
            return Err(Error::Decoding);
        }

        let y_is_odd = match bytes[0] {
            TAG_EVEN => false,
            TAG_ODD => true,
            _ => return Err(Error::Decoding),
        };

        let x = BigUint::from_bytes_be(&bytes[1..]);
        Self::decompress(curve, x, y_is_odd).ok_or(Error::Decoding)
    }

    /// Find the curve point with the given x-coordinate and y parity.
    pub fn decompress(curve: &CurveParams, x: BigUint, y_is_odd: bool) -> Option<Self> {
        let p = curve.p();
        if &x >= p {
            return None;
        }

        let y = field::sqrt(&curve.rhs(&x), p)?;

        let y = if field::is_odd(&y) == y_is_odd {
            y
        } else {
            field::neg(&y, p)
        };

        // y = 0 is its own negation and therefore always even
        if field::is_odd(&y) != y_is_odd {
            return None;
        }

        Some(Self::new(x, y))
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}
