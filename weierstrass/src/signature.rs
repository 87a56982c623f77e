//! ECDSA signatures.

use crate::{utils, CurveParams, Result};
use num_bigint::BigUint;

/// ECDSA signature `(r, s)`.
///
/// Serialized as `r ‖ s`, each component big-endian and zero-padded to the
/// curve's coordinate width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components. Range checks happen during
    /// verification.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Serialize as `r ‖ s`, `2 × coordinate_width` bytes.
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>> {
        utils::join_pair(&self.r, &self.s, curve.coordinate_width())
    }

    /// Parse `r ‖ s`. The input must be exactly `2 × coordinate_width`
    /// bytes.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        let (r, s) = utils::split_pair(bytes, curve.coordinate_width())?;
        Ok(Self::new(r, s))
    }

    /// Lowercase hex of [`Signature::to_bytes`].
    pub fn to_hex(&self, curve: &CurveParams) -> Result<String> {
        self.to_bytes(curve).map(hex::encode)
    }

    /// Parse the hex form of [`Signature::from_bytes`]. Case-insensitive.
    pub fn from_hex(curve: &CurveParams, s: &str) -> Result<Self> {
        Self::from_bytes(curve, &hex::decode(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::{secp256k1, Error};
    use num_bigint::BigUint;

    #[test]
    fn small_components_are_padded() {
        let curve = secp256k1();
        let sig = Signature::new(BigUint::from(1u32), BigUint::from(2u32));
        let bytes = sig.to_bytes(curve).unwrap();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        assert_eq!(Signature::from_bytes(curve, &bytes).unwrap(), sig);
    }

    #[test]
    fn rejects_odd_length() {
        let curve = secp256k1();
        assert!(matches!(
            Signature::from_bytes(curve, &[0u8; 63]),
            Err(Error::Decoding)
        ));
        assert!(matches!(
            Signature::from_hex(curve, "abc"),
            Err(Error::Decoding)
        ));
    }
}
