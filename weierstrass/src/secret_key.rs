//! Private keys: secret scalars.

use crate::{utils, CurveParams, Error, Result};
use core::fmt::{self, Debug};
use num_bigint::BigUint;

/// ECDSA private key: wrapper around the secret scalar `d`.
///
/// No relation to any [`PublicKey`](crate::PublicKey) is kept. Whether the
/// scalar is in range for a given curve is checked by
/// [`Ecdsa::private_key_is_valid`](crate::Ecdsa::private_key_is_valid), not
/// on construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    /// Private scalar value
    d: BigUint,
}

impl PrivateKey {
    /// Wrap a scalar value as a private key.
    pub fn new(d: BigUint) -> Self {
        Self { d }
    }

    /// Expose the secret scalar this [`PrivateKey`] wraps.
    pub fn secret_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Serialize as a big-endian integer zero-padded to the curve's
    /// coordinate width.
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>> {
        utils::to_be_bytes_padded(&self.d, curve.coordinate_width())
    }

    /// Deserialize from a big-endian integer of at most the curve's
    /// coordinate width. Shorter input is read as if left-padded with zeros.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > curve.coordinate_width() {
            return Err(Error::Decoding);
        }

        Ok(Self::new(BigUint::from_bytes_be(bytes)))
    }

    /// Lowercase hex of [`PrivateKey::to_bytes`].
    pub fn to_hex(&self, curve: &CurveParams) -> Result<String> {
        self.to_bytes(curve).map(hex::encode)
    }

    /// Parse the hex form of [`PrivateKey::from_bytes`]. Case-insensitive.
    pub fn from_hex(curve: &CurveParams, s: &str) -> Result<Self> {
        Self::from_bytes(curve, &hex::decode(s)?)
    }
}

impl From<BigUint> for PrivateKey {
    fn from(d: BigUint) -> Self {
        Self::new(d)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}
