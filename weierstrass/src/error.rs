//! Error type

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve and ECDSA errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A private or public key failed validation where a valid key is
    /// required.
    InvalidKey,

    /// A scalar outside `(0, n)` was supplied where a valid scalar is
    /// required.
    InvalidScalar,

    /// Curve parameters are inconsistent.
    InvalidCurve,

    /// A modular inverse which must exist does not. This signals a broken
    /// invariant upstream (e.g. a composite modulus or an off-curve point)
    /// and should not be retried.
    Arithmetic,

    /// A value cannot be serialized (e.g. the point at infinity, or an
    /// integer wider than the curve's coordinate width).
    Encoding,

    /// Malformed input: wrong length, bad tag byte, bad hex, or an
    /// x-coordinate with no corresponding point.
    Decoding,

    /// The random source failed.
    RandomSource(rand_core::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey => f.write_str("invalid key"),
            Error::InvalidScalar => f.write_str("scalar out of range"),
            Error::InvalidCurve => f.write_str("invalid curve parameters"),
            Error::Arithmetic => f.write_str("modular inverse does not exist"),
            Error::Encoding => f.write_str("encoding error"),
            Error::Decoding => f.write_str("decoding error"),
            Error::RandomSource(err) => write!(f, "random source failure: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::RandomSource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Error::RandomSource(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Error::Decoding
    }
}
