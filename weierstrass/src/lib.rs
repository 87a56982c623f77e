#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use weierstrass::{secp256r1, Ecdsa, OsRng};
//!
//! let ecdsa = Ecdsa::new(secp256r1());
//! let private_key = ecdsa.generate_private_key(&mut OsRng)?;
//! let public_key = ecdsa.derive_public_key(&private_key)?;
//!
//! // The digest is computed by the caller; any hash function will do.
//! let digest = [0x42u8; 32];
//! let signature = ecdsa.sign(&digest, &private_key, &mut OsRng)?;
//! assert!(ecdsa.verify(&digest, &signature, &public_key)?);
//! # }
//! # Ok::<(), weierstrass::Error>(())
//! ```

pub mod curve;
pub mod ecdsa;
pub mod error;

mod affine;
mod arithmetic;
mod field;
mod public_key;
mod secret_key;
mod signature;
mod utils;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    affine::AffinePoint,
    curve::{secp224r1, secp256k1, secp256r1, secp384r1, CurveParams},
    ecdsa::Ecdsa,
    error::{Error, Result},
    public_key::PublicKey,
    secret_key::PrivateKey,
    signature::Signature,
};
pub use num_bigint::{self, BigUint};
pub use rand_core::{self, CryptoRngCore};

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;
