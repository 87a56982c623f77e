//! NIST P-256 elliptic curve (a.k.a. prime256v1, secp256r1)
//!
//! This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
//! and is specified in FIPS 186-4: Digital Signature Standard (DSS):
//!
//! <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>
//!
//! Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b` is
//! the "verifiably random"† constant:
//!
//! ```text
//! b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
//! ```
//!
//! † *NOTE: the specific origins of this constant have never been fully disclosed
//!   (it is the SHA-1 digest of an inexplicable NSA-selected constant)*

use super::Preset;
use hex_literal::hex;

pub(super) const PRESET: Preset = Preset {
    name: "secp256r1",
    coordinate_width: 32,
    a: &hex!("
        FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC
    "),
    b: &hex!("
        5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B
    "),
    p: &hex!("
        FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF
    "),
    n: &hex!("
        FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
    "),
    gx: &hex!("
        6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296
    "),
    gy: &hex!("
        4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5
    "),
};
