//! secp256k1 elliptic curve
//!
//! Specified in SEC 2: Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! Its equation is `y² = x³ + 7` over a ~256-bit prime field. The `a = 0`
//! coefficient admits a cheaper doubling formula.

use super::Preset;
use hex_literal::hex;

pub(super) const PRESET: Preset = Preset {
    name: "secp256k1",
    coordinate_width: 32,
    a: &hex!("
        0000000000000000000000000000000000000000000000000000000000000000
    "),
    b: &hex!("
        0000000000000000000000000000000000000000000000000000000000000007
    "),
    p: &hex!("
        FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
    "),
    n: &hex!("
        FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
    "),
    gx: &hex!("
        79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
    "),
    gy: &hex!("
        483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8
    "),
};
