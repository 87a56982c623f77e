//! NIST P-224 elliptic curve (a.k.a. secp224r1)
//!
//! Its equation is `y² = x³ - 3x + b` over a ~224-bit prime field. Unlike the
//! other presets `p ≡ 1 (mod 4)`, so point decompression takes the
//! Tonelli-Shanks path.

use super::Preset;
use hex_literal::hex;

pub(super) const PRESET: Preset = Preset {
    name: "secp224r1",
    coordinate_width: 28,
    a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
    b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
};
