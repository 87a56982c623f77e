//! ECDSA known-answer test vectors and test helpers.

use crate::CurveParams;
use hex_literal::hex;
use rand_core::{CryptoRng, RngCore};

/// ECDSA known-answer test vector.
///
/// `m` is the message digest as passed to signing, `k` the nonce.
#[derive(Debug)]
pub struct TestVector {
    /// Name of the curve preset.
    pub curve: &'static str,

    /// Private scalar
    pub d: &'static [u8],

    /// Public key x-coordinate
    pub q_x: &'static [u8],

    /// Public key y-coordinate
    pub q_y: &'static [u8],

    /// Nonce
    pub k: &'static [u8],

    /// Message digest
    pub m: &'static [u8],

    /// Signature `r` component
    pub r: &'static [u8],

    /// Signature `s` component
    pub s: &'static [u8],
}

impl TestVector {
    /// Curve parameters this vector applies to, if the name is a known preset.
    pub fn curve(&self) -> Option<&'static CurveParams> {
        CurveParams::by_name(self.curve)
    }
}

/// ECDSA test vectors.
///
/// - secp256k1: the `k256` crate's ECDSA signing vector (unnormalized `s`).
/// - secp256r1: RFC 6979 §A.2.5, SHA-256, message "sample".
///   <https://datatracker.ietf.org/doc/html/rfc6979#appendix-A.2.5>
/// - secp224r1: FIPS 186-4 `SigGen.txt`, P-224 with SHA-224.
pub const ECDSA_TEST_VECTORS: &[TestVector; 3] = &[
    TestVector {
        curve: "secp256k1",
        d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
        q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
        k: &hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
        m: &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
        r: &hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
        s: &hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
    },
    TestVector {
        curve: "secp256r1",
        d: &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        q_x: &hex!("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
        q_y: &hex!("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
        k: &hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60"),
        m: &hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"),
        r: &hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"),
        s: &hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"),
    },
    TestVector {
        curve: "secp224r1",
        d: &hex!("16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615"),
        q_x: &hex!("605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab"),
        q_y: &hex!("f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669"),
        k: &hex!("d9a5a7328117f48b4b8dd8c17dae722e756b3ff64bd29a527137eec0"),
        m: &hex!("07eb2a50bf70eee87467600614a490e7600437d077ec651a27e65e67"),
        r: &hex!("2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6"),
        s: &hex!("8d9cc4c8ea93e0fd9d6431b9a1fd99b88f281793396321b11dac41eb"),
    },
];

/// Random source which always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0)
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("random source unavailable"))
    }
}

impl CryptoRng for FailingRng {}
