//! Compiled-in table of named curves.
//!
//! All curves are taken from [SEC 2: Recommended Elliptic Curve Domain
//! Parameters](https://www.secg.org/sec2-v2.pdf). Names are matched exactly
//! and case-sensitively.

use crate::{CurveParameters, Error, Result};
use hex_literal::hex;

/// Domain parameters of a named curve `y² = x³ + ax + b` as big-endian bytes.
///
/// `p`, `a`, `b`, `gx` and `gy` are all the byte length of `p`; `n` is the
/// byte length of the group order.
#[derive(Debug)]
pub struct CurveEntry {
    /// Curve name, e.g. `secp256k1`.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Field modulus.
    pub p: &'static [u8],
    /// Curve coefficient `a`.
    pub a: &'static [u8],
    /// Curve coefficient `b`.
    pub b: &'static [u8],
    /// x-coordinate of the base point.
    pub gx: &'static [u8],
    /// y-coordinate of the base point.
    pub gy: &'static [u8],
    /// Order of the base point.
    pub n: &'static [u8],
    /// Cofactor `#E / n`.
    pub cofactor: u32,
}

static CURVES: &[CurveEntry] = &[
    CurveEntry {
        name: "secp112r1",
        description: "SEC 2 112-bit verifiably random curve #1",
        p: &hex!("db7c2abf62e35e668076bead208b"),
        a: &hex!("db7c2abf62e35e668076bead2088"),
        b: &hex!("659ef8ba043916eede8911702b22"),
        gx: &hex!("09487239995a5ee76b55f9c2f098"),
        gy: &hex!("a89ce5af8724c0a23e0e0ff77500"),
        n: &hex!("db7c2abf62e35e7628dfac6561c5"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp112r2",
        description: "SEC 2 112-bit verifiably random curve #2",
        p: &hex!("db7c2abf62e35e668076bead208b"),
        a: &hex!("6127c24c05f38a0aaaf65c0ef02c"),
        b: &hex!("51def1815db5ed74fcc34c85d709"),
        gx: &hex!("4ba30ab5e892b4e1649dd0928643"),
        gy: &hex!("adcd46f5882e3747def36e956e97"),
        n: &hex!("36df0aafd8b8d7597ca10520d04b"),
        cofactor: 4,
    },
    CurveEntry {
        name: "secp128r1",
        description: "SEC 2 128-bit verifiably random curve #1",
        p: &hex!("fffffffdffffffffffffffffffffffff"),
        a: &hex!("fffffffdfffffffffffffffffffffffc"),
        b: &hex!("e87579c11079f43dd824993c2cee5ed3"),
        gx: &hex!("161ff7528b899b2d0c28607ca52c5b86"),
        gy: &hex!("cf5ac8395bafeb13c02da292dded7a83"),
        n: &hex!("fffffffe0000000075a30d1b9038a115"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp128r2",
        description: "SEC 2 128-bit verifiably random curve #2",
        p: &hex!("fffffffdffffffffffffffffffffffff"),
        a: &hex!("d6031998d1b3bbfebf59cc9bbff9aee1"),
        b: &hex!("5eeefca380d02919dc2c6558bb6d8a5d"),
        gx: &hex!("7b6aa5d85e572983e6fb32a7cdebc140"),
        gy: &hex!("27b6916a894d3aee7106fe805fc34b44"),
        n: &hex!("3fffffff7fffffffbe0024720613b5a3"),
        cofactor: 4,
    },
    CurveEntry {
        name: "secp160k1",
        description: "SEC 2 160-bit Koblitz curve",
        p: &hex!("fffffffffffffffffffffffffffffffeffffac73"),
        a: &hex!("0000000000000000000000000000000000000000"),
        b: &hex!("0000000000000000000000000000000000000007"),
        gx: &hex!("3b4c382ce37aa192a4019e763036f4f5dd4d7ebb"),
        gy: &hex!("938cf935318fdced6bc28286531733c3f03c4fee"),
        n: &hex!("0100000000000000000001b8fa16dfab9aca16b6b3"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp160r1",
        description: "SEC 2 160-bit verifiably random curve #1",
        p: &hex!("ffffffffffffffffffffffffffffffff7fffffff"),
        a: &hex!("ffffffffffffffffffffffffffffffff7ffffffc"),
        b: &hex!("1c97befc54bd7a8b65acf89f81d4d4adc565fa45"),
        gx: &hex!("4a96b5688ef573284664698968c38bb913cbfc82"),
        gy: &hex!("23a628553168947d59dcc912042351377ac5fb32"),
        n: &hex!("0100000000000000000001f4c8f927aed3ca752257"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp192k1",
        description: "SEC 2 192-bit Koblitz curve",
        p: &hex!("fffffffffffffffffffffffffffffffffffffffeffffee37"),
        a: &hex!("000000000000000000000000000000000000000000000000"),
        b: &hex!("000000000000000000000000000000000000000000000003"),
        gx: &hex!("db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d"),
        gy: &hex!("9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d"),
        n: &hex!("fffffffffffffffffffffffe26f2fc170f69466a74defd8d"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp192r1",
        description: "SEC 2 192-bit verifiably random curve #1 (NIST P-192)",
        p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp256k1",
        description: "SEC 2 256-bit Koblitz curve",
        p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        cofactor: 1,
    },
    CurveEntry {
        name: "secp256r1",
        description: "SEC 2 256-bit verifiably random curve #1 (NIST P-256)",
        p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        cofactor: 1,
    },
];

/// Look up the registry entry for `name`.
pub fn entry(name: &str) -> Option<&'static CurveEntry> {
    CURVES.iter().find(|entry| entry.name == name)
}

/// Load the domain parameters of the curve called `name`.
pub fn lookup(name: &str) -> Result<CurveParameters> {
    let entry = entry(name).ok_or(Error::UnsupportedCurve)?;
    CurveParameters::from_entry(entry)
}

/// Names of every curve in the registry.
pub fn supported_curves() -> impl Iterator<Item = &'static str> {
    CURVES.iter().map(|entry| entry.name)
}
