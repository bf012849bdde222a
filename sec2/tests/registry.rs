//! Curve registry tests.

use sec2::{Error, registry};

const EXPECTED: &[(&str, u32, u32, u32)] = &[
    // name, bits(p), bits(n), cofactor
    ("secp112r1", 112, 112, 1),
    ("secp112r2", 112, 110, 4),
    ("secp128r1", 128, 128, 1),
    ("secp128r2", 128, 126, 4),
    ("secp160k1", 160, 161, 1),
    ("secp160r1", 160, 161, 1),
    ("secp192k1", 192, 192, 1),
    ("secp192r1", 192, 192, 1),
    ("secp256k1", 256, 256, 1),
    ("secp256r1", 256, 256, 1),
];

#[test]
fn supported_curves_are_listed() {
    let names: Vec<_> = registry::supported_curves().collect();
    let expected: Vec<_> = EXPECTED.iter().map(|(name, ..)| *name).collect();
    assert_eq!(names, expected);
}

#[test]
fn every_curve_loads() {
    for &(name, p_bits, n_bits, cofactor) in EXPECTED {
        let params = registry::lookup(name).unwrap();
        assert_eq!(params.name(), name);
        assert_eq!(params.prime_bits(), p_bits, "{name}");
        assert_eq!(params.order_bits(), n_bits, "{name}");
        assert_eq!(params.cofactor(), cofactor, "{name}");
        assert_eq!(params.prime_bytes(), p_bits.div_ceil(8) as usize, "{name}");
        assert_eq!(params.order_bytes(), n_bits.div_ceil(8) as usize, "{name}");
        assert!(bool::from(params.curve().is_on_curve(params.curve().generator())));
    }
}

#[test]
fn generator_has_order_n() {
    for name in registry::supported_curves() {
        let params = registry::lookup(name).unwrap();
        let curve = params.curve();
        let n = params.scalars().modulus();
        assert!(
            bool::from(curve.mul_vartime(n, curve.generator()).is_identity()),
            "{name}"
        );
        assert!(
            bool::from(curve.mul(n, curve.generator()).is_identity()),
            "{name}"
        );
        assert!(bool::from(curve.mul_base(n).is_identity()), "{name}");
    }
}

#[test]
fn unknown_curve() {
    assert_eq!(
        registry::lookup("unknown-curve-xyz"),
        Err(Error::UnsupportedCurve)
    );
    assert_eq!(registry::lookup("secp256K1"), Err(Error::UnsupportedCurve));
}

#[test]
fn lookups_are_independent_but_equal() {
    let a = registry::lookup("secp192k1").unwrap();
    let b = registry::lookup("secp192k1").unwrap();
    assert_eq!(a, b);
    assert_eq!(registry::entry("secp192k1").unwrap().cofactor, 1);
}
