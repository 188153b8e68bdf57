//! Field element arithmetic tests, checked against `num-bigint`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;
use umbral_math::{Curve, Error, FieldElement};

fn order(curve: Curve) -> BigUint {
    BigUint::from_bytes_be(&curve.order())
}

fn to_big(element: &FieldElement) -> BigUint {
    BigUint::from_bytes_be(&element.to_bytes())
}

fn from_big(value: &BigUint, curve: Curve) -> FieldElement {
    FieldElement::from_bytes(&value.to_bytes_be(), curve).unwrap()
}

prop_compose! {
    fn curve()(curve in prop_oneof![
        Just(Curve::P256),
        Just(Curve::SECP256K1),
        Just(Curve::P384),
    ]) -> Curve {
        curve
    }
}

prop_compose! {
    fn element(curve: Curve)(bytes in prop::collection::vec(any::<u8>(), 64)) -> FieldElement {
        from_big(&(BigUint::from_bytes_be(&bytes) % order(curve)), curve)
    }
}

prop_compose! {
    fn pair()(curve in curve())(
        a in element(curve),
        b in element(curve),
    ) -> (FieldElement, FieldElement) {
        (a, b)
    }
}

proptest! {
    #[test]
    fn add_sub_mul_match_reference((a, b) in pair()) {
        let curve = a.curve();
        let n = order(curve);
        let (x, y) = (to_big(&a), to_big(&b));

        prop_assert_eq!(to_big(&a.add(&b).unwrap()), (&x + &y) % &n);
        prop_assert_eq!(to_big(&a.sub(&b).unwrap()), (&x + &n - &y) % &n);
        prop_assert_eq!(to_big(&a.mul(&b).unwrap()), (&x * &y) % &n);
    }

    #[test]
    fn sub_undoes_add((a, b) in pair()) {
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn pow_matches_reference((a, b) in pair()) {
        let n = order(a.curve());
        prop_assert_eq!(
            to_big(&a.pow(&b).unwrap()),
            to_big(&a).modpow(&to_big(&b), &n)
        );
    }

    #[test]
    fn div_inverts_mul((a, b) in pair()) {
        prop_assume!(!bool::from(b.is_zero()));
        prop_assert_eq!(a.div(&b).unwrap().mul(&b).unwrap(), a);
        prop_assert_eq!(b.mul(&b.invert().unwrap()).unwrap(), FieldElement::one(b.curve()));
    }

    #[test]
    fn modulo_is_raw_reduction((a, b) in pair()) {
        prop_assume!(!bool::from(b.is_zero()));
        prop_assert_eq!(to_big(&a.modulo(&b).unwrap()), to_big(&a) % to_big(&b));
    }

    #[test]
    fn compare_matches_reference((a, b) in pair()) {
        prop_assert_eq!(a.compare(&b), to_big(&a).cmp(&to_big(&b)));
        prop_assert_eq!(a == b, to_big(&a) == to_big(&b));
    }

    #[test]
    fn negation_is_additive_inverse((a, _b) in pair()) {
        prop_assert!(bool::from(a.add(&a.neg()).unwrap().is_zero()));
    }

    #[test]
    fn bytes_round_trip((a, _b) in pair()) {
        prop_assert_eq!(FieldElement::from_bytes(&a.to_bytes(), a.curve()).unwrap(), a);
    }

    #[test]
    fn decimal_display_matches_reference((a, _b) in pair()) {
        prop_assert_eq!(a.to_string(), to_big(&a).to_string());
    }

    #[test]
    fn hash_to_field_matches_reference(
        curve in curve(),
        data in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        use blake2::{Blake2b512, Digest};

        let n = order(curve);
        let digest = BigUint::from_bytes_be(&Blake2b512::digest(&data));
        let expected = BigUint::one() + digest % (&n - BigUint::one());

        let element = FieldElement::hash_to_field(&data, curve).unwrap();
        prop_assert_eq!(to_big(&element), expected);
        prop_assert!(!to_big(&element).is_zero());
    }
}

#[test]
fn power_of_two() {
    for curve in [Curve::P256, Curve::SECP256K1, Curve::P384] {
        let two = FieldElement::from_int(2, curve).unwrap();
        let exponent = FieldElement::from_int(300, curve).unwrap();
        let expected = BigUint::from(2u8).pow(300) % order(curve);

        assert_eq!(to_big(&two.pow(&exponent).unwrap()), expected);
    }
}

#[test]
fn small_sums() {
    for curve in [Curve::P256, Curve::SECP256K1, Curve::P384] {
        let a = FieldElement::from_int(256, curve).unwrap();
        let b = FieldElement::from_int(512, curve).unwrap();
        assert_eq!(a.add(&b).unwrap(), FieldElement::from_int(768, curve).unwrap());
    }
}

#[test]
fn order_boundaries() {
    for curve in [Curve::P256, Curve::SECP256K1, Curve::P384] {
        let n = order(curve);

        assert_eq!(
            FieldElement::from_bytes(&n.to_bytes_be(), curve),
            Err(Error::ValueOutOfOrder)
        );
        assert_eq!(
            FieldElement::from_bytes(&(&n + 1u8).to_bytes_be(), curve),
            Err(Error::ValueOutOfOrder)
        );

        let max = from_big(&(&n - 1u8), curve);
        assert_eq!(max.add(&FieldElement::one(curve)).unwrap(), FieldElement::zero(curve));
        assert_eq!(FieldElement::from_bytes(&[], curve), Err(Error::EmptyInput));
    }
}

#[cfg(feature = "getrandom")]
#[test]
fn random_is_within_order() {
    for curve in [Curve::P256, Curve::SECP256K1, Curve::P384] {
        let a = FieldElement::random(curve).unwrap();
        let b = FieldElement::random(curve).unwrap();

        assert!(!bool::from(a.is_zero()));
        assert!(to_big(&a) < order(curve));
        assert_ne!(a, b);
    }
}

#[test]
fn random_with_seeded_rng_is_reproducible() {
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    let a = FieldElement::random_with_rng(Curve::P384, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    let b = FieldElement::random_with_rng(Curve::P384, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}
