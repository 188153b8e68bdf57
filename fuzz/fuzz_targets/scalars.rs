#![no_main]
// Targets: P-256, secp256k1, P-384
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use umbral_math::{Curve, CurveId, FieldElement};

fn test_field(fe1: FieldElement, fe2: FieldElement, fe3: FieldElement) {
    let curve = fe1.curve();
    let zero = FieldElement::zero(curve);
    let one = FieldElement::one(curve);

    // Associativity
    assert_eq!(
        fe1.add(&fe2.add(&fe3).unwrap()).unwrap(),
        fe1.add(&fe2).unwrap().add(&fe3).unwrap()
    );
    assert_eq!(
        fe1.mul(&fe2.mul(&fe3).unwrap()).unwrap(),
        fe1.mul(&fe2).unwrap().mul(&fe3).unwrap()
    );

    // Commutativity
    assert_eq!(fe1.add(&fe2).unwrap(), fe2.add(&fe1).unwrap());
    assert_eq!(fe1.mul(&fe2).unwrap(), fe2.mul(&fe1).unwrap());

    // Identity
    assert_eq!(fe1.add(&zero).unwrap(), fe1);
    assert_eq!(fe1.mul(&one).unwrap(), fe1);
    assert_eq!(fe1.sub(&fe1).unwrap(), zero);

    // Distributivity
    assert_eq!(
        fe1.mul(&fe2.add(&fe3).unwrap()).unwrap(),
        fe1.mul(&fe2).unwrap().add(&fe1.mul(&fe3).unwrap()).unwrap()
    );

    // Inverse, division
    assert_eq!(fe1.add(&fe1.neg()).unwrap(), zero);
    if !bool::from(fe2.is_zero()) {
        assert_eq!(fe1.div(&fe2).unwrap().mul(&fe2).unwrap(), fe1);
        assert!(fe1.modulo(&fe2).unwrap() < fe2);
    }

    // Power laws
    let two = FieldElement::from_int(2, curve).unwrap();
    assert_eq!(fe1.pow(&two).unwrap(), fe1.mul(&fe1).unwrap());
    assert_eq!(fe1.pow(&zero).unwrap(), one);

    // Encoding
    assert_eq!(FieldElement::from_bytes(&fe1.to_bytes(), curve).unwrap(), fe1);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 192 {
        return;
    }

    // Backup plan for `from_bytes` failures
    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    for curve in CurveId::ALL.map(Curve::new) {
        let size = curve.field_order_size();
        let mut element = |offset: usize| {
            FieldElement::from_bytes(&data[offset..offset + size], curve)
                .or_else(|_| FieldElement::random_with_rng(curve, &mut rng))
                .unwrap()
        };

        let fe1 = element(32);
        let fe2 = element(80);
        let fe3 = element(128);
        test_field(fe1, fe2, fe3);

        let hashed = FieldElement::hash_to_field(data, curve).unwrap();
        assert!(!bool::from(hashed.is_zero()));
    }
});
