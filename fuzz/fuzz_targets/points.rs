#![no_main]
// Targets: P-256, secp256k1, P-384
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use umbral_math::{Curve, CurveId, FieldElement, Point};

fn test_group(p1: Point, p2: Point, s: FieldElement) {
    let identity = Point::identity(p1.curve());

    // Test point arithmetic
    let sum = p1.add(&p2).unwrap();
    let scalar_mul = p1.mul(&s).unwrap();

    // Test that addition and doubling are consistent
    let two = FieldElement::from_int(2, p1.curve()).unwrap();
    assert_eq!(p1.mul(&two).unwrap(), p1.add(&p1).unwrap().sub(&identity).unwrap());

    // Test that negation works correctly
    assert_eq!(sum.add(&sum.neg()).unwrap(), identity);

    // Test scalar multiplication distributive property
    assert_eq!(
        scalar_mul.add(&scalar_mul).unwrap(),
        p1.mul(&s.add(&s).unwrap()).unwrap()
    );

    // Test encodings of non-identity points
    if !bool::from(sum.is_identity()) {
        for compressed in [true, false] {
            let bytes = sum.to_bytes(compressed).unwrap();
            assert_eq!(Point::from_bytes(&bytes, sum.curve()).unwrap(), sum);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 256 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    for curve in CurveId::ALL.map(Curve::new) {
        let len = curve.point_size(true);
        let size = curve.field_order_size();

        let p1 = Point::from_bytes(&data[32..32 + len], curve)
            .or_else(|_| Point::random_with_rng(curve, &mut rng))
            .unwrap();
        let p2 = Point::from_affine(&data[96..96 + size], &data[144..144 + size], curve)
            .unwrap_or_else(|_| curve.generator());
        let p3 = Point::from_bytes(&data[64..64 + usize::from(data[4] & 0x7f)], curve)
            .unwrap_or_else(|_| Point::identity(curve));
        let p4 = Point::hash_to_point_vartime(&data[192..], &data[..4], curve).unwrap();
        let scalar = FieldElement::from_bytes(&data[200..200 + size], curve)
            .or_else(|_| FieldElement::random_with_rng(curve, &mut rng))
            .unwrap();

        test_group(
            p1.add(&p2).unwrap(),
            p1.add(&p3).unwrap().add(&p4).unwrap(),
            scalar,
        );
    }
});
