//! Integers modulo the order of a curve's group.

use super::backend::{self, MAX_SCALAR_SIZE, trim_leading_zeros, widen};
use crate::{Curve, CurveId, Error, Result};
use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::Neg,
};
use elliptic_curve::{
    Field, PrimeField,
    bigint::{Encoding, NonZero, U384},
    subtle::{Choice, ConstantTimeEq},
    zeroize::Zeroize,
};
use k256::Secp256k1;
use num_bigint::BigUint;
use p256::NistP256;
use p384::NistP384;
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Backend scalar of one of the supported curves.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Scalar {
    P256(p256::Scalar),
    Secp256k1(k256::Scalar),
    P384(p384::Scalar),
}

impl Scalar {
    fn curve(&self) -> Curve {
        match self {
            Scalar::P256(_) => Curve::P256,
            Scalar::Secp256k1(_) => Curve::SECP256K1,
            Scalar::P384(_) => Curve::P384,
        }
    }
}

/// Apply `$op` to the backend scalar, keeping the curve tag.
macro_rules! map_scalar {
    ($value:expr, |$s:ident| $op:expr) => {
        match $value {
            Scalar::P256($s) => Scalar::P256($op),
            Scalar::Secp256k1($s) => Scalar::Secp256k1($op),
            Scalar::P384($s) => Scalar::P384($op),
        }
    };
}

/// Evaluate `$op` on the backend scalar when the result isn't a scalar.
macro_rules! with_scalar {
    ($value:expr, |$s:ident| $op:expr) => {
        match $value {
            Scalar::P256($s) => $op,
            Scalar::Secp256k1($s) => $op,
            Scalar::P384($s) => $op,
        }
    };
}

/// Apply `$op` to two backend scalars of the same curve.
///
/// Operands on different curves fail with [`Error::CurveMismatch`] before
/// `$op` is evaluated.
macro_rules! zip_scalars {
    ($lhs:expr, $rhs:expr, |$a:ident, $b:ident| $op:expr) => {
        match ($lhs, $rhs) {
            (Scalar::P256($a), Scalar::P256($b)) => Ok(Scalar::P256($op)),
            (Scalar::Secp256k1($a), Scalar::Secp256k1($b)) => Ok(Scalar::Secp256k1($op)),
            (Scalar::P384($a), Scalar::P384($b)) => Ok(Scalar::P384($op)),
            (lhs, rhs) => Err(Error::CurveMismatch {
                expected: lhs.curve().id(),
                found: rhs.curve().id(),
            }),
        }
    };
}

/// Integer `v` with `0 <= v < order` for the group order of its [`Curve`]
/// (the Umbral "ModBigNum").
///
/// All arithmetic is performed by the backend's constant-time scalar field
/// implementation and returns a new element on the same curve. Binary
/// operations check that both operands share a curve before computing
/// anything.
///
/// Equality and ordering are defined on the integer value alone.
#[derive(Copy, Clone, Debug)]
pub struct FieldElement(pub(crate) Scalar);

impl FieldElement {
    /// Zero on the given curve.
    pub fn zero(curve: Curve) -> Self {
        Self(match curve.id() {
            CurveId::P256 => Scalar::P256(p256::Scalar::ZERO),
            CurveId::Secp256k1 => Scalar::Secp256k1(k256::Scalar::ZERO),
            CurveId::P384 => Scalar::P384(p384::Scalar::ZERO),
        })
    }

    /// One on the given curve.
    pub fn one(curve: Curve) -> Self {
        Self(match curve.id() {
            CurveId::P256 => Scalar::P256(p256::Scalar::ONE),
            CurveId::Secp256k1 => Scalar::Secp256k1(k256::Scalar::ONE),
            CurveId::P384 => Scalar::P384(p384::Scalar::ONE),
        })
    }

    /// Convert an integer.
    ///
    /// Negative values fail with [`Error::ValueOutOfOrder`].
    pub fn from_int(value: i64, curve: Curve) -> Result<Self> {
        let value = u64::try_from(value).map_err(|_| Error::ValueOutOfOrder)?;
        Self::from_bytes(&value.to_be_bytes(), curve)
    }

    /// Parse a big-endian integer.
    ///
    /// Leading zero bytes are accepted. Fails with [`Error::EmptyInput`] for
    /// an empty slice and [`Error::ValueOutOfOrder`] if the value is not below
    /// the curve order.
    pub fn from_bytes(bytes: &[u8], curve: Curve) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let scalar = match curve.id() {
            CurveId::P256 => backend::decode_scalar::<NistP256>(bytes).map(Scalar::P256),
            CurveId::Secp256k1 => backend::decode_scalar::<Secp256k1>(bytes).map(Scalar::Secp256k1),
            CurveId::P384 => backend::decode_scalar::<NistP384>(bytes).map(Scalar::P384),
        };

        scalar.map(Self).ok_or(Error::ValueOutOfOrder)
    }

    /// Sample a uniformly random element of `[1, order)` from the operating
    /// system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn random(curve: Curve) -> Result<Self> {
        Self::random_with_rng(curve, &mut OsRng)
    }

    /// Sample a uniformly random element of `[1, order)`.
    ///
    /// Draws [`Curve::field_order_size`] random bytes and retries until they
    /// encode a value within the order. Zero is rejected as well.
    pub fn random_with_rng<R>(curve: Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let mut buf = [0u8; MAX_SCALAR_SIZE];
        let bytes = &mut buf[..curve.field_order_size()];

        loop {
            rng.try_fill_bytes(bytes)
                .map_err(|_| Error::Backend("random number generator failure"))?;

            let candidate = Self::from_bytes(bytes, curve);
            bytes.zeroize();

            if let Some(candidate) = candidate.ok().filter(Self::is_within_order) {
                return Ok(candidate);
            }
        }
    }

    /// Curve this element belongs to.
    pub fn curve(&self) -> Curve {
        self.0.curve()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        with_scalar!(&self.0, |s| s.is_zero())
    }

    /// `0 < v < order`; the upper bound holds for every constructed element.
    fn is_within_order(&self) -> bool {
        !bool::from(self.is_zero())
    }

    /// Minimal big-endian encoding.
    ///
    /// Zero is encoded as a single `0x00` byte so that every element
    /// round-trips through [`FieldElement::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        with_scalar!(&self.0, |s| trim_leading_zeros(&s.to_repr()).to_vec())
    }

    /// Value as a big-endian integer wide enough for every supported curve.
    fn to_wide_bytes(&self) -> [u8; MAX_SCALAR_SIZE] {
        with_scalar!(&self.0, |s| widen(&s.to_repr()))
    }

    /// `self + other mod order`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        zip_scalars!(&self.0, &other.0, |a, b| *a + *b).map(Self)
    }

    /// `self - other mod order`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        zip_scalars!(&self.0, &other.0, |a, b| *a - *b).map(Self)
    }

    /// `self * other mod order`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        zip_scalars!(&self.0, &other.0, |a, b| *a * *b).map(Self)
    }

    /// `self * other^-1 mod order`.
    ///
    /// Fails with [`Error::NotInvertible`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.curve().check(&other.curve())?;
        self.mul(&other.invert()?)
    }

    /// `self^exponent mod order`, where the exponent is the integer value of
    /// `exponent`.
    ///
    /// Runs in constant time with respect to the exponent.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        zip_scalars!(&self.0, &exponent.0, |a, e| {
            Field::pow(a, backend::exponent_limbs(&e.to_repr()))
        })
        .map(Self)
    }

    /// Multiplicative inverse modulo the order.
    ///
    /// The order of every supported curve is prime, so only zero has no
    /// inverse; it fails with [`Error::NotInvertible`].
    pub fn invert(&self) -> Result<Self> {
        let inverse = map_scalar!(&self.0, |s| {
            Option::from(Field::invert(s)).ok_or(Error::NotInvertible)?
        });

        Ok(Self(inverse))
    }

    /// Additive inverse modulo the order.
    pub fn neg(&self) -> Self {
        Self(map_scalar!(&self.0, |s| -*s))
    }

    /// Reduce the integer value of `self` by the integer value of `modulus`.
    ///
    /// This is plain integer reduction, not arithmetic modulo the curve order:
    /// the result is `v mod m` where `m` is the value held by `modulus`. A
    /// zero modulus fails with [`Error::Backend`].
    pub fn modulo(&self, modulus: &Self) -> Result<Self> {
        self.curve().check(&modulus.curve())?;

        let value = U384::from_be_slice(&self.to_wide_bytes());
        let modulus = Option::<NonZero<U384>>::from(NonZero::new(U384::from_be_slice(
            &modulus.to_wide_bytes(),
        )))
        .ok_or(Error::Backend("division by zero"))?;

        Self::from_bytes(&value.rem(&modulus).to_be_bytes(), self.curve())
    }

    /// Three-way comparison of the integer values.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.to_wide_bytes().cmp(&other.to_wide_bytes())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_wide_bytes()[..].ct_eq(&other.to_wide_bytes()[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElement::neg(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

/// Decimal representation of the integer value, for diagnostics.
impl Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&BigUint::from_bytes_be(&self.to_bytes()), f)
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        with_scalar!(&mut self.0, |s| s.zeroize())
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{Curve, CurveId, Error};
    use alloc::string::ToString;
    use core::cmp::Ordering;
    use elliptic_curve::zeroize::Zeroize;
    use hex_literal::hex;

    #[test]
    fn zero_and_one() {
        for curve in CurveId::ALL.map(Curve::new) {
            assert!(bool::from(FieldElement::zero(curve).is_zero()));
            assert_eq!(FieldElement::one(curve), FieldElement::from_int(1, curve).unwrap());
            assert_eq!(FieldElement::zero(curve).to_bytes(), [0]);
        }
    }

    #[test]
    fn from_int_rejects_negative() {
        assert_eq!(
            FieldElement::from_int(-1, Curve::SECP256K1),
            Err(Error::ValueOutOfOrder)
        );
    }

    #[test]
    fn from_bytes_bounds() {
        let curve = Curve::SECP256K1;
        let order = curve.order();
        assert_eq!(
            FieldElement::from_bytes(&order, curve),
            Err(Error::ValueOutOfOrder)
        );

        let max = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140");
        let element = FieldElement::from_bytes(&max, curve).unwrap();
        assert_eq!(element.to_bytes(), max);

        assert_eq!(
            FieldElement::from_bytes(&[1u8; 33], curve),
            Err(Error::ValueOutOfOrder)
        );
        assert_eq!(
            FieldElement::from_bytes(&[0, 0, 0, 5], curve).unwrap(),
            FieldElement::from_int(5, curve).unwrap()
        );
    }

    #[test]
    fn to_bytes_is_minimal() {
        let curve = Curve::P384;
        assert_eq!(FieldElement::from_int(0x0102, curve).unwrap().to_bytes(), [1, 2]);
        assert_eq!(FieldElement::from_int(255, curve).unwrap().to_bytes(), [255]);
    }

    #[test]
    fn mismatched_curves() {
        let a = FieldElement::from_int(3, Curve::P256).unwrap();
        let b = FieldElement::from_int(3, Curve::SECP256K1).unwrap();
        let mismatch = Err(Error::CurveMismatch {
            expected: CurveId::P256,
            found: CurveId::Secp256k1,
        });

        assert_eq!(a.add(&b), mismatch);
        assert_eq!(a.sub(&b), mismatch);
        assert_eq!(a.mul(&b), mismatch);
        assert_eq!(a.div(&b), mismatch);
        assert_eq!(a.pow(&b), mismatch);
        assert_eq!(a.modulo(&b), mismatch);
    }

    #[test]
    fn mismatch_reported_before_inversion() {
        let a = FieldElement::from_int(3, Curve::P256).unwrap();
        let zero = FieldElement::zero(Curve::P384);
        assert_eq!(
            a.div(&zero),
            Err(Error::CurveMismatch {
                expected: CurveId::P256,
                found: CurveId::P384,
            })
        );
    }

    #[test]
    fn invert_zero() {
        let zero = FieldElement::zero(Curve::P256);
        assert_eq!(zero.invert(), Err(Error::NotInvertible));
        assert_eq!(
            FieldElement::one(Curve::P256).div(&zero),
            Err(Error::NotInvertible)
        );
    }

    #[test]
    fn negation_wraps_around_order() {
        let curve = Curve::SECP256K1;
        let one = FieldElement::one(curve);
        let minus_one = one.neg();
        assert_eq!(
            minus_one.to_bytes(),
            hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140")
        );
        assert_eq!(minus_one.add(&one).unwrap(), FieldElement::zero(curve));
        assert_eq!(-(-one), one);
    }

    #[test]
    fn raw_modulo() {
        let curve = Curve::P256;
        let ten = FieldElement::from_int(10, curve).unwrap();
        let three = FieldElement::from_int(3, curve).unwrap();
        assert_eq!(ten.modulo(&three).unwrap(), FieldElement::one(curve));
        assert_eq!(three.modulo(&ten).unwrap(), three);
        assert_eq!(
            ten.modulo(&FieldElement::zero(curve)),
            Err(Error::Backend("division by zero"))
        );
    }

    #[test]
    fn comparison_uses_integer_value() {
        let small = FieldElement::from_int(7, Curve::P384).unwrap();
        let large = FieldElement::from_int(300, Curve::P384).unwrap();
        assert_eq!(small.compare(&large), Ordering::Less);
        assert_eq!(large.compare(&small), Ordering::Greater);
        assert_eq!(small.compare(&small), Ordering::Equal);
        assert!(small < large);

        // Values on different curves still compare by value.
        assert_eq!(small, FieldElement::from_int(7, Curve::P256).unwrap());
    }

    #[test]
    fn decimal_string() {
        let curve = Curve::P256;
        assert_eq!(FieldElement::from_int(768, curve).unwrap().to_string(), "768");
        assert_eq!(FieldElement::zero(curve).to_string(), "0");
        assert_eq!(
            FieldElement::one(curve).neg().to_string(),
            "115792089210356248762697446949407573529996955224135760342422259061068512044368"
        );
    }

    #[test]
    fn zeroize() {
        let mut element = FieldElement::from_int(42, Curve::P256).unwrap();
        element.zeroize();
        assert!(bool::from(element.is_zero()));
        assert_eq!(element.curve(), Curve::P256);
    }
}
