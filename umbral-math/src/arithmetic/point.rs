//! Group elements of a supported curve.

use super::{
    backend,
    field::{FieldElement, Scalar},
};
use crate::{Curve, CurveId, Error, Result};
use alloc::vec::Vec;
use core::ops::Neg;
use elliptic_curve::{
    group::Group,
    subtle::{Choice, ConstantTimeEq},
};
use k256::Secp256k1;
use p256::NistP256;
use p384::NistP384;
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// SEC1 tag of a compressed point with even `y`.
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;

/// SEC1 tag of a compressed point with odd `y`.
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;

/// SEC1 tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Backend projective point of one of the supported curves.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Projective {
    P256(p256::ProjectivePoint),
    Secp256k1(k256::ProjectivePoint),
    P384(p384::ProjectivePoint),
}

impl Projective {
    fn curve(&self) -> Curve {
        match self {
            Projective::P256(_) => Curve::P256,
            Projective::Secp256k1(_) => Curve::SECP256K1,
            Projective::P384(_) => Curve::P384,
        }
    }
}

/// Element of the group of a supported [`Curve`], including the point at
/// infinity.
///
/// Every `Point` is known to lie on its curve: the only ways to build one
/// from untrusted data, [`Point::from_affine`] and [`Point::from_bytes`],
/// validate the curve equation.
#[derive(Copy, Clone, Debug)]
pub struct Point(pub(crate) Projective);

impl Point {
    /// Point at infinity.
    pub fn identity(curve: Curve) -> Self {
        Self(match curve.id() {
            CurveId::P256 => Projective::P256(p256::ProjectivePoint::IDENTITY),
            CurveId::Secp256k1 => Projective::Secp256k1(k256::ProjectivePoint::IDENTITY),
            CurveId::P384 => Projective::P384(p384::ProjectivePoint::IDENTITY),
        })
    }

    /// Base point `G`.
    pub fn generator(curve: Curve) -> Self {
        Self(match curve.id() {
            CurveId::P256 => Projective::P256(p256::ProjectivePoint::GENERATOR),
            CurveId::Secp256k1 => Projective::Secp256k1(k256::ProjectivePoint::GENERATOR),
            CurveId::P384 => Projective::P384(p384::ProjectivePoint::GENERATOR),
        })
    }

    /// `G * k` for `k` sampled from the operating system's random number
    /// generator.
    #[cfg(feature = "getrandom")]
    pub fn random(curve: Curve) -> Result<Self> {
        Self::random_with_rng(curve, &mut OsRng)
    }

    /// `G * k` for a uniformly random non-zero `k`.
    pub fn random_with_rng<R>(curve: Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let k = FieldElement::random_with_rng(curve, rng)?;
        Self::generator(curve).mul(&k)
    }

    /// Build a point from big-endian affine coordinates.
    ///
    /// Both coordinates must be below the field prime and satisfy the curve
    /// equation, otherwise [`Error::InvalidAffineCoordinates`] is returned.
    pub fn from_affine(x: &[u8], y: &[u8], curve: Curve) -> Result<Self> {
        let point = match curve.id() {
            CurveId::P256 => backend::point_from_coordinates::<NistP256>(x, y).map(Projective::P256),
            CurveId::Secp256k1 => {
                backend::point_from_coordinates::<Secp256k1>(x, y).map(Projective::Secp256k1)
            }
            CurveId::P384 => backend::point_from_coordinates::<NistP384>(x, y).map(Projective::P384),
        };

        point.map(Self).ok_or(Error::InvalidAffineCoordinates)
    }

    /// Affine coordinates, each [`Curve::field_order_size`] bytes wide.
    pub fn to_affine(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let coordinates = match &self.0 {
            Projective::P256(p) => backend::point_coordinates::<NistP256>(p),
            Projective::Secp256k1(p) => backend::point_coordinates::<Secp256k1>(p),
            Projective::P384(p) => backend::point_coordinates::<NistP384>(p),
        };

        coordinates.ok_or(Error::IdentityPoint)
    }

    /// Decode a SEC1 point.
    ///
    /// Accepts compressed (`0x02`/`0x03 || x`) and uncompressed
    /// (`0x04 || x || y`) encodings. The identity has no encoding here.
    pub fn from_bytes(bytes: &[u8], curve: Curve) -> Result<Self> {
        let (&tag, body) = bytes.split_first().ok_or(Error::EmptyInput)?;
        let size = curve.field_order_size();

        match tag {
            TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y if body.len() == size => {
                let point = match curve.id() {
                    CurveId::P256 => backend::decode_point::<NistP256>(bytes).map(Projective::P256),
                    CurveId::Secp256k1 => {
                        backend::decode_point::<Secp256k1>(bytes).map(Projective::Secp256k1)
                    }
                    CurveId::P384 => backend::decode_point::<NistP384>(bytes).map(Projective::P384),
                };

                point.map(Self).ok_or(Error::InvalidPointEncoding)
            }
            TAG_UNCOMPRESSED if body.len() == 2 * size => {
                let (x, y) = body.split_at(size);
                Self::from_affine(x, y, curve)
            }
            _ => Err(Error::InvalidPointEncoding),
        }
    }

    /// SEC1 encoding, [`Curve::point_size`] bytes long.
    ///
    /// Fails with [`Error::IdentityPoint`] for the point at infinity.
    pub fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        let encoded = match &self.0 {
            Projective::P256(p) => backend::encode_point::<NistP256>(p, compressed),
            Projective::Secp256k1(p) => backend::encode_point::<Secp256k1>(p, compressed),
            Projective::P384(p) => backend::encode_point::<NistP384>(p, compressed),
        };

        encoded.ok_or(Error::IdentityPoint)
    }

    /// Curve this point belongs to.
    pub fn curve(&self) -> Curve {
        self.0.curve()
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> Choice {
        match &self.0 {
            Projective::P256(p) => p.is_identity(),
            Projective::Secp256k1(p) => p.is_identity(),
            Projective::P384(p) => p.is_identity(),
        }
    }

    /// Group addition.
    pub fn add(&self, other: &Self) -> Result<Self> {
        match (&self.0, &other.0) {
            (Projective::P256(a), Projective::P256(b)) => Ok(Self(Projective::P256(*a + *b))),
            (Projective::Secp256k1(a), Projective::Secp256k1(b)) => {
                Ok(Self(Projective::Secp256k1(*a + *b)))
            }
            (Projective::P384(a), Projective::P384(b)) => Ok(Self(Projective::P384(*a + *b))),
            _ => Err(self.mismatch(other.curve())),
        }
    }

    /// `self + (-other)`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Scalar multiplication by a field element of the same curve.
    ///
    /// Runs in constant time with respect to the scalar.
    pub fn mul(&self, k: &FieldElement) -> Result<Self> {
        match (&self.0, &k.0) {
            (Projective::P256(p), Scalar::P256(k)) => Ok(Self(Projective::P256(*p * *k))),
            (Projective::Secp256k1(p), Scalar::Secp256k1(k)) => {
                Ok(Self(Projective::Secp256k1(*p * *k)))
            }
            (Projective::P384(p), Scalar::P384(k)) => Ok(Self(Projective::P384(*p * *k))),
            _ => Err(self.mismatch(k.curve())),
        }
    }

    /// Inverse in the group.
    pub fn neg(&self) -> Self {
        Self(match &self.0 {
            Projective::P256(p) => Projective::P256(-*p),
            Projective::Secp256k1(p) => Projective::Secp256k1(-*p),
            Projective::P384(p) => Projective::P384(-*p),
        })
    }

    fn mismatch(&self, found: Curve) -> Error {
        Error::CurveMismatch {
            expected: self.curve().id(),
            found: found.id(),
        }
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        match (&self.0, &other.0) {
            (Projective::P256(a), Projective::P256(b)) => a.ct_eq(b),
            (Projective::Secp256k1(a), Projective::Secp256k1(b)) => a.ct_eq(b),
            (Projective::P384(a), Projective::P384(b)) => a.ct_eq(b),
            _ => Choice::from(0),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Point::neg(&self)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(self)
    }
}
