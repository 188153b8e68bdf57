//! Supported curves and their group parameters.

use crate::{Error, Point, Result};
use alloc::vec::Vec;
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use elliptic_curve::{Curve as _, bigint::Encoding};
use k256::Secp256k1;
use p256::NistP256;
use p384::NistP384;

/// Identifier of a supported elliptic curve.
///
/// The set is closed: arithmetic is only provided for these three curves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    /// NIST P-256 (a.k.a. secp256r1, prime256v1).
    P256,

    /// secp256k1.
    Secp256k1,

    /// NIST P-384 (a.k.a. secp384r1).
    P384,
}

impl CurveId {
    /// All supported curves.
    pub const ALL: [CurveId; 3] = [CurveId::P256, CurveId::Secp256k1, CurveId::P384];

    /// OpenSSL numeric identifier of the curve.
    pub const fn nid(self) -> i32 {
        match self {
            CurveId::P256 => 415,
            CurveId::Secp256k1 => 714,
            CurveId::P384 => 715,
        }
    }

    /// Look up a curve by its OpenSSL numeric identifier.
    pub fn from_nid(nid: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.nid() == nid)
            .ok_or(Error::UnsupportedCurve)
    }

    /// Canonical name of the curve.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::P256 => "P-256",
            CurveId::Secp256k1 => "secp256k1",
            CurveId::P384 => "P-384",
        }
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        const ALIASES: [(&str, CurveId); 6] = [
            ("p-256", CurveId::P256),
            ("secp256r1", CurveId::P256),
            ("prime256v1", CurveId::P256),
            ("secp256k1", CurveId::Secp256k1),
            ("p-384", CurveId::P384),
            ("secp384r1", CurveId::P384),
        ];

        ALIASES
            .into_iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|(_, id)| id)
            .ok_or(Error::UnsupportedCurve)
    }
}

impl TryFrom<i32> for CurveId {
    type Error = Error;

    fn try_from(nid: i32) -> Result<Self> {
        Self::from_nid(nid)
    }
}

/// Handle to the group parameters of a supported curve.
///
/// The order, generator and field size all live in the backend curve crates
/// as constants, so a `Curve` is only its identifier: copying it is the deep
/// copy, and two curves are equal exactly when their identifiers are.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Curve {
    id: CurveId,
}

impl Curve {
    /// NIST P-256.
    pub const P256: Self = Self::new(CurveId::P256);

    /// secp256k1.
    pub const SECP256K1: Self = Self::new(CurveId::Secp256k1);

    /// NIST P-384.
    pub const P384: Self = Self::new(CurveId::P384);

    /// Curve for the given identifier.
    pub const fn new(id: CurveId) -> Self {
        Self { id }
    }

    /// Curve for the given OpenSSL numeric identifier.
    ///
    /// Returns [`Error::UnsupportedCurve`] for anything other than
    /// `NID_X9_62_prime256v1`, `NID_secp256k1` and `NID_secp384r1`.
    pub fn from_nid(nid: i32) -> Result<Self> {
        CurveId::from_nid(nid).map(Self::new)
    }

    /// Identifier of this curve.
    pub const fn id(&self) -> CurveId {
        self.id
    }

    /// Size in bytes of a field order element: `ceil(bits(order) / 8)`.
    ///
    /// This is the fixed width of each coordinate in a SEC1 point encoding.
    pub const fn field_order_size(&self) -> usize {
        let bits = match self.id {
            CurveId::P256 => NistP256::ORDER.bits(),
            CurveId::Secp256k1 => Secp256k1::ORDER.bits(),
            CurveId::P384 => NistP384::ORDER.bits(),
        };

        bits.div_ceil(8)
    }

    /// Length of a SEC1 encoded point on this curve.
    pub const fn point_size(&self, compressed: bool) -> usize {
        if compressed {
            1 + self.field_order_size()
        } else {
            1 + 2 * self.field_order_size()
        }
    }

    /// Group order, big-endian and [`Curve::field_order_size`] bytes wide.
    pub fn order(&self) -> Vec<u8> {
        match self.id {
            CurveId::P256 => NistP256::ORDER.to_be_bytes().to_vec(),
            CurveId::Secp256k1 => Secp256k1::ORDER.to_be_bytes().to_vec(),
            CurveId::P384 => NistP384::ORDER.to_be_bytes().to_vec(),
        }
    }

    /// Base point of the curve.
    pub fn generator(&self) -> Point {
        Point::generator(*self)
    }

    /// Ensure an operand's curve matches this one.
    pub(crate) fn check(&self, other: &Curve) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::CurveMismatch {
                expected: self.id,
                found: other.id,
            })
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.id, f)
    }
}

impl From<CurveId> for Curve {
    fn from(id: CurveId) -> Self {
        Self::new(id)
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self::new)
    }
}
