//! Error type

use crate::CurveId;
use core::fmt::{self, Display};

/// Result type with the `umbral-math` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Umbral arithmetic errors.
///
/// Every variant is recoverable: callers at the protocol layer are expected to
/// abort the step that produced it, but nothing in this crate panics on bad
/// input or backend failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Curve identifier is not one of P-256, secp256k1 or P-384.
    UnsupportedCurve,

    /// Operands of a binary operation belong to different curves.
    CurveMismatch {
        /// Curve of the left-hand operand.
        expected: CurveId,

        /// Curve of the right-hand operand.
        found: CurveId,
    },

    /// Integer is negative or not below the curve order.
    ValueOutOfOrder,

    /// Zero-length input where bytes were required.
    EmptyInput,

    /// Affine coordinates are out of range or not on the curve.
    InvalidAffineCoordinates,

    /// Bad SEC1 prefix, wrong length, or no curve point for the given `x`.
    InvalidPointEncoding,

    /// Element has no multiplicative inverse.
    NotInvertible,

    /// Operation is undefined for the point at infinity.
    IdentityPoint,

    /// Try-and-increment ran through the whole counter range.
    HashToPointExhausted,

    /// Key bytes could not be decoded by the supplied key encoding.
    InvalidKeyEncoding,

    /// Failure reported by the big integer / elliptic curve backend.
    Backend(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedCurve => f.write_str("unsupported curve"),
            Error::CurveMismatch { expected, found } => {
                write!(f, "curve mismatch: expected {expected}, found {found}")
            }
            Error::ValueOutOfOrder => f.write_str("value is not within the curve order"),
            Error::EmptyInput => f.write_str("empty input"),
            Error::InvalidAffineCoordinates => f.write_str("invalid affine coordinates"),
            Error::InvalidPointEncoding => f.write_str("invalid point encoding"),
            Error::NotInvertible => f.write_str("element is not invertible"),
            Error::IdentityPoint => f.write_str("point at infinity"),
            Error::HashToPointExhausted => f.write_str("could not hash input into the curve"),
            Error::InvalidKeyEncoding => f.write_str("invalid key encoding"),
            Error::Backend(msg) => write!(f, "backend failure: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
