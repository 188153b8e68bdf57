//! Curve-generic helpers over the RustCrypto backend crates.
//!
//! Everything here is written against the `elliptic-curve` traits and is
//! instantiated for `p256::NistP256`, `k256::Secp256k1` and
//! `p384::NistP384` by the dispatching code in the sibling modules.

use alloc::vec::Vec;
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint,
    ff::PrimeField,
    generic_array::typenum::Unsigned,
    group::Group,
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
};

/// Widest scalar among the supported curves (P-384).
pub(crate) const MAX_SCALAR_SIZE: usize = 48;

/// Strip leading zero bytes, keeping a single zero byte for zero.
pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => &bytes[bytes.len().saturating_sub(1)..],
    }
}

/// Left-pad a big-endian integer to the curve's field width.
///
/// `None` if the integer doesn't fit.
pub(crate) fn pad_field_bytes<C: CurveArithmetic>(bytes: &[u8]) -> Option<FieldBytes<C>> {
    let bytes = trim_leading_zeros(bytes);
    let size = C::FieldBytesSize::USIZE;

    if bytes.len() > size {
        return None;
    }

    let mut repr = FieldBytes::<C>::default();
    repr[size - bytes.len()..].copy_from_slice(bytes);
    Some(repr)
}

/// Left-pad a big-endian integer to [`MAX_SCALAR_SIZE`] bytes.
pub(crate) fn widen(bytes: &[u8]) -> [u8; MAX_SCALAR_SIZE] {
    let bytes = trim_leading_zeros(bytes);
    let mut out = [0u8; MAX_SCALAR_SIZE];
    out[MAX_SCALAR_SIZE - bytes.len()..].copy_from_slice(bytes);
    out
}

/// Parse a big-endian integer as a scalar, rejecting values `>= order`.
pub(crate) fn decode_scalar<C: CurveArithmetic>(bytes: &[u8]) -> Option<C::Scalar> {
    let repr = pad_field_bytes::<C>(bytes)?;
    C::Scalar::from_repr(repr).into()
}

/// Little-endian `u64` limbs of a big-endian integer, as taken by `Field::pow`.
pub(crate) fn exponent_limbs(bytes: &[u8]) -> Vec<u64> {
    bytes
        .rchunks(8)
        .map(|chunk| {
            let mut limb = [0u8; 8];
            limb[8 - chunk.len()..].copy_from_slice(chunk);
            u64::from_be_bytes(limb)
        })
        .collect()
}

/// Decode a SEC1 point, validating that it lies on the curve.
pub(crate) fn decode_point<C>(bytes: &[u8]) -> Option<ProjectivePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = EncodedPoint::<C>::from_bytes(bytes).ok()?;
    Option::<AffinePoint<C>>::from(<AffinePoint<C>>::from_encoded_point(&encoded)).map(Into::into)
}

/// Build a point from big-endian affine coordinates.
///
/// Each coordinate must be a canonical base field element and the pair must
/// satisfy the curve equation.
pub(crate) fn point_from_coordinates<C>(x: &[u8], y: &[u8]) -> Option<ProjectivePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let x = pad_field_bytes::<C>(x)?;
    let y = pad_field_bytes::<C>(y)?;
    let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
    Option::<AffinePoint<C>>::from(<AffinePoint<C>>::from_encoded_point(&encoded)).map(Into::into)
}

/// SEC1 encoding of a point; `None` for the identity.
pub(crate) fn encode_point<C>(point: &ProjectivePoint<C>, compress: bool) -> Option<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    if bool::from(point.is_identity()) {
        return None;
    }

    let affine: AffinePoint<C> = (*point).into();
    Some(affine.to_encoded_point(compress).as_bytes().to_vec())
}

/// Fixed-width affine coordinates of a point; `None` for the identity.
pub(crate) fn point_coordinates<C>(point: &ProjectivePoint<C>) -> Option<(Vec<u8>, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    if bool::from(point.is_identity()) {
        return None;
    }

    let affine: AffinePoint<C> = (*point).into();
    let encoded = affine.to_encoded_point(false);
    Some((encoded.x()?.to_vec(), encoded.y()?.to_vec()))
}
