//! Checks that `umbral-math` builds without `std`.

#![no_std]

use umbral_math::{Curve, Point, Result, UmbralParameters};

/// Derive the parameters and a hashed point on secp256k1.
pub fn derive() -> Result<(UmbralParameters, Point)> {
    let params = UmbralParameters::new(Curve::SECP256K1)?;
    let point = Point::hash_to_point_vartime(b"no_std", b"", params.curve())?;
    Ok((params, point))
}
