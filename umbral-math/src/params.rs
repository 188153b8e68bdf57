//! Shared Umbral parameters.

use crate::{Curve, Point, Result};

/// Domain separation label used to derive [`UmbralParameters::u`].
const U_LABEL: &[u8] = b"NuCypher/UmbralParameters/u";

/// Public parameters every Umbral participant must agree on.
///
/// `U` is a second generator with unknown discrete logarithm relative to `G`,
/// derived deterministically from the curve, so two `UmbralParameters` for the
/// same curve are always equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UmbralParameters {
    curve: Curve,
    size: usize,
    g: Point,
    u: Point,
}

impl UmbralParameters {
    /// Derive the parameters for `curve`.
    pub fn new(curve: Curve) -> Result<Self> {
        let g = curve.generator();
        let u = Point::hash_to_point_vartime(&g.to_bytes(true)?, U_LABEL, curve)?;

        Ok(Self {
            curve,
            size: curve.field_order_size(),
            g,
            u,
        })
    }

    /// Curve the parameters are defined over.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Byte length of a field order element of the curve.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generator of the curve.
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// Second generator, `HashToPoint(G, "NuCypher/UmbralParameters/u")`.
    pub fn u(&self) -> &Point {
        &self.u
    }
}
