//! Hashing arbitrary bytes to field elements and curve points.
//!
//! Both maps use BLAKE2b with a 64-byte digest. Hashing to a point uses the
//! try-and-increment method, which is **not** constant time: its running time
//! depends on the input, so it must never be fed secret data.

use crate::{Curve, Error, FieldElement, Point, Result};
use blake2::{Blake2b512, Digest};
use elliptic_curve::bigint::{Encoding, NonZero, U512};

/// Size of a BLAKE2b-512 digest.
const DIGEST_SIZE: usize = 64;

/// SEC1 tag of a compressed point with even `y`.
const TAG_EVEN_Y: u8 = 0x02;

/// SEC1 tag of a compressed point with odd `y`.
const TAG_ODD_Y: u8 = 0x03;

impl FieldElement {
    /// Hash bytes to an element of `[1, order)`.
    ///
    /// Computes `1 + (BLAKE2b-512(bytes) mod (order - 1))`.
    pub fn hash_to_field(bytes: &[u8], curve: Curve) -> Result<Self> {
        let digest = Blake2b512::digest(bytes);

        let mut order = [0u8; DIGEST_SIZE];
        let order_bytes = curve.order();
        order[DIGEST_SIZE - order_bytes.len()..].copy_from_slice(&order_bytes);

        let modulus = U512::from_be_slice(&order).wrapping_sub(&U512::ONE);
        let modulus = Option::<NonZero<U512>>::from(NonZero::new(modulus))
            .ok_or(Error::Backend("division by zero"))?;

        let value = U512::from_be_slice(&digest)
            .rem(&modulus)
            .wrapping_add(&U512::ONE);

        Self::from_bytes(&value.to_be_bytes(), curve)
    }
}

impl Point {
    /// Hash `data` to a point of `curve`, domain-separated by `label`.
    ///
    /// For every 32-bit counter `i`, starting at zero, the digest
    /// `H = BLAKE2b-512(len(label) || label || len(data) || data || i)` is
    /// computed, with lengths and counter encoded as big-endian `u32`.
    /// `H[1..=size]` is taken as the `x` coordinate of a compressed point whose
    /// `y` parity follows the lowest bit of `H[0]`. The first candidate that
    /// decodes to a curve point is returned.
    ///
    /// Each candidate succeeds with probability about one half, so running out
    /// of counters ([`Error::HashToPointExhausted`]) is not expected to happen
    /// in practice.
    ///
    /// # ⚠️ Warning
    /// Variable time: do not use with secret inputs.
    pub fn hash_to_point_vartime(data: &[u8], label: &[u8], curve: Curve) -> Result<Self> {
        let label_len = u32::try_from(label.len()).map_err(|_| Error::Backend("label too long"))?;
        let data_len = u32::try_from(data.len()).map_err(|_| Error::Backend("data too long"))?;

        let mut hasher = Blake2b512::new();
        hasher.update(label_len.to_be_bytes());
        hasher.update(label);
        hasher.update(data_len.to_be_bytes());
        hasher.update(data);

        let size = curve.field_order_size();
        let mut candidate = [0u8; 1 + DIGEST_SIZE];

        for i in 0..u32::MAX {
            let digest = hasher.clone().chain_update(i.to_be_bytes()).finalize();

            candidate[0] = if digest[0] & 1 == 0 {
                TAG_EVEN_Y
            } else {
                TAG_ODD_Y
            };
            candidate[1..=size].copy_from_slice(&digest[1..=size]);

            if let Ok(point) = Self::from_bytes(&candidate[..=size], curve) {
                return Ok(point);
            }
        }

        Err(Error::HashToPointExhausted)
    }
}
