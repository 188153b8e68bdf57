//! Umbral key pairs.
//!
//! Keys are serialised as raw field element / SEC1 point bytes, passed through
//! a caller-supplied [`KeyEncoding`].

use crate::{Error, FieldElement, Point, Result, UmbralParameters};
use alloc::vec::Vec;
use core::fmt;
use elliptic_curve::zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Transformation applied to serialised key bytes.
pub trait KeyEncoding {
    /// Encode serialised key bytes.
    fn encode(&self, bytes: &[u8]) -> Vec<u8>;

    /// Recover serialised key bytes.
    ///
    /// Fails with [`Error::InvalidKeyEncoding`] if `bytes` were not produced
    /// by [`KeyEncoding::encode`].
    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// Keys are stored as-is.
#[derive(Copy, Clone, Debug, Default)]
pub struct RawEncoding;

impl KeyEncoding for RawEncoding {
    fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        bytes.to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

/// Keys are stored as lower-case ASCII hex.
#[cfg(feature = "hex")]
#[derive(Copy, Clone, Debug, Default)]
pub struct HexEncoding;

#[cfg(feature = "hex")]
impl KeyEncoding for HexEncoding {
    fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        hex::encode(bytes).into_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        hex::decode(bytes).map_err(|_| Error::InvalidKeyEncoding)
    }
}

/// Umbral secret key: a non-zero scalar together with the parameters it is
/// used under.
///
/// The scalar is zeroized when the key is dropped.
#[derive(Clone)]
pub struct SecretKey {
    scalar: FieldElement,
    public_key: PublicKey,
}

impl SecretKey {
    /// Generate a key with the operating system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn random(params: &UmbralParameters) -> Result<Self> {
        Self::random_with_rng(params, &mut OsRng)
    }

    /// Generate a key with the given random number generator.
    pub fn random_with_rng<R>(params: &UmbralParameters, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        Self::new(FieldElement::random_with_rng(params.curve(), rng)?, params)
    }

    /// Wrap a scalar, computing its public key `G * scalar`.
    ///
    /// The scalar must be non-zero and belong to the parameters' curve.
    pub fn new(scalar: FieldElement, params: &UmbralParameters) -> Result<Self> {
        params.curve().check(&scalar.curve())?;

        if bool::from(scalar.is_zero()) {
            return Err(Error::ValueOutOfOrder);
        }

        let point = params.g().mul(&scalar)?;

        Ok(Self {
            scalar,
            public_key: PublicKey::new(point, params)?,
        })
    }

    /// Decode a key serialised with [`SecretKey::to_bytes`].
    pub fn from_bytes(
        bytes: &[u8],
        params: &UmbralParameters,
        encoding: &impl KeyEncoding,
    ) -> Result<Self> {
        let decoded = Zeroizing::new(encoding.decode(bytes)?);
        let scalar = FieldElement::from_bytes(&decoded, params.curve())?;
        Self::new(scalar, params)
    }

    /// Serialise the scalar as a big-endian integer and encode it.
    pub fn to_bytes(&self, encoding: &impl KeyEncoding) -> Zeroizing<Vec<u8>> {
        let bytes = Zeroizing::new(self.scalar.to_bytes());
        Zeroizing::new(encoding.encode(&bytes))
    }

    /// Secret scalar.
    pub fn scalar(&self) -> &FieldElement {
        &self.scalar
    }

    /// Matching public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Parameters this key is used under.
    pub fn params(&self) -> &UmbralParameters {
        self.public_key.params()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

/// Umbral public key: a non-identity point together with the parameters it is
/// used under.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: Point,
    params: UmbralParameters,
}

impl PublicKey {
    /// Wrap a point of the parameters' curve.
    pub fn new(point: Point, params: &UmbralParameters) -> Result<Self> {
        params.curve().check(&point.curve())?;

        if bool::from(point.is_identity()) {
            return Err(Error::IdentityPoint);
        }

        Ok(Self {
            point,
            params: *params,
        })
    }

    /// Decode a key serialised with [`PublicKey::to_bytes`].
    pub fn from_bytes(
        bytes: &[u8],
        params: &UmbralParameters,
        encoding: &impl KeyEncoding,
    ) -> Result<Self> {
        let decoded = encoding.decode(bytes)?;
        Self::new(Point::from_bytes(&decoded, params.curve())?, params)
    }

    /// Serialise the point in SEC1 form and encode it.
    pub fn to_bytes(&self, encoding: &impl KeyEncoding, compressed: bool) -> Result<Vec<u8>> {
        Ok(encoding.encode(&self.point.to_bytes(compressed)?))
    }

    /// Public point.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Parameters this key is used under.
    pub fn params(&self) -> &UmbralParameters {
        &self.params
    }
}
