#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # fn main() -> umbral_math::Result<()> {
//! use umbral_math::{Curve, FieldElement, Point, UmbralParameters};
//!
//! let params = UmbralParameters::new(Curve::SECP256K1)?;
//!
//! let k = FieldElement::random(params.curve())?;
//! let p = params.g().mul(&k)?;
//! let q = Point::hash_to_point_vartime(b"data", b"label", params.curve())?;
//!
//! assert_eq!(p.add(&q)?.sub(&q)?, p);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "getrandom"))]
//! # fn main() {}
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod curve;
mod error;
mod hash2curve;
mod params;

pub mod keys;

pub use crate::{
    arithmetic::{FieldElement, Point},
    curve::{Curve, CurveId},
    error::{Error, Result},
    params::UmbralParameters,
};

pub use elliptic_curve::{self, subtle, zeroize};
pub use rand_core;
