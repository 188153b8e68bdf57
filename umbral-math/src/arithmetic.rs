//! Field and group arithmetic over the supported curves.
//!
//! Each supported curve is backed by its RustCrypto implementation. The
//! public types here are tagged unions over those backends, so a single
//! [`FieldElement`] or [`Point`] type covers every curve and mixing curves is
//! a runtime error rather than a type error.

mod backend;
mod field;
mod point;

pub use field::FieldElement;
pub use point::Point;
