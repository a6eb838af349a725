//! Dense matrices whose row and column counts are const generic parameters.
//!
//! Shape errors (multiplying incompatible matrices, asking a non square matrix for its
//! determinant) are rejected by the type checker or by post monomorphization `const`
//! assertions, never at runtime.

mod error;
mod mat;
mod scalar;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod simd;

pub use error::*;
pub use mat::*;
pub use scalar::*;
