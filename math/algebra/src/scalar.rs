use std::fmt::Debug;

use num_traits::{Num, Signed};

/// The element type a matrix can do arithmetic on.
///
/// Signed, since cofactor signs and elimination factors go negative. Unsigned matrices can
/// still be built, reshaped and serialized, they just have no arithmetic.
///
/// The two kernel hooks are what the matrix product and the row operations are built on,
/// a scalar type may override them with a faster implementation as long as the result only
/// differs by floating point summation order.
pub trait Scalar: Copy + PartialEq + Debug + Num + Signed + 'static {
  /// `lhs` and `rhs` have the same length
  #[inline]
  fn dot(lhs: &[Self], rhs: &[Self]) -> Self {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs
      .iter()
      .zip(rhs)
      .fold(Self::zero(), |acc, (&a, &b)| acc + a * b)
  }

  /// `dst[i] = dst[i] + multiplier * src[i]`
  #[inline]
  fn add_scaled(dst: &mut [Self], multiplier: Self, src: &[Self]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
      *d = *d + multiplier * s;
    }
  }
}

macro_rules! impl_portable_scalar {
  ($($t:ty),+) => {
    $(impl Scalar for $t {})+
  };
}

impl_portable_scalar!(f64, i8, i16, i32, i64, isize);

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
impl Scalar for f32 {}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
impl Scalar for f32 {
  #[inline]
  fn dot(lhs: &[Self], rhs: &[Self]) -> Self {
    crate::simd::dot_f32(lhs, rhs)
  }

  #[inline]
  fn add_scaled(dst: &mut [Self], multiplier: Self, src: &[Self]) {
    crate::simd::add_scaled_f32(dst, multiplier, src)
  }
}

#[test]
fn portable_kernels() {
  assert_eq!(i32::dot(&[1, 2, 3], &[4, 5, 6]), 32);
  assert_eq!(f64::dot(&[], &[]), 0.);

  let mut row = [1., 2., 3.];
  f64::add_scaled(&mut row, -2., &[1., 1., 1.]);
  assert_eq!(row, [-1., 0., 1.]);
}
