use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::*;

impl<const R: usize, const C: usize, T: Scalar> Mul<T> for Matrix<R, C, T> {
  type Output = Self;

  fn mul(self, scalar: T) -> Self {
    self.map(|v| v * scalar)
  }
}

impl<const R: usize, const C: usize, T: Scalar> Div<T> for Matrix<R, C, T> {
  type Output = Self;

  fn div(self, scalar: T) -> Self {
    self.map(|v| v / scalar)
  }
}

impl<const R: usize, const C: usize, T: Scalar> Add for Matrix<R, C, T> {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Matrix::from_fn(|row, col| *self.at(row, col) + *rhs.at(row, col))
  }
}

impl<const R: usize, const C: usize, T: Scalar> Sub for Matrix<R, C, T> {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Matrix::from_fn(|row, col| *self.at(row, col) - *rhs.at(row, col))
  }
}

impl<const R: usize, const C: usize, T: Scalar> Neg for Matrix<R, C, T> {
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

/// The inner dimension `K` has to agree, anything else does not type check.
///
/// The right hand side is transposed first so every entry is a dot product of two
/// contiguous slices, which is what lets [`Scalar::dot`] pick a vectorized kernel.
impl<const R: usize, const K: usize, const C: usize, T: Scalar> Mul<Matrix<K, C, T>>
  for Matrix<R, K, T>
{
  type Output = Matrix<R, C, T>;

  fn mul(self, rhs: Matrix<K, C, T>) -> Matrix<R, C, T> {
    let columns = rhs.transpose();
    Matrix::from_fn(|row, col| T::dot(self.row(row), columns.row(col)))
  }
}

macro_rules! impl_scalar_lhs_ops {
  ($($S:ty),+) => {
    $(
      impl<const R: usize, const C: usize> Mul<Matrix<R, C, $S>> for $S {
        type Output = Matrix<R, C, $S>;

        fn mul(self, matrix: Matrix<R, C, $S>) -> Matrix<R, C, $S> {
          matrix.map(|v| self * v)
        }
      }
    )+
  };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, isize);
