use num_traits::{One, Zero};

use crate::*;

impl<const R: usize, const C: usize, T: Copy> Matrix<R, C, T> {
  #[must_use]
  pub fn transpose(&self) -> Matrix<C, R, T> {
    Matrix::from_fn(|row, col| self.data[col][row])
  }

  /// Extract the `NR x NC` window whose top left entry is at (`ROW`, `COL`).
  pub fn sub_matrix<const ROW: usize, const COL: usize, const NR: usize, const NC: usize>(
    &self,
  ) -> Matrix<NR, NC, T> {
    const {
      assert!(ROW + NR <= R && COL + NC <= C, "window exceeds the matrix");
    };
    Matrix::from_fn(|row, col| self.data[ROW + row][COL + col])
  }
}

impl<const R: usize, const C: usize, T: Zero + Copy> Matrix<R, C, T> {
  /// Copy the overlapping top left part into an `NR x NC` matrix, anything outside the
  /// original extent is zero.
  #[must_use]
  pub fn resize<const NR: usize, const NC: usize>(&self) -> Matrix<NR, NC, T> {
    let mut result = Matrix::<NR, NC, T>::zero();
    for row in 0..NR.min(R) {
      for col in 0..NC.min(C) {
        result.data[row][col] = self.data[row][col];
      }
    }
    result
  }
}

impl<const N: usize, T: Zero + One + Copy> Matrix<N, N, T> {
  pub fn identity() -> Self {
    Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
  }
}
