use crate::*;

/// Gauss-Jordan reduction of the leading square block to the identity.
///
/// Forward pass: each pivot row is divided by its pivot (unless it already is one) and the
/// pivot column is cleared below it. Backward pass: the pivot columns are cleared above
/// the diagonal, left to right. A pivot that is exactly zero is exchanged with the first
/// row below holding a nonzero entry in that column; nothing else is reordered. When no
/// such row exists the matrix is singular and the division goes ahead, producing whatever
/// `T` produces for a division by zero.
pub fn gauss_jordan<T: Scalar, M: RowOperations<T>>(mut m: M) -> M {
  let pivots = M::ROWS.min(M::COLUMNS);

  for col in 0..pivots {
    if m.entry(col, col) == T::zero() {
      if let Some(row) = (col + 1..M::ROWS).find(|&row| m.entry(row, col) != T::zero()) {
        log::trace!("zero pivot in column {col}, exchanging rows {col} and {row}");
        m = m.swap_rows(col, row);
      }
    }

    let pivot = m.entry(col, col);
    log::trace!("pivot {col}: {pivot:?}");
    if pivot != T::one() {
      m = m.divide_row(col, pivot);
    }

    for row in col + 1..M::ROWS {
      let factor = m.entry(row, col);
      if factor != T::zero() {
        m = m.add_row_to_row(row, -factor, col);
      }
    }
  }

  for col in 1..pivots {
    for row in 0..col {
      let factor = m.entry(row, col);
      if factor != T::zero() {
        m = m.add_row_to_row(row, -factor, col);
      }
    }
  }

  m
}

/// Both inversions expect an invertible matrix. Neither checks the determinant, a singular
/// input yields infinities or NaN for floats and division artifacts (or a panic on a zero
/// divisor) for integers. Use [`Matrix::try_inverse`] to get an error instead.
impl<const N: usize, T: Scalar> Matrix<N, N, T> {
  /// `[self | I]` reduced to `[I | self^-1]`.
  pub fn gaussian_inverse(&self) -> Self {
    gauss_jordan(Augmented::new(*self, Self::identity())).right
  }

  /// `adjugate / determinant`, asymptotically much slower than [`Self::gaussian_inverse`],
  /// kept for cross checking.
  pub fn adjugate_inverse(&self) -> Self {
    self.adjugate() * (T::one() / self.determinant())
  }

  pub fn try_inverse(&self) -> Result<Self, MatrixError> {
    if self.determinant() == T::zero() {
      log::warn!("refusing to invert a singular {}x{} matrix", N, N);
      return Err(MatrixError::NotInvertible);
    }
    Ok(self.gaussian_inverse())
  }
}
