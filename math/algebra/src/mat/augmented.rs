use crate::*;

/// A matrix augmented on the right with another one of the same row count, `[left | right]`.
///
/// The halves stay separately typed because the combined width `C + C2` can not be
/// spelled as a const generic argument. Row operations act on the full combined row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Augmented<const R: usize, const C: usize, const C2: usize, T> {
  pub left: Matrix<R, C, T>,
  pub right: Matrix<R, C2, T>,
}

impl<const R: usize, const C: usize, const C2: usize, T> Augmented<R, C, C2, T> {
  pub fn new(left: Matrix<R, C, T>, right: Matrix<R, C2, T>) -> Self {
    Self { left, right }
  }

  pub fn into_parts(self) -> (Matrix<R, C, T>, Matrix<R, C2, T>) {
    (self.left, self.right)
  }
}

impl<const R: usize, const C: usize, const C2: usize, T: Scalar> Augmented<R, C, C2, T> {
  /// Flatten into a single `R x W` matrix, `W` must be `C + C2`.
  pub fn to_matrix<const W: usize>(&self) -> Matrix<R, W, T> {
    const { assert!(W == C + C2, "augmented width must be the sum of both halves") };
    Matrix::from_fn(|row, col| self.entry(row, col))
  }
}

impl<const R: usize, const C: usize, const C2: usize, T: Scalar> RowOperations<T>
  for Augmented<R, C, C2, T>
{
  const ROWS: usize = R;
  const COLUMNS: usize = C + C2;

  #[inline]
  fn entry(&self, row: usize, col: usize) -> T {
    if col < C {
      *self.left.at(row, col)
    } else {
      *self.right.at(row, col - C)
    }
  }

  fn divide_row(&self, row: usize, divisor: T) -> Self {
    Self::new(
      self.left.divide_row(row, divisor),
      self.right.divide_row(row, divisor),
    )
  }

  fn add_row_to_row(&self, dest: usize, multiplier: T, src: usize) -> Self {
    Self::new(
      self.left.add_row_to_row(dest, multiplier, src),
      self.right.add_row_to_row(dest, multiplier, src),
    )
  }

  fn swap_rows(&self, a: usize, b: usize) -> Self {
    Self::new(self.left.swap_rows(a, b), self.right.swap_rows(a, b))
  }
}

impl<const R: usize, const C: usize, T: Scalar> Matrix<R, C, T> {
  /// `[self | other]` as one `R x W` matrix, `W` must be `C + C2`.
  pub fn augment<const C2: usize, const W: usize>(
    &self,
    other: &Matrix<R, C2, T>,
  ) -> Matrix<R, W, T> {
    Augmented::new(*self, *other).to_matrix()
  }

  /// `[self | 0]` widened to `W` columns.
  pub fn augment_zeroed<const W: usize>(&self) -> Matrix<R, W, T> {
    const { assert!(W >= C, "augmented width can not be smaller than the matrix") };
    self.resize()
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn augment_identity_with_itself() {
    let id = Mat3::<f64>::identity();
    let wide: Matrix<3, 6, f64> = id.augment(&id);

    let left: Mat3<f64> = wide.sub_matrix::<0, 0, 3, 3>();
    let right: Mat3<f64> = wide.sub_matrix::<0, 3, 3, 3>();
    assert_eq!(left, id);
    assert_eq!(right, id);
  }

  #[test]
  fn augment_rectangular() {
    let a = Matrix::<2, 1, i32>::new([[1], [2]]);
    let b = Matrix::<2, 2, i32>::new([[3, 4], [5, 6]]);
    let c: Matrix<2, 3, i32> = a.augment(&b);
    assert_eq!(c.into_inner(), [[1, 3, 4], [2, 5, 6]]);

    let z: Matrix<2, 4, i32> = a.augment_zeroed();
    assert_eq!(z.into_inner(), [[1, 0, 0, 0], [2, 0, 0, 0]]);
  }

  #[test]
  fn row_operations_span_both_halves() {
    let pair = Augmented::new(
      Mat2::new([[2., 4.], [1., 3.]]),
      Mat2::<f64>::identity(),
    );
    assert_eq!(<Augmented<2, 2, 2, f64> as RowOperations<f64>>::COLUMNS, 4);
    assert_eq!(pair.entry(1, 2), 0.);
    assert_eq!(pair.entry(0, 2), 1.);

    let step = pair.divide_row(0, 2.).add_row_to_row(1, -1., 0);
    let flat: Matrix<2, 4, f64> = step.to_matrix();
    assert_eq!(flat.into_inner(), [[1., 2., 0.5, 0.], [0., 1., -0.5, 1.]]);

    // the same steps on the flattened matrix give the same result
    let direct = pair
      .to_matrix::<4>()
      .divide_row(0, 2.)
      .add_row_to_row(1, -1., 0);
    assert_eq!(direct, flat);

    let (left, right) = step.swap_rows(0, 1).into_parts();
    assert_eq!(left.row(0), &[0., 1.]);
    assert_eq!(right.row(0), &[-0.5, 1.]);
  }
}
