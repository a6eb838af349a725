use crate::*;

/// The elementary row operations, each producing a new value instead of mutating in
/// place, so every step of an elimination can be kept around and inspected.
pub trait RowOperations<T: Scalar>: Sized {
  const ROWS: usize;
  const COLUMNS: usize;

  fn entry(&self, row: usize, col: usize) -> T;

  /// every entry of `row` divided by `divisor`, division by zero follows `T`
  #[must_use]
  fn divide_row(&self, row: usize, divisor: T) -> Self;

  /// `dest[c] = dest[c] + multiplier * src[c]` for every column `c`
  #[must_use]
  fn add_row_to_row(&self, dest: usize, multiplier: T, src: usize) -> Self;

  #[must_use]
  fn swap_rows(&self, a: usize, b: usize) -> Self;
}

impl<const R: usize, const C: usize, T: Scalar> Matrix<R, C, T> {
  #[must_use]
  pub fn divide_row(&self, row: usize, divisor: T) -> Self {
    let mut result = *self;
    for v in result.data[row].iter_mut() {
      *v = *v / divisor;
    }
    result
  }

  #[must_use]
  pub fn add_row_to_row(&self, dest: usize, multiplier: T, src: usize) -> Self {
    let mut result = *self;
    T::add_scaled(&mut result.data[dest], multiplier, &self.data[src]);
    result
  }

  #[must_use]
  pub fn swap_rows(&self, a: usize, b: usize) -> Self {
    let mut result = *self;
    result.data.swap(a, b);
    result
  }
}

impl<const R: usize, const C: usize, T: Scalar> RowOperations<T> for Matrix<R, C, T> {
  const ROWS: usize = R;
  const COLUMNS: usize = C;

  #[inline]
  fn entry(&self, row: usize, col: usize) -> T {
    *self.at(row, col)
  }
  fn divide_row(&self, row: usize, divisor: T) -> Self {
    Matrix::divide_row(self, row, divisor)
  }
  fn add_row_to_row(&self, dest: usize, multiplier: T, src: usize) -> Self {
    Matrix::add_row_to_row(self, dest, multiplier, src)
  }
  fn swap_rows(&self, a: usize, b: usize) -> Self {
    Matrix::swap_rows(self, a, b)
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn divide_row() {
    let m = Mat2::<f64>::new([[2., 4.], [3., 5.]]);
    let divided = m.divide_row(0, 2.);
    assert_eq!(divided, Mat2::new([[1., 2.], [3., 5.]]));
    // the receiver is left alone
    assert_eq!(m.row(0), &[2., 4.]);

    let by_zero = m.divide_row(1, 0.);
    assert!(by_zero.row(1).iter().all(|v| v.is_infinite()));
  }

  #[test]
  fn add_row_to_row() {
    let m = Mat3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let reduced = m.add_row_to_row(1, -4, 0).add_row_to_row(2, -7, 0);
    assert_eq!(reduced.column(0), [1, 0, 0]);
    assert_eq!(reduced.row(1), &[0, -3, -6]);
    assert_eq!(reduced.row(2), &[0, -6, -12]);

    // a row may be added to itself
    assert_eq!(m.add_row_to_row(0, 1, 0).row(0), &[2, 4, 6]);
  }

  #[test]
  fn wide_rows() {
    // wider than one four lane chunk, the tail must be updated as well
    let m = Matrix::<2, 6, f32>::new([[1., 1., 1., 1., 1., 1.], [1., 2., 3., 4., 5., 6.]]);
    let r = m.add_row_to_row(0, 2., 1);
    assert_eq!(r.row(0), &[3., 5., 7., 9., 11., 13.]);
  }

  #[test]
  fn swap_rows() {
    let m = Matrix::<2, 3, i32>::new([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.swap_rows(0, 1).into_inner(), [[4, 5, 6], [1, 2, 3]]);
    assert_eq!(m.swap_rows(1, 1), m);
  }
}
