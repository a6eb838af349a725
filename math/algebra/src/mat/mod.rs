use std::{
  fmt,
  ops::{Index, IndexMut},
};

use num_traits::{Float, One, Zero};

use crate::*;

mod augmented;
mod determinant;
mod dimension;
mod inverse;
mod ops;
mod row;
mod ser;
mod structure;

pub use augmented::*;
pub use dimension::*;
pub use inverse::*;
pub use row::*;

/// Dense row major matrix of `R` rows and `C` columns.
///
/// Every operation returns a fresh value, two matrices never share storage.
#[repr(C)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Matrix<const R: usize, const C: usize, T> {
  data: [[T; C]; R],
}

pub type Mat2<T> = Matrix<2, 2, T>;
pub type Mat3<T> = Matrix<3, 3, T>;
pub type Mat4<T> = Matrix<4, 4, T>;

unsafe impl<const R: usize, const C: usize, T: bytemuck::Zeroable> bytemuck::Zeroable
  for Matrix<R, C, T>
{
}
unsafe impl<const R: usize, const C: usize, T: bytemuck::Pod> bytemuck::Pod for Matrix<R, C, T> {}

impl<const R: usize, const C: usize, T> Matrix<R, C, T> {
  pub const ROWS: usize = R;
  pub const COLUMNS: usize = C;

  const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be positive");

  pub fn new(data: [[T; C]; R]) -> Self {
    #[allow(clippy::let_unit_value)]
    let () = Self::NON_EMPTY;
    Self { data }
  }

  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self::new(std::array::from_fn(|row| {
      std::array::from_fn(|col| f(row, col))
    }))
  }

  pub fn map<X>(self, mut f: impl FnMut(T) -> X) -> Matrix<R, C, X> {
    Matrix::new(self.data.map(|row| row.map(&mut f)))
  }

  pub const fn rows(&self) -> usize {
    R
  }

  pub const fn columns(&self) -> usize {
    C
  }

  /// `row` and `col` must be in range, this is only checked in debug builds before the
  /// regular slice indexing
  #[inline]
  pub fn at(&self, row: usize, col: usize) -> &T {
    debug_assert!(row < R && col < C, "({row}, {col}) out of {}x{}", R, C);
    &self.data[row][col]
  }

  #[inline]
  pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
    debug_assert!(row < R && col < C, "({row}, {col}) out of {}x{}", R, C);
    &mut self.data[row][col]
  }

  pub fn get(&self, row: usize, col: usize) -> Option<&T> {
    self.data.get(row).and_then(|r| r.get(col))
  }

  pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
    self.data.get_mut(row).and_then(|r| r.get_mut(col))
  }

  pub fn checked_at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
    self.get(row, col).ok_or(MatrixError::IndexOutOfBounds {
      row,
      col,
      rows: R,
      columns: C,
    })
  }

  pub fn row(&self, row: usize) -> &[T; C] {
    &self.data[row]
  }

  pub fn into_inner(self) -> [[T; C]; R] {
    self.data
  }

  /// all entries in row major order
  pub fn as_slice(&self) -> &[T] {
    self.data.as_flattened()
  }
}

impl<const R: usize, const C: usize, T: Copy> Matrix<R, C, T> {
  pub fn column(&self, col: usize) -> [T; R] {
    std::array::from_fn(|row| self.data[row][col])
  }
}

impl<const R: usize, const C: usize, T: Zero + Copy> Matrix<R, C, T> {
  pub fn zero() -> Self {
    Self::from_fn(|_, _| T::zero())
  }

  /// Build from a row major literal. Missing trailing rows or entries stay zero, a literal
  /// that does not fit the declared shape is rejected.
  pub fn try_from_rows(rows: &[&[T]]) -> Result<Self, MatrixError> {
    let longest = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if rows.len() > R || longest > C {
      return Err(MatrixError::LiteralOutOfShape {
        rows: rows.len(),
        columns: longest,
        max_rows: R,
        max_columns: C,
      });
    }

    let mut result = Self::zero();
    for (target, source) in result.data.iter_mut().zip(rows) {
      target[..source.len()].copy_from_slice(source);
    }
    Ok(result)
  }
}

impl<const R: usize, const C: usize, T: Float> Matrix<R, C, T> {
  /// true if no entry differs by more than `epsilon`
  pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
    self
      .as_slice()
      .iter()
      .zip(other.as_slice())
      .all(|(&a, &b)| (a - b).abs() <= epsilon)
  }
}

impl<const R: usize, const C: usize, T: Zero + Copy> Default for Matrix<R, C, T> {
  fn default() -> Self {
    Self::zero()
  }
}

impl<const R: usize, const C: usize, T> From<[[T; C]; R]> for Matrix<R, C, T> {
  fn from(data: [[T; C]; R]) -> Self {
    Self::new(data)
  }
}

impl<const R: usize, const C: usize, T> From<Matrix<R, C, T>> for [[T; C]; R] {
  fn from(m: Matrix<R, C, T>) -> Self {
    m.data
  }
}

impl<const R: usize, const C: usize, T> AsRef<[[T; C]; R]> for Matrix<R, C, T> {
  fn as_ref(&self) -> &[[T; C]; R] {
    &self.data
  }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for Matrix<R, C, T> {
  type Output = T;

  #[inline]
  fn index(&self, (row, col): (usize, usize)) -> &T {
    self.at(row, col)
  }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for Matrix<R, C, T> {
  #[inline]
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    self.at_mut(row, col)
  }
}

impl<const R: usize, const C: usize, T: Scalar> Zero for Matrix<R, C, T> {
  #[inline(always)]
  fn zero() -> Self {
    Matrix::zero()
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.as_slice().iter().all(|v| v.is_zero())
  }
}

impl<const N: usize, T: Scalar> One for Matrix<N, N, T> {
  #[inline(always)]
  fn one() -> Self {
    Matrix::identity()
  }
}

/// Not a stable format, only meant for eyeballing a matrix while debugging.
impl<const R: usize, const C: usize, T: fmt::Display> fmt::Display for Matrix<R, C, T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in &self.data {
      write!(f, "| ")?;
      for v in row {
        write!(f, "{v}\t")?;
      }
      writeln!(f, "|")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn construction() {
    let m = Mat2::<f32>::default();
    assert_eq!(m.into_inner(), [[0.; 2]; 2]);

    let m = Matrix::<2, 3, i32>::from_fn(|row, col| (row * 10 + col) as i32);
    assert_eq!(m.row(1), &[10, 11, 12]);
    assert_eq!(m.column(2), [2, 12]);
    assert_eq!(m.as_slice(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!((m.rows(), m.columns()), (2, 3));
  }

  #[test]
  fn partial_literal() {
    let m = Mat3::<i32>::try_from_rows(&[&[1, 2], &[3]]).unwrap();
    assert_eq!(m, Mat3::new([[1, 2, 0], [3, 0, 0], [0, 0, 0]]));

    assert_eq!(
      Matrix::<2, 2, i32>::try_from_rows(&[&[1, 2, 3]]),
      Err(MatrixError::LiteralOutOfShape {
        rows: 1,
        columns: 3,
        max_rows: 2,
        max_columns: 2
      })
    );
    assert!(Matrix::<1, 2, i32>::try_from_rows(&[&[1], &[2]]).is_err());
  }

  #[test]
  fn access() {
    let mut m = Mat2::new([[1, 2], [3, 4]]);
    assert_eq!(*m.at(1, 0), 3);
    *m.at_mut(1, 0) = 7;
    m[(0, 1)] = 9;
    assert_eq!(m.into_inner(), [[1, 9], [7, 4]]);

    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.checked_at(1, 1), Ok(&4));
    assert_eq!(
      m.checked_at(0, 5),
      Err(MatrixError::IndexOutOfBounds {
        row: 0,
        col: 5,
        rows: 2,
        columns: 2
      })
    );
  }

  #[test]
  fn copies_are_independent() {
    let a = Mat2::new([[1., 2.], [3., 4.]]);
    let mut b = a;
    b[(0, 0)] = 100.;
    assert_eq!(*a.at(0, 0), 1.);
  }

  #[test]
  fn display() {
    let m = Matrix::<2, 2, i32>::new([[1, -2], [3, 4]]);
    assert_eq!(m.to_string(), "| 1\t-2\t|\n| 3\t4\t|\n");
  }

  #[test]
  fn bytes() {
    let m = Mat2::new([[1f32, 2.], [3., 4.]]);
    let bytes: &[u8] = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 16);
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(floats, &[1., 2., 3., 4.]);
  }

  #[test]
  fn approx() {
    let a = Mat2::new([[1., 2.], [3., 4.]]);
    let b = Mat2::new([[1., 2.], [3., 4. + 1e-7]]);
    assert!(a.approx_eq(&b, 1e-6));
    assert!(!a.approx_eq(&b, 1e-8));
  }
}
