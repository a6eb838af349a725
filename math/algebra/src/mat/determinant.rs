use smallvec::SmallVec;

use crate::*;

type Indices = SmallVec<[usize; 8]>;

fn without(indices: &[usize], skip: usize) -> Indices {
  indices.iter().copied().filter(|&i| i != skip).collect()
}

impl<const N: usize, T: Scalar> Matrix<N, N, T> {
  /// Laplace expansion along the first row, O(N!).
  ///
  /// Only meant for the small sizes this crate targets (up to about 6x6). The adjugate
  /// inverse relies on it, so it is kept as is instead of switching to a decomposition.
  pub fn determinant(&self) -> T {
    let all: Indices = (0..N).collect();
    self.laplace(&all, &all)
  }

  /// Determinant of the square submatrix picked by `rows` x `cols`. This is the same
  /// arithmetic as expanding actual minor matrices, without a type per size.
  fn laplace(&self, rows: &[usize], cols: &[usize]) -> T {
    let a = &self.data;
    match cols.len() {
      0 => T::one(),
      1 => a[rows[0]][cols[0]],
      2 => a[rows[0]][cols[0]] * a[rows[1]][cols[1]] - a[rows[1]][cols[0]] * a[rows[0]][cols[1]],
      _ => {
        let top = rows[0];
        let below = &rows[1..];
        let mut det = T::zero();
        for (i, &col) in cols.iter().enumerate() {
          let term = a[top][col] * self.laplace(below, &without(cols, col));
          det = if i % 2 == 0 { det + term } else { det - term };
        }
        det
      }
    }
  }

  /// The matrix left after deleting `row` and `col`, `M` must be `N - 1`.
  pub fn minor<const M: usize>(&self, row: usize, col: usize) -> Matrix<M, M, T> {
    const { assert!(M + 1 == N, "a minor is one smaller than its matrix") };
    debug_assert!(row < N && col < N);
    Matrix::from_fn(|r, c| {
      let r = if r < row { r } else { r + 1 };
      let c = if c < col { c } else { c + 1 };
      self.data[r][c]
    })
  }

  /// `(-1)^(row + col)` times the determinant of the minor. The minor of a 1x1 matrix is
  /// empty, its cofactor is 1.
  pub fn cofactor(&self, row: usize, col: usize) -> T {
    let all: Indices = (0..N).collect();
    let det = self.laplace(&without(&all, row), &without(&all, col));
    if (row + col) % 2 == 0 {
      det
    } else {
      -det
    }
  }

  pub fn cofactor_matrix(&self) -> Self {
    Self::from_fn(|row, col| self.cofactor(row, col))
  }

  pub fn adjugate(&self) -> Self {
    self.cofactor_matrix().transpose()
  }

  pub fn adjoint(&self) -> Self {
    self.adjugate()
  }
}
