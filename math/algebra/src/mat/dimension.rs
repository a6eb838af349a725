use crate::*;

/// Shape independent view of a square matrix, for code generic over the order.
pub trait SquareMatrix<T: Scalar>: Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// `None` when the determinant is zero
  #[must_use]
  fn inverse(&self) -> Option<Self>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or(Self::identity())
  }

  #[must_use]
  fn det(&self) -> T;
}

impl<const N: usize, T: Scalar> SquareMatrix<T> for Matrix<N, N, T> {
  fn identity() -> Self {
    Matrix::identity()
  }
  fn transpose(&self) -> Self {
    Matrix::transpose(self)
  }
  fn inverse(&self) -> Option<Self> {
    self.try_inverse().ok()
  }
  fn det(&self) -> T {
    self.determinant()
  }
}

#[test]
fn generic_over_order() {
  fn normal_matrix<T: Scalar, M: SquareMatrix<T>>(m: &M) -> M {
    m.inverse_or_identity().transpose()
  }

  let m = Mat3::new([[2., 0., 0.], [0., 4., 0.], [1., 0., 1.]]);
  assert_eq!(
    normal_matrix(&m),
    Mat3::new([[0.5, 0., -0.5], [0., 0.25, 0.], [0., 0., 1.]])
  );

  let singular = Mat2::new([[1., 2.], [2., 4.]]);
  assert_eq!(singular.inverse(), None);
  assert_eq!(normal_matrix(&singular), Mat2::identity());
  assert_eq!(singular.det(), 0.);
}
