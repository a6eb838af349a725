#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
  #[error("matrix is not invertible, the determinant is zero")]
  NotInvertible,
  #[error("index ({row}, {col}) is out of bounds for a {rows}x{columns} matrix")]
  IndexOutOfBounds {
    row: usize,
    col: usize,
    rows: usize,
    columns: usize,
  },
  #[error("literal of {rows} rows and up to {columns} columns does not fit a {max_rows}x{max_columns} matrix")]
  LiteralOutOfShape {
    rows: usize,
    columns: usize,
    max_rows: usize,
    max_columns: usize,
  },
}
