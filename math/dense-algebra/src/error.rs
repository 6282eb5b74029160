#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
  #[error("Position of value must be integer, 0 or higher, got {0}")]
  InvalidKey(String),
  #[error("Impossible to get the shape of matrix: {0}")]
  StructuralError(&'static str),
  #[error("Matrix must be a square, got {width}x{height}")]
  NotSquare { width: usize, height: usize },
  #[error("Matrices are not the same size: {left:?} and {right:?}")]
  SizeMismatch {
    left: (usize, usize),
    right: (usize, usize),
  },
  #[error("Matrices can't be produced: inner size {inner} against width {other_width}")]
  ProductIncompatible { inner: usize, other_width: usize },
  #[error("Matrix {width}x{height} can't be produced on a vector of length {vector_len} as row, width must be 1 and height equal to vector length")]
  DimensionMismatch {
    width: usize,
    height: usize,
    vector_len: usize,
  },
  #[error("Can't invert matrix with zero determinant")]
  SingularMatrix,
  #[error("Position {0:?} is out of range")]
  OutOfRange(Vec<usize>),
}
