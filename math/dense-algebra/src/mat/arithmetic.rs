use std::ops::{Mul, Neg};

use crate::*;

impl<T: Scalar> Matrix<T> {
  /// Equal width and equal height. A matrix whose height can not be determined, an empty one
  /// included, is never the same size as anything.
  pub fn same_size(&self, other: &Self) -> bool {
    matches!((self.size(), other.size()), (Ok(a), Ok(b)) if a == b)
  }

  fn size(&self) -> Result<(usize, usize), MatrixError> {
    Ok((self.width(), self.height()?))
  }

  fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
    let (left, right) = (self.size()?, other.size()?);
    if left != right {
      return Err(MatrixError::SizeMismatch { left, right });
    }
    Ok(())
  }

  /// Cellwise sum. Fails with [`MatrixError::StructuralError`] when either operand is empty.
  pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
    self.check_same_size(other)?;
    self.try_each(|v, x, y| Ok(v + other.get(x, y)?))
  }

  pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
    self.check_same_size(other)?;
    self.try_each(|v, x, y| Ok(v - other.get(x, y)?))
  }

  #[must_use]
  pub fn product_on_scalar(&self, k: T) -> Self {
    self.each(|v, _, _| v * k)
  }

  /// `result(x, y) = Σ self(x, i) * other(i, y)` for `i` in `0..self.height`.
  ///
  /// The height of `self` must equal the width of `other`. The result is `self.width` wide and
  /// `other.height` high.
  pub fn product_on_matrix(&self, other: &Self) -> Result<Self, MatrixError> {
    let (width, other_width) = (self.width(), other.width());
    if width == 0 || other_width == 0 {
      return Err(MatrixError::ProductIncompatible {
        inner: self.height().unwrap_or(0),
        other_width,
      });
    }

    let inner = self.height()?;
    if inner != other_width {
      return Err(MatrixError::ProductIncompatible { inner, other_width });
    }
    let other_height = other.height()?;

    let mut res = Matrix::new();
    for x in 0..width {
      for y in 0..other_height {
        let mut sum = T::zero();
        for i in 0..inner {
          sum = sum + self.get(x, i)? * other.get(i, y)?;
        }
        res.set(x, y, sum);
      }
    }
    Ok(res)
  }

  /// Treat the matrix as a linear operator: `result[x] = Σ self(x, y) * vector[y]`.
  ///
  /// The length is not checked upfront, a missing vector position fails with
  /// [`MatrixError::OutOfRange`].
  pub fn product_on_vector_as_column(&self, vector: &Vector<T>) -> Result<Vector<T>, MatrixError> {
    let mut res = Vector::default();
    for (x, column) in self.grid.columns() {
      let mut sum = T::zero();
      for (y, v) in column.iter() {
        sum = sum + *v * vector.get(y)?;
      }
      res.set(x, sum)?;
    }
    Ok(res)
  }

  /// [`Matrix::product_on_matrix`] against [`Vector::to_row_matrix`], after checking the matrix
  /// is a single column as long as the vector.
  ///
  /// The row layout of the vector is one column wide, so past the checks only a vector of
  /// length 1 passes the inner size check, longer ones fail with
  /// [`MatrixError::ProductIncompatible`].
  pub fn product_on_vector_as_row(&self, vector: &Vector<T>) -> Result<Self, MatrixError> {
    let (width, height) = (self.width(), self.height()?);
    if height != vector.count() || width != 1 {
      return Err(MatrixError::DimensionMismatch {
        width,
        height,
        vector_len: vector.count(),
      });
    }
    self.product_on_matrix(&vector.to_row_matrix())
  }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
  type Output = Matrix<T>;

  fn mul(self, k: T) -> Matrix<T> {
    self.product_on_scalar(k)
  }
}

impl<T: Scalar> Neg for &Matrix<T> {
  type Output = Matrix<T>;

  fn neg(self) -> Matrix<T> {
    self.each(|v, _, _| -v)
  }
}
