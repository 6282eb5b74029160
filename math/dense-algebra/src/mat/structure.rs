use crate::*;

impl<T: Scalar> Matrix<T> {
  /// Count of populated columns.
  pub fn width(&self) -> usize {
    self.grid.width()
  }

  /// Count of cells in column 0, fails when column 0 does not exist.
  pub fn height(&self) -> Result<usize, MatrixError> {
    self.grid.height()
  }

  /// Width and height, an empty matrix is 0x0 instead of an error.
  pub(crate) fn extent(&self) -> Result<(usize, usize), MatrixError> {
    if self.width() == 0 {
      return Ok((0, 0));
    }
    Ok((self.width(), self.height()?))
  }

  pub fn is_square(&self) -> Result<bool, MatrixError> {
    Ok(self.width() == self.height()?)
  }

  pub(crate) fn square_dimension(&self) -> Result<usize, MatrixError> {
    let (width, height) = (self.width(), self.height()?);
    if width != height {
      return Err(MatrixError::NotSquare { width, height });
    }
    Ok(width)
  }

  pub fn get(&self, x: usize, y: usize) -> Result<T, MatrixError> {
    self.grid.get(x, y)
  }

  /// Insert or overwrite one cell, creating column `x` when missing.
  ///
  /// Unlike every other operation this mutates the matrix in place, and drops the cached
  /// determinant.
  pub fn set(&mut self, x: usize, y: usize, value: T) -> &mut Self {
    self.grid.set(x, y, value);
    self.cached_determinant.take();
    self
  }

  /// The cells stored under outer index `x`.
  pub fn get_row(&self, x: usize) -> Result<Vec<T>, MatrixError> {
    self
      .grid
      .column(x)
      .map(|column| column.values().copied().collect())
      .ok_or_else(|| MatrixError::OutOfRange(vec![x]))
  }

  /// The cell at inner index `y` of every column.
  pub fn get_column(&self, y: usize) -> Result<Vec<T>, MatrixError> {
    self
      .grid
      .columns()
      .map(|(x, _)| self.get(x, y))
      .collect()
  }

  pub fn transpose(&self) -> Result<Self, MatrixError> {
    let (width, height) = self.extent()?;
    let mut res = Matrix::new();
    for x in 0..width {
      for y in 0..height {
        res.set(y, x, self.get(x, y)?);
      }
    }
    Ok(res)
  }

  /// New matrix of the same layout where every cell is `f(cell, x, y)`.
  pub fn each(&self, mut f: impl FnMut(T, usize, usize) -> T) -> Self {
    Self::from_grid(self.grid.map(|x, y, v| f(v, x, y)))
  }

  pub(crate) fn try_each(
    &self,
    mut f: impl FnMut(T, usize, usize) -> Result<T, MatrixError>,
  ) -> Result<Self, MatrixError> {
    let mut grid = Grid::default();
    for (x, column) in self.grid.columns() {
      let target = grid.column_mut(x);
      for (y, v) in column.iter() {
        target.insert(y, f(*v, x, y)?);
      }
    }
    Ok(Self::from_grid(grid))
  }

  /// Deep equality of the cell grid, the determinant cache is ignored.
  pub fn same(&self, other: &Self) -> bool {
    self.grid == other.grid
  }

  /// Cellwise equality within `epsilon`.
  pub fn approx_same(&self, other: &Self, epsilon: T) -> bool {
    if self.width() != other.width() {
      return false;
    }
    self.grid.columns().all(|(x, column)| {
      other.grid.column(x).is_some_and(|other_column| {
        other_column.len() == column.len()
          && column.iter().all(|(y, v)| {
            other_column
              .try_get(y)
              .is_some_and(|o| (*v - *o).abs() <= epsilon)
          })
      })
    })
  }
}
