use std::{fmt::Debug, sync::OnceLock};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

mod arithmetic;
mod determinant;
mod structure;

pub use determinant::*;

/// A dense matrix of [`Scalar`] cells addressed by `(x, y)`.
///
/// Every operation returns a new, independently owned matrix, except [`Matrix::set`] which
/// mutates in place. The last computed determinant is cached; the cache is dropped by `set`
/// and never carried over by `clone`. Shared references may be read from several threads at
/// once, the first finished determinant fills the cache.
pub struct Matrix<T> {
  grid: Grid<T>,
  cached_determinant: OnceLock<T>,
}

impl<T> Default for Matrix<T> {
  fn default() -> Self {
    Self {
      grid: Default::default(),
      cached_determinant: OnceLock::new(),
    }
  }
}

impl<T: Scalar> Clone for Matrix<T> {
  fn clone(&self) -> Self {
    Self::from_grid(self.grid.clone())
  }
}

impl<T: Scalar> PartialEq for Matrix<T> {
  fn eq(&self, other: &Self) -> bool {
    self.same(other)
  }
}

impl<T: Scalar> Debug for Matrix<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Matrix")
      .field("columns", &self.to_keyed())
      .field("cached_determinant", &self.cached_determinant.get())
      .finish()
  }
}

impl<T: Scalar, const W: usize, const H: usize> From<[[T; H]; W]> for Matrix<T> {
  fn from(columns: [[T; H]; W]) -> Self {
    let mut grid = Grid::default();
    for column in columns {
      grid.push_column(column.into_iter().collect());
    }
    Self::from_grid(grid)
  }
}

impl<T: Scalar> Matrix<T> {
  /// An empty matrix, to be filled by [`Matrix::set`].
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn from_grid(grid: Grid<T>) -> Self {
    Self {
      grid,
      cached_determinant: OnceLock::new(),
    }
  }

  /// Build from outer columns, every column must have the same length.
  pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, MatrixError> {
    if let Some(first) = columns.first() {
      let height = first.len();
      if columns.iter().any(|c| c.len() != height) {
        return Err(MatrixError::StructuralError("columns have different length"));
      }
    }

    let mut grid = Grid::default();
    for column in columns {
      grid.push_column(column.into_iter().collect());
    }
    Ok(Self::from_grid(grid))
  }

  /// Build from the raw keyed form. All keys are checked before any cell is stored.
  pub fn try_from_keyed(raw: KeyedCells<T>) -> Result<Self, MatrixError> {
    let mut grid = Grid::default();
    for (x, column) in checked_cells(raw)? {
      let target = grid.column_mut(x);
      for (y, v) in column {
        target.insert(y, v);
      }
    }
    Ok(Self::from_grid(grid))
  }

  pub fn zeros(width: usize, height: usize) -> Self {
    let mut grid = Grid::default();
    for _ in 0..width {
      grid.push_column((0..height).map(|_| T::zero()).collect());
    }
    Self::from_grid(grid)
  }

  pub fn identity(n: usize) -> Self {
    let mut m = Self::zeros(n, n);
    for i in 0..n {
      m.set(i, i, T::one());
    }
    m
  }

  /// Populated cell values per populated column, positions are dropped.
  pub fn to_columns(&self) -> Vec<Vec<T>> {
    self
      .grid
      .columns()
      .map(|(_, column)| column.values().copied().collect())
      .collect()
  }

  pub fn to_keyed(&self) -> KeyedCells<T> {
    self
      .grid
      .columns()
      .map(|(x, column)| {
        let column = column.iter().map(|(y, v)| (y as i64, *v)).collect();
        (x as i64, column)
      })
      .collect()
  }

  /// Returns a copy with `value` appended after the last cell of column `x`.
  #[must_use]
  pub fn insert_into_row(&self, x: usize, value: T) -> Self {
    let mut grid = self.grid.clone();
    grid.column_mut(x).push(value);
    Self::from_grid(grid)
  }
}

impl<T: Scalar + Serialize> Serialize for Matrix<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.to_keyed().serialize(serializer)
  }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Self::try_from_keyed(KeyedCells::deserialize(deserializer)?).map_err(de::Error::custom)
  }
}
