use std::ops::{Index, IndexMut};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

/// Heap allocated vector of scalars addressed by non negative positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
  values: SlotVec<T>,
}

impl<T> Default for Vector<T> {
  fn default() -> Self {
    Self {
      values: Default::default(),
    }
  }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
  fn from(values: [T; N]) -> Self {
    values.into_iter().collect()
  }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      values: iter.into_iter().collect(),
    }
  }
}

impl<T: Scalar> Vector<T> {
  pub fn new(values: Vec<T>) -> Self {
    values.into_iter().collect()
  }

  pub fn try_from_keyed(raw: KeyedValues<T>) -> Result<Self, MatrixError> {
    let mut values = SlotVec::default();
    for (position, v) in checked_values(raw)? {
      values.insert(position, v);
    }
    Ok(Self { values })
  }

  pub fn count(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn contains(&self, position: usize) -> bool {
    self.values.contains(position)
  }

  pub fn get(&self, position: usize) -> Result<T, MatrixError> {
    self
      .values
      .try_get(position)
      .copied()
      .ok_or_else(|| MatrixError::OutOfRange(vec![position]))
  }

  /// Insert or overwrite the value at `position`, negative positions are rejected.
  pub fn set<K>(&mut self, position: K, value: T) -> Result<&mut Self, MatrixError>
  where
    K: TryInto<usize> + ToString + Copy,
  {
    self.values.insert(checked_position(position)?, value);
    Ok(self)
  }

  /// Append after the highest populated position.
  pub fn push(&mut self, value: T) -> &mut Self {
    self.values.push(value);
    self
  }

  pub fn remove(&mut self, position: usize) -> Option<T> {
    self.values.remove(position)
  }

  pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
    self.values.iter().map(|(p, v)| (p, *v))
  }

  pub fn to_vec(&self) -> Vec<T> {
    self.values.values().copied().collect()
  }

  pub fn to_keyed(&self) -> KeyedValues<T> {
    self.iter().map(|(p, v)| (p as i64, v)).collect()
  }

  /// The vector as the only column of a matrix: `[[v0, v1, ...]]`.
  pub fn to_row_matrix(&self) -> Matrix<T> {
    let mut grid = Grid::default();
    grid.push_column(self.values.clone());
    Matrix::from_grid(grid)
  }

  /// One column per position: `[[v0], [v1], ...]`.
  pub fn to_column_matrix(&self) -> Matrix<T> {
    let mut m = Matrix::new();
    for (position, v) in self.iter() {
      m.set(position, 0, v);
    }
    m
  }
}

impl<T: Scalar> Index<usize> for Vector<T> {
  type Output = T;

  fn index(&self, position: usize) -> &T {
    match self.values.try_get(position) {
      Some(v) => v,
      None => panic!("vector position {position} is out of range"),
    }
  }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
  fn index_mut(&mut self, position: usize) -> &mut T {
    match self.values.try_get_mut(position) {
      Some(v) => v,
      None => panic!("vector position {position} is out of range"),
    }
  }
}

impl<T: Scalar + Serialize> Serialize for Vector<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.to_keyed().serialize(serializer)
  }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Vector<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Self::try_from_keyed(KeyedValues::deserialize(deserializer)?).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn get_set_push() {
    let mut v = Vector::new(vec![1., 2.]);
    assert_eq!(v.count(), 2);
    assert_eq!(v.get(1), Ok(2.));
    assert_eq!(v.get(2), Err(MatrixError::OutOfRange(vec![2])));

    v.push(3.).set(5, 6.).unwrap();
    assert_eq!(v.count(), 4);
    assert_eq!(v.get(2), Ok(3.));
    assert!(!v.contains(4));

    v.push(7.);
    assert_eq!(v.get(6), Ok(7.));

    assert_eq!(v.set(-1, 0.).unwrap_err(), MatrixError::InvalidKey("-1".into()));
    assert_eq!(v.count(), 5);
  }

  #[test]
  fn index_read_write() {
    let mut v = Vector::from([1, 2, 3]);
    v[1] += 10;
    assert_eq!(v[1], 12);
    assert_eq!(v.remove(0), Some(1));
    assert!(!v.contains(0));
    assert_eq!(v.to_vec(), vec![12, 3]);
  }

  #[test]
  #[should_panic]
  fn index_out_of_range() {
    let v = Vector::from([1, 2, 3]);
    let _value = v[3];
  }

  #[test]
  fn keyed() {
    let mut raw = KeyedValues::new();
    raw.insert(1, 3);
    raw.insert(0, 1);
    let v = Vector::try_from_keyed(raw.clone()).unwrap();
    assert_eq!(v, Vector::from([1, 3]));
    assert_eq!(v.to_keyed(), raw);

    raw.insert(-4, 1);
    assert_eq!(
      Vector::try_from_keyed(raw).unwrap_err(),
      MatrixError::InvalidKey("-4".into())
    );

    let v: Vector<f64> = serde_json::from_str(r#"{"0": 1.5, "1": 2.5}"#).unwrap();
    assert_eq!(v, Vector::from([1.5, 2.5]));
    assert!(serde_json::from_str::<Vector<f64>>(r#"{"-1": 1.5}"#).is_err());
  }

  #[test]
  fn keyed_positions_must_be_dense() {
    let mut raw = KeyedValues::new();
    raw.insert(0, 1.);
    raw.insert(2, 3.);
    assert_eq!(
      Vector::try_from_keyed(raw).unwrap_err(),
      MatrixError::InvalidKey("2".into())
    );

    // rejected before any storage is reserved for the position
    let err = serde_json::from_str::<Vector<f64>>(r#"{"4611686018427387904": 1.5}"#).unwrap_err();
    assert!(err.to_string().contains("4611686018427387904"));
    let err =
      serde_json::from_str::<Matrix<f64>>(r#"{"0": {"0": 1.0}, "9223372036854775807": {"0": 1.0}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("9223372036854775807"));
  }

  #[test]
  fn matrix_embeddings() {
    let v = Vector::from([1, 2, 3]);

    let row = v.to_row_matrix();
    assert_eq!(row, Matrix::from([[1, 2, 3]]));
    assert_eq!(row.width(), 1);
    assert_eq!(row.height(), Ok(3));

    let column = v.to_column_matrix();
    assert_eq!(column, Matrix::from([[1], [2], [3]]));
    assert_eq!(column.width(), 3);
    assert_eq!(column.height(), Ok(1));
  }
}
