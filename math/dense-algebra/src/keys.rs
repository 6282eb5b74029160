use std::collections::BTreeMap;

use crate::*;

/// Raw nested input of a matrix: outer key to inner key to cell.
pub type KeyedCells<T> = BTreeMap<i64, BTreeMap<i64, T>>;
/// Raw input of a vector: position to value.
pub type KeyedValues<T> = BTreeMap<i64, T>;

/// Accept any integer key that is 0 or higher.
pub fn checked_position<K>(key: K) -> Result<usize, MatrixError>
where
  K: TryInto<usize> + ToString + Copy,
{
  key
    .try_into()
    .map_err(|_| MatrixError::InvalidKey(key.to_string()))
}

/// Validate every key at every level before anything is stored.
pub(crate) fn checked_cells<T>(
  raw: KeyedCells<T>,
) -> Result<Vec<(usize, Vec<(usize, T)>)>, MatrixError> {
  let count = raw.len();
  raw
    .into_iter()
    .map(|(x, column)| Ok((dense_position(x, count)?, checked_values(column)?)))
    .collect()
}

/// Keys of one level must be exactly `0..raw.len()`.
pub(crate) fn checked_values<T>(raw: KeyedValues<T>) -> Result<Vec<(usize, T)>, MatrixError> {
  let count = raw.len();
  raw
    .into_iter()
    .map(|(position, v)| Ok((dense_position(position, count)?, v)))
    .collect()
}

// distinct non negative keys all below `count` cover `0..count`
fn dense_position(key: i64, count: usize) -> Result<usize, MatrixError> {
  let position = checked_position(key)?;
  if position >= count {
    return Err(MatrixError::InvalidKey(key.to_string()));
  }
  Ok(position)
}

#[test]
fn negative_keys_rejected() {
  assert_eq!(checked_position(3_i64), Ok(3));
  assert_eq!(checked_position(0_i32), Ok(0));
  assert_eq!(
    checked_position(-1_i64),
    Err(MatrixError::InvalidKey("-1".into()))
  );

  let mut raw: KeyedCells<f64> = BTreeMap::new();
  raw.entry(0).or_default().insert(0, 1.);
  raw.entry(1).or_default().insert(-2, 1.);
  assert_eq!(
    checked_cells(raw).unwrap_err(),
    MatrixError::InvalidKey("-2".into())
  );
}

#[test]
fn keys_must_be_dense() {
  let raw: KeyedValues<i32> = [(1, 10), (0, 5)].into_iter().collect();
  assert_eq!(checked_values(raw), Ok(vec![(0, 5), (1, 10)]));

  let gap: KeyedValues<i32> = [(0, 5), (2, 10)].into_iter().collect();
  assert_eq!(
    checked_values(gap),
    Err(MatrixError::InvalidKey("2".into()))
  );

  let huge: KeyedValues<i32> = [(i64::MAX, 1)].into_iter().collect();
  assert_eq!(
    checked_values(huge),
    Err(MatrixError::InvalidKey(i64::MAX.to_string()))
  );

  let mut raw: KeyedCells<i32> = BTreeMap::new();
  raw.entry(0).or_default().insert(0, 1);
  raw.entry(3).or_default().insert(0, 1);
  assert_eq!(
    checked_cells(raw).unwrap_err(),
    MatrixError::InvalidKey("3".into())
  );
}
