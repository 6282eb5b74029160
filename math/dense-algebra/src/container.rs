use crate::*;

/// Index addressed storage that keeps the position of every value.
///
/// Positions may be populated out of order, [`SlotVec::len`] only counts the populated ones.
#[derive(Clone, Debug)]
pub struct SlotVec<T> {
  storage: Vec<Option<T>>,
  len: usize,
  end: usize,
}

impl<T> Default for SlotVec<T> {
  fn default() -> Self {
    Self {
      storage: Default::default(),
      len: 0,
      end: 0,
    }
  }
}

impl<T: PartialEq> PartialEq for SlotVec<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}
impl<T: Eq> Eq for SlotVec<T> {}

impl<T> FromIterator<T> for SlotVec<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let storage: Vec<_> = iter.into_iter().map(Some).collect();
    Self {
      len: storage.len(),
      end: storage.len(),
      storage,
    }
  }
}

impl<T> SlotVec<T> {
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// One past the highest position ever populated, removals do not lower it.
  pub fn end(&self) -> usize {
    self.end
  }

  /// Make `index` addressable. Like `Vec`, panics when the slots can not be allocated.
  fn grow_to(&mut self, index: usize) {
    let required = index.checked_add(1).unwrap_or(usize::MAX);
    if required > self.storage.len() {
      self.storage.resize_with(required, || None);
    }
    self.end = self.end.max(required);
  }

  pub fn insert(&mut self, index: usize, data: T) {
    self.grow_to(index);
    if self.storage[index].is_none() {
      self.len += 1;
    }
    self.storage[index] = Some(data);
  }

  pub fn push(&mut self, data: T) {
    self.insert(self.end(), data)
  }

  pub fn get_insert_with(&mut self, idx: usize, f: impl FnOnce() -> T) -> &mut T {
    self.grow_to(idx);
    if self.storage[idx].is_none() {
      self.len += 1;
    }
    self.storage[idx].get_or_insert_with(f)
  }

  pub fn remove(&mut self, idx: usize) -> Option<T> {
    let r = self.storage.get_mut(idx)?.take();
    if r.is_some() {
      self.len -= 1;
    }
    r
  }

  pub fn contains(&self, idx: usize) -> bool {
    self.try_get(idx).is_some()
  }

  pub fn try_get(&self, idx: usize) -> Option<&T> {
    self.storage.get(idx).and_then(|v| v.as_ref())
  }

  pub fn try_get_mut(&mut self, idx: usize) -> Option<&mut T> {
    self.storage.get_mut(idx).and_then(|v| v.as_mut())
  }

  pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
    self
      .storage
      .iter()
      .enumerate()
      .filter_map(|(index, v)| Some((index, v.as_ref()?)))
  }

  pub fn values(&self) -> impl Iterator<Item = &T> {
    self.storage.iter().flatten()
  }

  pub fn map<X>(&self, mut f: impl FnMut(usize, &T) -> X) -> SlotVec<X> {
    SlotVec {
      storage: self
        .storage
        .iter()
        .enumerate()
        .map(|(i, v)| v.as_ref().map(|v| f(i, v)))
        .collect(),
      len: self.len,
      end: self.end,
    }
  }
}

/// The rectangular cell storage behind [`crate::Matrix`]: outer (column) slots holding inner
/// (row) slots. Columns are created on first write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
  columns: SlotVec<SlotVec<T>>,
}

impl<T> Default for Grid<T> {
  fn default() -> Self {
    Self {
      columns: Default::default(),
    }
  }
}

impl<T: Copy> Grid<T> {
  pub fn width(&self) -> usize {
    self.columns.len()
  }

  pub fn height(&self) -> Result<usize, MatrixError> {
    self
      .columns
      .try_get(0)
      .map(|c| c.len())
      .ok_or(MatrixError::StructuralError("column 0 does not exist"))
  }

  pub fn get(&self, x: usize, y: usize) -> Result<T, MatrixError> {
    self
      .columns
      .try_get(x)
      .and_then(|c| c.try_get(y))
      .copied()
      .ok_or_else(|| MatrixError::OutOfRange(vec![x, y]))
  }

  pub fn set(&mut self, x: usize, y: usize, value: T) {
    self
      .columns
      .get_insert_with(x, Default::default)
      .insert(y, value);
  }

  pub fn column(&self, x: usize) -> Option<&SlotVec<T>> {
    self.columns.try_get(x)
  }

  pub fn column_mut(&mut self, x: usize) -> &mut SlotVec<T> {
    self.columns.get_insert_with(x, Default::default)
  }

  pub fn columns(&self) -> impl Iterator<Item = (usize, &SlotVec<T>)> {
    self.columns.iter()
  }

  pub fn push_column(&mut self, column: SlotVec<T>) {
    self.columns.push(column)
  }

  pub fn map<X>(&self, mut f: impl FnMut(usize, usize, T) -> X) -> Grid<X> {
    Grid {
      columns: self
        .columns
        .map(|x, column| column.map(|y, v| f(x, y, *v))),
    }
  }
}

#[test]
fn slot_vec_keeps_positions() {
  let mut v = SlotVec::default();
  v.insert(2, 'c');
  assert_eq!(v.len(), 1);
  assert_eq!(v.end(), 3);
  assert!(!v.contains(0));

  v.push('d');
  assert_eq!(v.try_get(3), Some(&'d'));
  v.insert(2, 'x');
  assert_eq!(v.len(), 2);

  assert_eq!(v.remove(2), Some('x'));
  assert_eq!(v.remove(2), None);
  assert_eq!(v.remove(100), None);
  assert_eq!(v.len(), 1);
  assert_eq!(v.iter().collect::<Vec<_>>(), vec![(3, &'d')]);

  // the next position keeps counting after the last value is removed
  assert_eq!(v.remove(3), Some('d'));
  assert_eq!(v.end(), 4);
  v.push('e');
  assert_eq!(v.iter().collect::<Vec<_>>(), vec![(4, &'e')]);
}

#[test]
fn grid_shape() {
  let mut g = Grid::default();
  assert!(g.height().is_err());

  g.set(1, 0, 5);
  assert_eq!(g.width(), 1);
  assert_eq!(
    g.height(),
    Err(MatrixError::StructuralError("column 0 does not exist"))
  );

  g.set(0, 0, 1);
  g.set(0, 1, 2);
  assert_eq!(g.width(), 2);
  assert_eq!(g.height(), Ok(2));
  assert_eq!(g.get(0, 1), Ok(2));
  assert_eq!(g.get(1, 1), Err(MatrixError::OutOfRange(vec![1, 1])));
}
