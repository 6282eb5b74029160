use std::fmt::Debug;

use num_traits::Signed;

/// The cell type of [`crate::Matrix`] and [`crate::Vector`].
///
/// Integer scalars work for every operation, but inversion divides with the scalar's own
/// division, so fractional inverses need a float scalar.
pub trait Scalar: Signed + Copy + PartialOrd + Debug + 'static {}

impl<T: Signed + Copy + PartialOrd + Debug + 'static> Scalar for T {}

/// +1 for even positions, -1 for odd ones.
#[inline]
pub(crate) fn checkerboard_sign<T: Scalar>(position: usize) -> T {
  if position % 2 == 0 {
    T::one()
  } else {
    -T::one()
  }
}

#[test]
fn sign_alternates() {
  assert_eq!(checkerboard_sign::<i32>(0), 1);
  assert_eq!(checkerboard_sign::<i32>(1), -1);
  assert_eq!(checkerboard_sign::<f64>(4), 1.);
  assert_eq!(checkerboard_sign::<f64>(7), -1.);
}
