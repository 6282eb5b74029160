//! Heap allocated matrix and vector values with the classical (non pivoting) algorithms:
//! Laplace expansion determinant, minors, cofactors and adjugate inversion.
//!
//! Cells are addressed as `(x, y)`: `x` is the outer (column) index and `y` the inner (row)
//! index, both starting from zero.

mod container;
mod dump;
mod error;
mod keys;
mod mat;
mod scalar;
mod vec;

pub use container::*;
pub use dump::*;
pub use error::*;
pub use keys::*;
pub use mat::*;
pub use scalar::*;
pub use vec::*;
