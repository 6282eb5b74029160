use crate::*;

/// Laplace expansion costs `O(n!)`, requesting a determinant (or an inverse) of a matrix
/// larger than this logs a warning.
pub const LAPLACE_EXPANSION_WARN_DIMENSION: usize = 9;

impl<T: Scalar> Matrix<T> {
  /// Drop column `drop_x` and row `drop_y`, the remaining cells are packed from 0 keeping
  /// their order.
  pub fn minor(&self, drop_x: usize, drop_y: usize) -> Result<Self, MatrixError> {
    let (width, height) = self.extent()?;
    let mut minor = Matrix::new();
    for (x_counter, x) in (0..width).filter(|x| *x != drop_x).enumerate() {
      for (y_counter, y) in (0..height).filter(|y| *y != drop_y).enumerate() {
        minor.set(x_counter, y_counter, self.get(x, y)?);
      }
    }
    Ok(minor)
  }

  /// Determinant by Laplace expansion along column 0.
  ///
  /// The result is cached until the next [`Matrix::set`]; a zero determinant is cached like
  /// any other value.
  pub fn determinant(&self) -> Result<T, MatrixError> {
    if let Some(det) = self.cached_determinant.get() {
      log::trace!("determinant cache hit");
      return Ok(*det);
    }

    let n = self.square_dimension()?;
    if n > LAPLACE_EXPANSION_WARN_DIMENSION {
      log::warn!("laplace expansion of a {n}x{n} matrix, this costs O(n!) and will be slow");
    }

    let det = self.laplace_expansion(n)?;
    Ok(*self.cached_determinant.get_or_init(|| det))
  }

  fn laplace_expansion(&self, n: usize) -> Result<T, MatrixError> {
    match n {
      1 => self.get(0, 0),
      2 => Ok(self.get(0, 0)? * self.get(1, 1)? - self.get(0, 1)? * self.get(1, 0)?),
      _ => {
        let mut det = T::zero();
        for y in 0..n {
          let cell = self.get(0, y)?;
          if cell.is_zero() {
            continue;
          }
          let sub = self.minor(0, y)?.laplace_expansion(n - 1)?;
          det = det + checkerboard_sign::<T>(y) * cell * sub;
        }
        Ok(det)
      }
    }
  }

  /// Every cell replaced by the determinant of its minor.
  pub fn minor_matrix(&self) -> Result<Self, MatrixError> {
    let n = self.square_dimension()?;
    // the minor of a 1x1 matrix is empty, its determinant is 1
    if n == 1 {
      return Ok(Matrix::from([[T::one()]]));
    }

    let mut result = Matrix::new();
    for x in 0..n {
      for y in 0..n {
        result.set(x, y, self.minor(x, y)?.laplace_expansion(n - 1)?);
      }
    }
    Ok(result)
  }

  /// The minor matrix with the checkerboard sign applied.
  pub fn cofactor_matrix(&self) -> Result<Self, MatrixError> {
    Ok(
      self
        .minor_matrix()?
        .each(|v, x, y| checkerboard_sign::<T>(x + y) * v),
    )
  }

  /// Transposed cofactor matrix (the adjugate) divided by the determinant.
  ///
  /// Cost grows like the determinant itself, this is meant for small matrices.
  pub fn inverse(&self) -> Result<Self, MatrixError> {
    let n = self.square_dimension()?;
    let det = self.determinant()?;
    if det.is_zero() {
      return Err(MatrixError::SingularMatrix);
    }
    log::debug!("inverting {n}x{n} matrix by adjugate, determinant {det:?}");

    let adjugate = self.cofactor_matrix()?.transpose()?;
    Ok(adjugate.each(|v, _, _| v / det))
  }
}

#[cfg(test)]
mod tests {
  use cgmath::SquareMatrix;
  use rand::{rngs::StdRng, Rng, SeedableRng};

  use crate::*;

  fn sample_4x4() -> Matrix<f64> {
    Matrix::from([
      [3., -3., -5., 8.],
      [-3., 2., 4., -6.],
      [2., -5., -7., 5.],
      [-4., 3., 5., -6.],
    ])
  }

  fn random_matrix(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let mut m = Matrix::new();
    for x in 0..n {
      for y in 0..n {
        m.set(x, y, rng.gen_range(-5..=5) as f64);
      }
    }
    m
  }

  #[test]
  fn minor() {
    let expected = Matrix::from([[3., -5., 8.], [2., -7., 5.], [-4., 5., -6.]]);
    assert_eq!(sample_4x4().minor(1, 1), Ok(expected));

    let m = Matrix::from([[1, 2], [3, 4]]);
    assert_eq!(m.minor(0, 0), Ok(Matrix::from([[4]])));
    assert_eq!(m.minor(1, 0), Ok(Matrix::from([[2]])));
  }

  #[test]
  fn determinant() {
    assert_eq!(sample_4x4().determinant(), Ok(18.));
    assert_eq!(Matrix::from([[7]]).determinant(), Ok(7));
    assert_eq!(Matrix::from([[1, 2], [3, 4]]).determinant(), Ok(-2));
    assert_eq!(
      Matrix::from([[2, 5, 7], [6, 3, 4], [5, -2, -3]]).determinant(),
      Ok(-1)
    );
  }

  #[test]
  fn determinant_requires_square() {
    let m = Matrix::from([[1, 2, 1], [0, 1, 2]]);
    assert_eq!(
      m.determinant(),
      Err(MatrixError::NotSquare {
        width: 2,
        height: 3
      })
    );
    assert!(matches!(
      Matrix::<f64>::new().determinant(),
      Err(MatrixError::StructuralError(_))
    ));
  }

  #[test]
  fn determinant_cache_follows_mutation() {
    let mut m = Matrix::from([[1., 2.], [2., 4.]]);
    assert_eq!(m.determinant(), Ok(0.));
    assert_eq!(m.cached_determinant.get(), Some(&0.));
    // a cached zero is still a cached value
    assert_eq!(m.determinant(), Ok(0.));

    m.set(1, 1, 5.);
    assert_eq!(m.cached_determinant.get(), None);
    assert_eq!(m.determinant(), Ok(1.));

    // same determinant after the mutation, still recomputed
    m.set(0, 0, 3.).set(1, 1, 5.).set(1, 0, 7.).set(0, 1, 2.);
    assert_eq!(m.cached_determinant.get(), None);
    assert_eq!(m.determinant(), Ok(1.));

    m.set(0, 0, 1.).set(0, 1, 2.).set(1, 0, 2.).set(1, 1, 4.);
    assert_eq!(m.determinant(), Ok(0.));
  }

  #[test]
  fn minor_and_cofactor_matrix() {
    let m = Matrix::from([[1, 2], [3, 4]]);
    assert_eq!(m.minor_matrix(), Ok(Matrix::from([[4, 3], [2, 1]])));
    assert_eq!(m.cofactor_matrix(), Ok(Matrix::from([[4, -3], [-2, 1]])));
    assert_eq!(Matrix::from([[5]]).minor_matrix(), Ok(Matrix::from([[1]])));
    assert!(matches!(
      Matrix::from([[1, 2, 3]]).cofactor_matrix(),
      Err(MatrixError::NotSquare { .. })
    ));
  }

  #[test]
  fn inverse() {
    let m = Matrix::from([[2., 5., 7.], [6., 3., 4.], [5., -2., -3.]]);
    let expected = Matrix::from([[1., -1., 1.], [-38., 41., -34.], [27., -29., 24.]]);
    assert_eq!(m.inverse(), Ok(expected));

    assert_eq!(Matrix::from([[4.]]).inverse(), Ok(Matrix::from([[0.25]])));
  }

  #[test]
  fn inverse_failures() {
    assert!(matches!(
      Matrix::from([[1., 2., 3.]]).inverse(),
      Err(MatrixError::NotSquare { .. })
    ));
    assert_eq!(
      Matrix::from([[1., 2.], [2., 4.]]).inverse(),
      Err(MatrixError::SingularMatrix)
    );
  }

  #[test]
  fn inverse_times_self_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    for n in 1..=5 {
      for _ in 0..8 {
        let m = random_matrix(&mut rng, n);
        if m.determinant().unwrap() == 0. {
          assert_eq!(m.inverse(), Err(MatrixError::SingularMatrix));
          continue;
        }
        let product = m.inverse().unwrap().product_on_matrix(&m).unwrap();
        assert!(product.approx_same(&Matrix::identity(n), 1e-9));
        checked += 1;
      }
    }
    assert!(checked > 0);
  }

  #[test]
  fn cross_check_cgmath() {
    let a: [[f64; 4]; 4] = [
      [3., -3., -5., 8.],
      [-3., 2., 4., -6.],
      [2., -5., -7., 5.],
      [-4., 3., 5., -7.],
    ];
    let ours = Matrix::from(a);
    let theirs = cgmath::Matrix4::from(a);

    let det = ours.determinant().unwrap();
    assert!((det - theirs.determinant()).abs() < 1e-9);

    let inverse: [[f64; 4]; 4] = theirs.invert().unwrap().into();
    assert!(ours.inverse().unwrap().approx_same(&Matrix::from(inverse), 1e-9));
  }
}
