use std::fmt::Display;

use crate::*;

/// Human readable report of a matrix: identity, size, determinant when square, then one line
/// per outer index.
pub fn report<T: Scalar + Display>(matrix: &Matrix<T>) -> Result<String, MatrixError> {
  let is_square = matrix.is_square()?;

  let mut out = format!("Object id: {matrix:p}.\n");
  out.push_str(&format!(
    "Size: {}x{}. Is square?: {is_square}\n",
    matrix.width(),
    matrix.height()?,
  ));
  if is_square {
    out.push_str(&format!("Determinant: {}\n", matrix.determinant()?));
  }

  for x in 0..matrix.width() {
    let row: Vec<_> = matrix.get_row(x)?.iter().map(|v| v.to_string()).collect();
    out.push_str(&format!("[ {} ]\n", row.join(" , ")));
  }
  out.push('\n');
  Ok(out)
}

/// Print [`report`] to stdout.
pub fn dump<T: Scalar + Display>(matrix: &Matrix<T>) -> Result<(), MatrixError> {
  print!("{}", report(matrix)?);
  Ok(())
}

#[test]
fn report_lines() {
  let m = Matrix::from([[1, 2], [3, 4]]);
  let text = report(&m).unwrap();
  let lines: Vec<_> = text.lines().collect();
  assert!(lines[0].starts_with("Object id: 0x"));
  assert_eq!(lines[1], "Size: 2x2. Is square?: true");
  assert_eq!(lines[2], "Determinant: -2");
  assert_eq!(lines[3], "[ 1 , 2 ]");
  assert_eq!(lines[4], "[ 3 , 4 ]");
  assert!(text.ends_with("\n\n"));

  let m = Matrix::from([[1.5, 2., 3.]]);
  let text = report(&m).unwrap();
  assert!(text.contains("Size: 1x3. Is square?: false\n[ 1.5 , 2 , 3 ]"));
  assert!(!text.contains("Determinant"));

  assert!(report(&Matrix::<f64>::new()).is_err());
  assert!(dump(&m).is_ok());
}
