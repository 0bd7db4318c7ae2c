use log::debug;

use crate::matrix::Matrix;
use crate::{EPS, LinalgError};

/// Decide whether the augmented system in `rref` (RHS in the last column) is
/// solvable.
///
/// Fails with `NoSolutionError` if some row reads `0 = c` with `c ≠ 0`.
pub fn check_consistency(rref: &Matrix) -> Result<(), LinalgError> {
  let n_vars = rref.ncols().saturating_sub(1);

  for (i, row) in rref.rows().enumerate() {
    let coefficients_vanish = row[..n_vars].iter().all(|v| v.abs() < EPS);
    if coefficients_vanish && row[n_vars].abs() > EPS {
      debug!(
        "row {} reduces to 0 = {}, system is inconsistent",
        i, row[n_vars]
      );
      return Err(LinalgError::NoSolutionError);
    }
  }

  Ok(())
}
