//! Linear systems by row reduction.
//!
//! `solve` runs the whole pipeline: augment, reduce, check consistency, read
//! off the particular solution and the nullspace basis.

pub mod consistency;
pub mod nullspace;
pub mod pivots;
pub mod rref;
pub mod solution;

use log::debug;

pub use consistency::check_consistency;
pub use nullspace::{null_space, nullspace_basis, rank};
pub use pivots::PivotMap;
pub use rref::row_reduce;
pub use solution::{SolutionRecord, compose_solution};

use crate::LinalgError;
use crate::matrix::Matrix;

/// Solve `a·x = b`, or the homogeneous system `a·x = 0` when `b` is `None`.
pub fn solve(
  a: &Matrix,
  b: Option<&[f64]>,
) -> Result<SolutionRecord, LinalgError> {
  let Some(b) = b else {
    let basis = null_space(a);
    debug!(
      "homogeneous {}x{} system, nullity {}",
      a.nrows(),
      a.ncols(),
      basis.len()
    );
    return Ok(SolutionRecord {
      particular: vec![0.0; a.ncols()],
      nullspace_basis: basis,
    });
  };

  let augmented = a.augment(b)?;
  let rref = row_reduce(augmented);
  check_consistency(&rref)?;

  let record = compose_solution(&rref);
  debug!(
    "{}x{} system solved, {} free variable(s)",
    a.nrows(),
    a.ncols(),
    record.nullspace_basis.len()
  );
  Ok(record)
}
