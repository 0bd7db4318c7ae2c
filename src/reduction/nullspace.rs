use crate::matrix::Matrix;
use crate::reduction::pivots::PivotMap;
use crate::reduction::rref::row_reduce;

/// Basis of the nullspace read off an RREF.
///
/// `n_vars` is the number of leading columns that are variables: all of them
/// for a plain matrix, all but the last for an augmented system. One vector
/// per free column, in increasing column order.
pub fn nullspace_basis(rref: &Matrix, n_vars: usize) -> Vec<Vec<f64>> {
  let pivots = PivotMap::from_rref(rref, n_vars);
  basis_from_pivots(rref, &pivots)
}

pub(crate) fn basis_from_pivots(
  rref: &Matrix,
  pivots: &PivotMap,
) -> Vec<Vec<f64>> {
  let n_vars = pivots.n_vars();

  pivots
    .free_columns()
    .into_iter()
    .map(|free| {
      let mut vec = vec![0.0; n_vars];
      vec[free] = 1.0;
      for &(i, j) in pivots.pivots() {
        vec[j] = -rref[(i, free)];
      }
      vec
    })
    .collect()
}

/// Nullspace basis of `matrix` (reduces a copy).
pub fn null_space(matrix: &Matrix) -> Vec<Vec<f64>> {
  let rref = row_reduce(matrix.clone());
  nullspace_basis(&rref, rref.ncols())
}

/// Number of pivots in the RREF of `matrix`.
pub fn rank(matrix: &Matrix) -> usize {
  let rref = row_reduce(matrix.clone());
  PivotMap::from_rref(&rref, rref.ncols()).rank()
}
