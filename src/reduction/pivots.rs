use crate::EPS;
use crate::matrix::Matrix;

/// Location of the leading ones of an RREF.
///
/// A column `j < n_vars` is the pivot of row `i` when `R[i][j]` is 1 and every
/// other entry of column `j` is 0 (both within `EPS`); only the first such
/// column of each row counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotMap {
  pivots: Vec<(usize, usize)>,
  n_vars: usize,
}

impl PivotMap {
  pub fn from_rref(rref: &Matrix, n_vars: usize) -> Self {
    let n_vars = n_vars.min(rref.ncols());
    let mut pivots = Vec::new();

    for i in 0..rref.nrows() {
      let pivot = (0..n_vars).find(|&j| {
        (rref[(i, j)] - 1.0).abs() < EPS
          && (0..rref.nrows())
            .filter(|&k| k != i)
            .all(|k| rref[(k, j)].abs() < EPS)
      });
      if let Some(j) = pivot {
        pivots.push((i, j));
      }
    }

    Self { pivots, n_vars }
  }

  /// `(row, column)` pairs in row order.
  pub fn pivots(&self) -> &[(usize, usize)] {
    &self.pivots
  }

  pub fn pivot_columns(&self) -> Vec<usize> {
    self.pivots.iter().map(|&(_, j)| j).collect()
  }

  pub fn free_columns(&self) -> Vec<usize> {
    (0..self.n_vars)
      .filter(|j| !self.pivots.iter().any(|&(_, p)| p == *j))
      .collect()
  }

  pub fn n_vars(&self) -> usize {
    self.n_vars
  }

  pub fn rank(&self) -> usize {
    self.pivots.len()
  }
}
