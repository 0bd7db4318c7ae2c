use crate::matrix::Matrix;
use crate::reduction::nullspace::basis_from_pivots;
use crate::reduction::pivots::PivotMap;

/// General solution of `Ax = B`: `particular + Σ cᵢ·nullspace_basis[i]` for
/// arbitrary real `cᵢ`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionRecord {
  pub particular: Vec<f64>,
  pub nullspace_basis: Vec<Vec<f64>>,
}

impl SolutionRecord {
  pub fn is_unique(&self) -> bool {
    self.nullspace_basis.is_empty()
  }

  pub fn n_vars(&self) -> usize {
    self.particular.len()
  }

  /// The solution obtained for the given free-variable coefficients.
  /// Missing coefficients count as 0, surplus ones are ignored.
  pub fn point(&self, coefficients: &[f64]) -> Vec<f64> {
    let mut x = self.particular.clone();
    for (basis, c) in self.nullspace_basis.iter().zip(coefficients) {
      for (xi, bi) in x.iter_mut().zip(basis) {
        *xi += c * bi;
      }
    }
    x
  }
}

/// Read the general solution off the RREF of a consistent augmented system.
///
/// Free variables are set to 0 in the particular solution.
pub fn compose_solution(rref: &Matrix) -> SolutionRecord {
  let last = rref.ncols() - 1;
  let pivots = PivotMap::from_rref(rref, last);

  let mut particular = vec![0.0; last];
  for &(i, j) in pivots.pivots() {
    particular[j] = rref[(i, last)];
  }

  let nullspace_basis = if pivots.free_columns().is_empty() {
    Vec::new()
  } else {
    basis_from_pivots(rref, &pivots)
  };

  SolutionRecord {
    particular,
    nullspace_basis,
  }
}
