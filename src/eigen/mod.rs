//! Eigenvalues from the exact characteristic polynomial, eigenvectors from
//! the nullspace of `A − λI`.

pub mod charpoly;
pub mod polynomial;
pub mod rational_function;
pub mod roots;
pub mod sturm;

use log::{debug, info};
use num_complex::Complex64;

pub use charpoly::{characteristic_polynomial, determinant};
pub use roots::{RootFinderConfig, find_roots};

use crate::LinalgError;
use crate::matrix::Matrix;
use crate::reduction::null_space;

/// One distinct eigenvalue with a basis of its eigenspace.
///
/// `basis` may be shorter than the algebraic multiplicity for a defective
/// matrix. Complex eigenvalues carry an empty basis: eigenvectors are only
/// computed over the reals.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
  pub value: Complex64,
  pub basis: Vec<Vec<f64>>,
}

impl EigenPair {
  pub fn is_real(&self) -> bool {
    self.value.im == 0.0
  }
}

pub fn eigensystem(
  a: &Matrix,
  config: &RootFinderConfig,
) -> Result<Vec<EigenPair>, LinalgError> {
  let values = eigenvalues(a, config)?;

  let mut pairs = Vec::with_capacity(values.len());
  for value in values {
    let basis = if value.im == 0.0 {
      null_space(&a.shifted(value.re)?)
    } else {
      Vec::new()
    };
    debug!("eigenvalue {} has {} eigenvector(s)", value, basis.len());
    pairs.push(EigenPair { value, basis });
  }

  info!(
    "{}x{} eigensystem: {} distinct eigenvalue(s)",
    a.nrows(),
    a.ncols(),
    pairs.len()
  );
  Ok(pairs)
}

/// Distinct roots of `det(A − λI)`.
pub fn eigenvalues(
  a: &Matrix,
  config: &RootFinderConfig,
) -> Result<Vec<Complex64>, LinalgError> {
  let p = characteristic_polynomial(a)?;
  find_roots(&p, config)
}

/// Every eigenvector, grouped by eigenvalue in eigenvalue order.
pub fn eigenvectors(
  a: &Matrix,
  config: &RootFinderConfig,
) -> Result<Vec<Vec<f64>>, LinalgError> {
  Ok(
    eigensystem(a, config)?
      .into_iter()
      .flat_map(|pair| pair.basis)
      .collect(),
  )
}
