//! AST-native eigen functions.
//!
//! CharacteristicPolynomial, Eigenvalues, Eigenvectors, Eigensystem.

use num_complex::Complex64;

use crate::LinalgError;
use crate::eigen::{
  RootFinderConfig, characteristic_polynomial, eigensystem, eigenvalues,
  eigenvectors,
};
use crate::functions::linear_algebra_ast::{
  expr_to_matrix, vectors_to_expr,
};
use crate::syntax::Expr;

fn complex_to_expr(z: Complex64) -> Expr {
  if z.im == 0.0 {
    Expr::Real(z.re)
  } else {
    Expr::Complex { re: z.re, im: z.im }
  }
}

/// CharacteristicPolynomial[m, x] - det(m - x I); the variable defaults to x
pub fn characteristic_polynomial_ast(
  args: &[Expr],
) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let var = match args.get(1) {
    None => "x".to_string(),
    Some(Expr::Identifier(name)) => name.clone(),
    Some(_) => {
      return Err(LinalgError::EvaluationError(
        "CharacteristicPolynomial: variable must be a symbol".into(),
      ));
    }
  };
  let poly = characteristic_polynomial(&m)?;
  Ok(Expr::Polynomial { poly, var })
}

/// Eigenvalues[m] - distinct eigenvalues
pub fn eigenvalues_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let values = eigenvalues(&m, &RootFinderConfig::default())?;
  Ok(Expr::List(values.into_iter().map(complex_to_expr).collect()))
}

/// Eigenvectors[m] - all real eigenvectors, in eigenvalue order
pub fn eigenvectors_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let vectors = eigenvectors(&m, &RootFinderConfig::default())?;
  Ok(vectors_to_expr(&vectors))
}

/// Eigensystem[m] - {{values...}, {{basis of value 1...}, ...}}
pub fn eigensystem_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let pairs = eigensystem(&m, &RootFinderConfig::default())?;
  let values = pairs.iter().map(|p| complex_to_expr(p.value)).collect();
  let bases = pairs.iter().map(|p| vectors_to_expr(&p.basis)).collect();
  Ok(Expr::List(vec![Expr::List(values), Expr::List(bases)]))
}
