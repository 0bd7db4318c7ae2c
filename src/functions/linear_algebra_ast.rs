//! AST-native linear system functions.
//!
//! RowReduce, MatrixRank, NullSpace, LinearSolve, SolutionSpace, Det.

use crate::LinalgError;
use crate::matrix::Matrix;
use crate::reduction::{null_space, rank, row_reduce, solve};
use crate::syntax::{Expr, expr_to_f64, normalize_rational};

/// Helper: extract a numeric matrix (list of equal-length lists) from an Expr.
pub fn expr_to_matrix(expr: &Expr) -> Result<Matrix, LinalgError> {
  let Expr::List(rows) = expr else {
    return Err(LinalgError::EvaluationError(
      "expected a matrix given as a list of rows".into(),
    ));
  };

  let mut matrix = Vec::with_capacity(rows.len());
  for row in rows {
    let Expr::List(cells) = row else {
      return Err(LinalgError::EvaluationError(
        "expected a matrix given as a list of rows".into(),
      ));
    };
    let values = cells
      .iter()
      .map(|cell| {
        expr_to_f64(cell).ok_or_else(|| {
          LinalgError::EvaluationError(format!(
            "matrix entry {} is not a number",
            crate::syntax::expr_to_string(cell)
          ))
        })
      })
      .collect::<Result<Vec<f64>, _>>()?;
    matrix.push(values);
  }

  Matrix::from_rows(matrix)
}

/// Helper: extract a right-hand side given either as a flat vector
/// `{b1, b2}` or as a column `{{b1}, {b2}}`.
pub fn expr_to_rhs(expr: &Expr) -> Result<Vec<f64>, LinalgError> {
  let Expr::List(items) = expr else {
    return Err(LinalgError::EvaluationError(
      "expected a right-hand side vector".into(),
    ));
  };

  items
    .iter()
    .map(|item| match item {
      Expr::List(column) if column.len() == 1 => expr_to_f64(&column[0]),
      Expr::List(_) => None,
      other => expr_to_f64(other),
    })
    .collect::<Option<Vec<f64>>>()
    .ok_or_else(|| {
      LinalgError::DimensionError(
        "right-hand side must be a vector or a single column".into(),
      )
    })
}

pub(crate) fn vector_to_expr(v: &[f64]) -> Expr {
  Expr::List(v.iter().map(|x| Expr::Real(*x)).collect())
}

pub(crate) fn vectors_to_expr(vs: &[Vec<f64>]) -> Expr {
  Expr::List(vs.iter().map(|v| vector_to_expr(v)).collect())
}

fn matrix_to_expr(m: &Matrix) -> Expr {
  Expr::List(m.rows().map(vector_to_expr).collect())
}

/// RowReduce[m] - reduced row-echelon form
pub fn row_reduce_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  Ok(matrix_to_expr(&row_reduce(m)))
}

/// MatrixRank[m] - number of pivots of the RREF
pub fn matrix_rank_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  Ok(Expr::Integer(rank(&m) as i128))
}

/// NullSpace[m] - one basis vector per free column
pub fn null_space_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  Ok(vectors_to_expr(&null_space(&m)))
}

/// LinearSolve[m, b] - the particular solution (free variables set to 0)
pub fn linear_solve_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let b = expr_to_rhs(&args[1])?;
  let record = solve(&m, Some(&b))?;
  Ok(vector_to_expr(&record.particular))
}

/// SolutionSpace[m, b] - {particular, {basis...}}; SolutionSpace[m] solves
/// the homogeneous system
pub fn solution_space_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  let b = args.get(1).map(expr_to_rhs).transpose()?;
  let record = solve(&m, b.as_deref())?;
  Ok(Expr::List(vec![
    vector_to_expr(&record.particular),
    vectors_to_expr(&record.nullspace_basis),
  ]))
}

/// Det[m] - exact determinant of the (rationalised) entries
pub fn det_ast(args: &[Expr]) -> Result<Expr, LinalgError> {
  let m = expr_to_matrix(&args[0])?;
  Ok(normalize_rational(crate::eigen::determinant(&m)?))
}
