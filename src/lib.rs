use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod eigen;
pub mod evaluator;
pub mod functions;
pub mod matrix;
pub mod reduction;
pub mod syntax;

pub use eigen::{
  EigenPair, RootFinderConfig, characteristic_polynomial, determinant,
  eigensystem, eigenvalues, eigenvectors, polynomial::Polynomial,
};
pub use matrix::Matrix;
pub use reduction::{
  PivotMap, SolutionRecord, check_consistency, compose_solution, null_space,
  nullspace_basis, rank, row_reduce, solve,
};

/// Absolute threshold below which a value counts as zero.
///
/// Shared by pivot selection, pivot detection, nullspace extraction and the
/// consistency check so that all of them agree on what "zero" means.
pub const EPS: f64 = 1e-10;

#[derive(Parser)]
#[grammar = "matrix.pest"]
pub struct MatrixParser;

#[derive(Error, Debug)]
pub enum LinalgError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Dimension error: {0}")]
  DimensionError(String),
  #[error("No solution: the right-hand side is not in the column space")]
  NoSolutionError,
  #[error("Root finding error: {0}")]
  RootFindingError(String),
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
}

impl MatrixParser {
  pub fn parse_program(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  MatrixParser::parse_program(input)
}

/// Parse, evaluate and print a single expression such as
/// `Eigenvalues[{{2, 1}, {1, 2}}]`.
pub fn interpret(input: &str) -> Result<String, LinalgError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(LinalgError::EmptyInput);
  }

  let expr = syntax::parse_expr(trimmed)?;
  let result = evaluator::evaluate_expr(&expr)?;
  Ok(syntax::expr_to_string(&result))
}
