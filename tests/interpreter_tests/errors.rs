use lineq::LinalgError;

use super::*;

mod errors {
  use super::*;

  #[test]
  fn empty_input() {
    assert!(matches!(interpret("   "), Err(LinalgError::EmptyInput)));
  }

  #[test]
  fn syntax_error() {
    assert!(matches!(
      interpret("RowReduce[{{1, 2}"),
      Err(LinalgError::ParseError(_))
    ));
  }

  #[test]
  fn ragged_matrix() {
    assert!(matches!(
      interpret("RowReduce[{{1, 2}, {3}}]"),
      Err(LinalgError::DimensionError(_))
    ));
  }

  #[test]
  fn rhs_length_mismatch() {
    assert!(matches!(
      interpret("LinearSolve[{{1, 0}, {0, 1}}, {1, 2, 3}]"),
      Err(LinalgError::DimensionError(_))
    ));
  }

  #[test]
  fn inconsistent_system() {
    assert!(matches!(
      interpret("LinearSolve[{{1, 2}, {2, 4}}, {1, 3}]"),
      Err(LinalgError::NoSolutionError)
    ));
  }

  #[test]
  fn eigenvalues_of_non_square() {
    assert!(matches!(
      interpret("Eigenvalues[{{1, 2, 3}, {4, 5, 6}}]"),
      Err(LinalgError::DimensionError(_))
    ));
  }

  #[test]
  fn det_of_non_square() {
    assert!(matches!(
      interpret("Det[{{1, 2}}]"),
      Err(LinalgError::DimensionError(_))
    ));
  }

  #[test]
  fn unknown_function() {
    assert!(matches!(
      interpret("Transpose[{{1, 2}}]"),
      Err(LinalgError::EvaluationError(_))
    ));
  }

  #[test]
  fn wrong_arity() {
    assert!(matches!(
      interpret("RowReduce[{{1}}, {{2}}]"),
      Err(LinalgError::EvaluationError(_))
    ));
  }

  #[test]
  fn symbolic_entry() {
    assert!(matches!(
      interpret("RowReduce[{{a, 1}}]"),
      Err(LinalgError::EvaluationError(_))
    ));
  }

  #[test]
  fn error_message() {
    assert_eq!(
      interpret("LinearSolve[{{0}}, {1}]").unwrap_err().to_string(),
      "No solution: the right-hand side is not in the column space"
    );
  }
}
