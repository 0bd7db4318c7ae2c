use super::*;

mod linear_solve {
  use super::*;

  #[test]
  fn unique_solution() {
    assert_eq!(
      interpret("LinearSolve[{{2, 1}, {1, 3}}, {4, 7}]").unwrap(),
      "{1, 2}"
    );
  }

  #[test]
  fn column_right_hand_side() {
    assert_eq!(
      interpret("LinearSolve[{{2, 1}, {1, 3}}, {{4}, {7}}]").unwrap(),
      "{1, 2}"
    );
  }

  #[test]
  fn four_by_four() {
    assert_eq!(
      interpret(
        "LinearSolve[{{1, 2, 3, 4}, {2, 4, 7, 11}, {3, 7, 14, 25}, {4, 11, 25, 50}}, {10, 24, 49, 90}]"
      )
      .unwrap(),
      "{1, 1, 1, 1}"
    );
  }

  #[test]
  fn free_variables_are_zero() {
    assert_eq!(
      interpret("LinearSolve[{{1, 1, 1}}, {3}]").unwrap(),
      "{3, 0, 0}"
    );
  }

  #[test]
  fn inconsistent_system_fails() {
    assert!(interpret("LinearSolve[{{1, 2}, {2, 4}}, {1, 3}]").is_err());
  }
}

mod solution_space {
  use super::*;

  #[test]
  fn one_equation_three_unknowns() {
    assert_eq!(
      interpret("SolutionSpace[{{1, 1, 1}}, {{3}}]").unwrap(),
      "{{3, 0, 0}, {{-1, 1, 0}, {-1, 0, 1}}}"
    );
  }

  #[test]
  fn unique_solution_has_empty_basis() {
    assert_eq!(
      interpret("SolutionSpace[{{2, 1}, {1, 3}}, {4, 7}]").unwrap(),
      "{{1, 2}, {}}"
    );
  }

  #[test]
  fn dependent_rows() {
    assert_eq!(
      interpret("SolutionSpace[{{1, 2}, {2, 4}}, {3, 6}]").unwrap(),
      "{{3, 0}, {{-2, 1}}}"
    );
  }

  #[test]
  fn homogeneous_without_right_hand_side() {
    assert_eq!(
      interpret("SolutionSpace[{{1, 1, 1}}]").unwrap(),
      "{{0, 0, 0}, {{-1, 1, 0}, {-1, 0, 1}}}"
    );
  }

  #[test]
  fn zero_row_with_nonzero_rhs_has_no_solution() {
    assert!(
      interpret("SolutionSpace[{{1, 0, 0}, {0, 1, 0}, {0, 0, 0}}, {0, 0, 1}]")
        .is_err()
    );
  }
}

mod det {
  use super::*;

  #[test]
  fn integer_matrix() {
    assert_eq!(interpret("Det[{{1, 2}, {3, 4}}]").unwrap(), "-2");
  }

  #[test]
  fn singular_matrix() {
    assert_eq!(interpret("Det[{{1, 2}, {2, 4}}]").unwrap(), "0");
  }

  #[test]
  fn exact_fraction() {
    assert_eq!(interpret("Det[{{1/2, 0}, {0, 1/3}}]").unwrap(), "1/6");
  }

  #[test]
  fn needs_a_row_swap() {
    assert_eq!(interpret("Det[{{0, 1}, {1, 0}}]").unwrap(), "-1");
  }

  #[test]
  fn three_by_three() {
    assert_eq!(
      interpret("Det[{{2, 0, 0}, {0, 3, 4}, {0, 4, 9}}]").unwrap(),
      "22"
    );
  }
}
