use super::*;

mod null_space {
  use super::*;

  #[test]
  fn one_free_column() {
    assert_eq!(
      interpret("NullSpace[{{1, 2, 3}, {4, 5, 6}, {7, 8, 9}}]").unwrap(),
      "{{1, -2, 1}}"
    );
  }

  #[test]
  fn two_free_columns() {
    assert_eq!(
      interpret("NullSpace[{{1, 1, 1}}]").unwrap(),
      "{{-1, 1, 0}, {-1, 0, 1}}"
    );
  }

  #[test]
  fn invertible_has_empty_nullspace() {
    assert_eq!(interpret("NullSpace[{{1, 0}, {0, 1}}]").unwrap(), "{}");
  }

  #[test]
  fn zero_matrix_spans_everything() {
    assert_eq!(
      interpret("NullSpace[{{0, 0}, {0, 0}}]").unwrap(),
      "{{1, 0}, {0, 1}}"
    );
  }

  #[test]
  fn proportional_rows() {
    assert_eq!(
      interpret("NullSpace[{{1, -2}, {-1, 2}}]").unwrap(),
      "{{2, 1}}"
    );
  }
}
