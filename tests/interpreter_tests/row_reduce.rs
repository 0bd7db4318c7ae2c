use super::*;

mod row_reduce {
  use super::*;

  #[test]
  fn full_rank_reduces_to_identity() {
    assert_eq!(
      interpret(
        "RowReduce[{{1, 2, 3, 4}, {2, 4, 7, 11}, {3, 7, 14, 25}, {4, 11, 25, 50}}]"
      )
      .unwrap(),
      "{{1, 0, 0, 0}, {0, 1, 0, 0}, {0, 0, 1, 0}, {0, 0, 0, 1}}"
    );
  }

  #[test]
  fn two_by_two() {
    assert_eq!(
      interpret("RowReduce[{{1, 2}, {3, 4}}]").unwrap(),
      "{{1, 0}, {0, 1}}"
    );
  }

  #[test]
  fn singular_keeps_zero_row_last() {
    assert_eq!(
      interpret("RowReduce[{{1, 2, 3}, {4, 5, 6}, {7, 8, 9}}]").unwrap(),
      "{{1, 0, -1}, {0, 1, 2}, {0, 0, 0}}"
    );
  }

  #[test]
  fn skips_column_without_pivot() {
    assert_eq!(
      interpret("RowReduce[{{1, 2, 1}, {2, 4, 0}, {3, 6, 1}}]").unwrap(),
      "{{1, 2, 0}, {0, 0, 1}, {0, 0, 0}}"
    );
  }

  #[test]
  fn leading_zero_is_swapped_down() {
    assert_eq!(
      interpret("RowReduce[{{0, 2, 4}, {1, 1, 1}}]").unwrap(),
      "{{1, 0, -1}, {0, 1, 2}}"
    );
  }

  #[test]
  fn zero_matrix_is_unchanged() {
    assert_eq!(
      interpret("RowReduce[{{0, 0}, {0, 0}}]").unwrap(),
      "{{0, 0}, {0, 0}}"
    );
  }

  #[test]
  fn fractions_and_reals_as_entries() {
    assert_eq!(
      interpret("RowReduce[{{1/2, 0}, {0, 0.25}}]").unwrap(),
      "{{1, 0}, {0, 1}}"
    );
  }
}

mod matrix_rank {
  use super::*;

  #[test]
  fn full_rank() {
    assert_eq!(interpret("MatrixRank[{{1, 2}, {3, 4}}]").unwrap(), "2");
  }

  #[test]
  fn rank_deficient() {
    assert_eq!(
      interpret("MatrixRank[{{1, 2, 3}, {4, 5, 6}, {7, 8, 9}}]").unwrap(),
      "2"
    );
  }

  #[test]
  fn zero_matrix() {
    assert_eq!(interpret("MatrixRank[{{0, 0, 0}}]").unwrap(), "0");
  }

  #[test]
  fn wide_matrix() {
    assert_eq!(interpret("MatrixRank[{{1, 1, 1}}]").unwrap(), "1");
  }
}
