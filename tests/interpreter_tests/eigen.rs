use super::*;

mod eigenvalues {
  use super::*;

  #[test]
  fn symmetric_two_by_two() {
    assert_eq!(interpret("Eigenvalues[{{2, 1}, {1, 2}}]").unwrap(), "{1, 3}");
  }

  #[test]
  fn three_by_three() {
    assert_eq!(
      interpret("Eigenvalues[{{2, 0, 0}, {0, 3, 4}, {0, 4, 9}}]").unwrap(),
      "{1, 2, 11}"
    );
  }

  #[test]
  fn repeated_value_reported_once() {
    assert_eq!(
      interpret("Eigenvalues[{{1, 0, 0}, {0, 1, 0}, {0, 0, 1}}]").unwrap(),
      "{1}"
    );
  }

  #[test]
  fn zero_eigenvalue() {
    assert_eq!(interpret("Eigenvalues[{{1, 2}, {2, 4}}]").unwrap(), "{0, 5}");
  }

  #[test]
  fn rotation_has_complex_pair() {
    assert_eq!(interpret("Eigenvalues[{{0, -1}, {1, 0}}]").unwrap(), "{-I, I}");
  }

  #[test]
  fn fractional_eigenvalues() {
    assert_eq!(
      interpret("Eigenvalues[{{1/2, 0}, {0, 4}}]").unwrap(),
      "{0.5, 4}"
    );
  }
}

mod eigenvectors {
  use super::*;

  #[test]
  fn symmetric_two_by_two() {
    assert_eq!(
      interpret("Eigenvectors[{{2, 1}, {1, 2}}]").unwrap(),
      "{{-1, 1}, {1, 1}}"
    );
  }

  #[test]
  fn three_by_three() {
    assert_eq!(
      interpret("Eigenvectors[{{2, 0, 0}, {0, 3, 4}, {0, 4, 9}}]").unwrap(),
      "{{0, -2, 1}, {1, 0, 0}, {0, 0.5, 1}}"
    );
  }

  #[test]
  fn jordan_block_is_defective() {
    assert_eq!(interpret("Eigenvectors[{{1, 1}, {0, 1}}]").unwrap(), "{{1, 0}}");
  }

  #[test]
  fn complex_values_have_no_real_vectors() {
    assert_eq!(interpret("Eigenvectors[{{0, -1}, {1, 0}}]").unwrap(), "{}");
  }
}

mod eigensystem {
  use super::*;

  #[test]
  fn symmetric_two_by_two() {
    assert_eq!(
      interpret("Eigensystem[{{2, 1}, {1, 2}}]").unwrap(),
      "{{1, 3}, {{{-1, 1}}, {{1, 1}}}}"
    );
  }

  #[test]
  fn diagonal() {
    assert_eq!(
      interpret("Eigensystem[{{2, 0}, {0, 3}}]").unwrap(),
      "{{2, 3}, {{{1, 0}}, {{0, 1}}}}"
    );
  }

  #[test]
  fn identity_has_full_eigenspace() {
    assert_eq!(
      interpret("Eigensystem[{{1, 0, 0}, {0, 1, 0}, {0, 0, 1}}]").unwrap(),
      "{{1}, {{{1, 0, 0}, {0, 1, 0}, {0, 0, 1}}}}"
    );
  }

  #[test]
  fn singular_matrix() {
    assert_eq!(
      interpret("Eigensystem[{{1, 2}, {2, 4}}]").unwrap(),
      "{{0, 5}, {{{-2, 1}}, {{0.5, 1}}}}"
    );
  }

  #[test]
  fn rotation() {
    assert_eq!(
      interpret("Eigensystem[{{0, -1}, {1, 0}}]").unwrap(),
      "{{-I, I}, {{}, {}}}"
    );
  }
}
