use super::*;

mod characteristic_polynomial {
  use super::*;

  #[test]
  fn symmetric_two_by_two() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{2, 1}, {1, 2}}]").unwrap(),
      "3 - 4*x + x^2"
    );
  }

  #[test]
  fn custom_variable() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{1, 2}, {3, 4}}, t]").unwrap(),
      "-2 - 5*t + t^2"
    );
  }

  #[test]
  fn odd_dimension_has_negative_leading_term() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{2, 0, 0}, {0, 3, 4}, {0, 4, 9}}]")
        .unwrap(),
      "22 - 35*x + 14*x^2 - x^3"
    );
  }

  #[test]
  fn identity() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{1, 0}, {0, 1}}]").unwrap(),
      "1 - 2*x + x^2"
    );
  }

  #[test]
  fn rotation() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{0, -1}, {1, 0}}]").unwrap(),
      "1 + x^2"
    );
  }

  #[test]
  fn zero_first_pivot() {
    // det({{-x, 1}, {1, -x}}) = x^2 - 1
    assert_eq!(
      interpret("CharacteristicPolynomial[{{0, 1}, {1, 0}}]").unwrap(),
      "-1 + x^2"
    );
  }

  #[test]
  fn fractional_entries_stay_exact() {
    assert_eq!(
      interpret("CharacteristicPolynomial[{{1/2, 0}, {0, 1/3}}]").unwrap(),
      "1/6 - 5/6*x + x^2"
    );
  }

  #[test]
  fn variable_must_be_a_symbol() {
    assert!(interpret("CharacteristicPolynomial[{{1}}, 2]").is_err());
  }
}
