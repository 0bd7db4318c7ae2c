use lineq::parse;

#[cfg(test)]
mod tests {
  use lineq::Rule;
  use lineq::syntax::{Expr, parse_expr};

  use super::*;

  #[test]
  fn test_parse_matrix_literal() {
    let pair = parse("{{1, 2}, {3, 4}}").unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Program);
  }

  #[test]
  fn test_parse_function_call() {
    let pair = parse("RowReduce[{{1, 2}, {3, 4}}]").unwrap().next().unwrap();
    assert_eq!(pair.as_rule(), Rule::Program);
  }

  #[test]
  fn test_parse_two_arguments() {
    let pair = parse("LinearSolve[{{1, 0}, {0, 1}}, {5, 6}]")
      .unwrap()
      .next()
      .unwrap();
    assert_eq!(pair.as_rule(), Rule::Program);
  }

  #[test]
  fn test_parse_numbers() {
    assert!(parse("{1, -2, 3.5, -.5, 1e-3, 2.5E+2, 1/3, -4/6}").is_ok());
  }

  #[test]
  fn test_parse_multiline() {
    assert!(parse("Eigenvalues[\n  {{2, 1},\n   {1, 2}}\n]").is_ok());
  }

  #[test]
  fn test_unbalanced_braces() {
    assert!(parse("{{1, 2}, {3, 4}").is_err());
  }

  #[test]
  fn test_trailing_garbage() {
    assert!(parse("{1, 2} }").is_err());
  }

  #[test]
  fn test_missing_separator() {
    assert!(parse("{1 2}").is_err());
  }

  #[test]
  fn test_expr_integer_and_real() {
    assert_eq!(
      parse_expr("{7, -1.5}").unwrap(),
      Expr::List(vec![Expr::Integer(7), Expr::Real(-1.5)])
    );
  }

  #[test]
  fn test_expr_fraction_is_reduced() {
    assert_eq!(parse_expr("4/2").unwrap(), Expr::Integer(2));
    assert_eq!(
      lineq::syntax::expr_to_string(&parse_expr("-4/6").unwrap()),
      "-2/3"
    );
  }

  #[test]
  fn test_expr_zero_denominator() {
    assert!(parse_expr("1/0").is_err());
  }

  #[test]
  fn test_expr_function_call() {
    assert_eq!(
      parse_expr("CharacteristicPolynomial[{{1}}, t]").unwrap(),
      Expr::FunctionCall {
        name: "CharacteristicPolynomial".to_string(),
        args: vec![
          Expr::List(vec![Expr::List(vec![Expr::Integer(1)])]),
          Expr::Identifier("t".to_string()),
        ],
      }
    );
  }
}
