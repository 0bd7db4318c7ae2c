use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use pest::iterators::Pair;

use crate::eigen::polynomial::Polynomial;
use crate::{EPS, LinalgError, Rule};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Integer(i128),
  /// Exact fraction, always in lowest terms.
  Rational(BigRational),
  Real(f64),
  Complex { re: f64, im: f64 },
  Identifier(String),
  List(Vec<Expr>),
  FunctionCall { name: String, args: Vec<Expr> },
  Polynomial { poly: Polynomial, var: String },
}

pub fn parse_expr(input: &str) -> Result<Expr, LinalgError> {
  let mut pairs = crate::parse(input)?;
  let program = pairs.next().ok_or(LinalgError::EmptyInput)?;
  let expression = program
    .into_inner()
    .find(|p| p.as_rule() == Rule::Expression)
    .ok_or(LinalgError::EmptyInput)?;
  pair_to_expr(expression)
}

pub fn pair_to_expr(pair: Pair<Rule>) -> Result<Expr, LinalgError> {
  match pair.as_rule() {
    Rule::Expression => {
      let inner = pair.into_inner().next().ok_or_else(|| {
        LinalgError::EvaluationError("empty expression".into())
      })?;
      pair_to_expr(inner)
    }
    Rule::Integer => {
      let text = pair.as_str();
      match text.parse::<i128>() {
        Ok(n) => Ok(Expr::Integer(n)),
        // Too large for i128: keep it exact anyway
        Err(_) => {
          let big = text.parse::<BigInt>().map_err(|e| {
            LinalgError::EvaluationError(format!("invalid integer {text}: {e}"))
          })?;
          Ok(Expr::Rational(BigRational::from_integer(big)))
        }
      }
    }
    Rule::Real => {
      let text = pair.as_str();
      text.parse::<f64>().map(Expr::Real).map_err(|e| {
        LinalgError::EvaluationError(format!("invalid real {text}: {e}"))
      })
    }
    Rule::Fraction => {
      let mut parts = pair.into_inner();
      let numer = parse_big_int(parts.next())?;
      let denom = parse_big_int(parts.next())?;
      if denom.is_zero() {
        return Err(LinalgError::EvaluationError(
          "division by zero in fraction".into(),
        ));
      }
      Ok(normalize_rational(BigRational::new(numer, denom)))
    }
    Rule::Identifier => Ok(Expr::Identifier(pair.as_str().to_string())),
    Rule::List => {
      let items = pair
        .into_inner()
        .map(pair_to_expr)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::List(items))
    }
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner
        .next()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| {
          LinalgError::EvaluationError("function call without a head".into())
        })?;
      let args = inner.map(pair_to_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall { name, args })
    }
    other => Err(LinalgError::EvaluationError(format!(
      "unexpected syntax element {:?}",
      other
    ))),
  }
}

fn parse_big_int(pair: Option<Pair<Rule>>) -> Result<BigInt, LinalgError> {
  let pair = pair.ok_or_else(|| {
    LinalgError::EvaluationError("incomplete fraction".into())
  })?;
  pair.as_str().parse::<BigInt>().map_err(|e| {
    LinalgError::EvaluationError(format!("invalid integer {}: {e}", pair.as_str()))
  })
}

/// Collapse a rational with denominator 1 into an `Integer` when it fits.
pub fn normalize_rational(r: BigRational) -> Expr {
  if r.is_integer() {
    if let Some(n) = r.to_integer().to_i128() {
      return Expr::Integer(n);
    }
  }
  Expr::Rational(r)
}

/// Numeric value of a scalar expression, if it has one.
pub fn expr_to_f64(expr: &Expr) -> Option<f64> {
  match expr {
    Expr::Integer(n) => Some(*n as f64),
    Expr::Rational(r) => r.to_f64(),
    Expr::Real(f) => Some(*f),
    _ => None,
  }
}

/// Format a real the way results are printed: near-integers lose their
/// fractional part, `-0` becomes `0`.
pub fn format_real(value: f64) -> String {
  if value.is_nan() {
    return "Indeterminate".to_string();
  }
  if value.is_infinite() {
    return if value > 0.0 {
      "Infinity".to_string()
    } else {
      "-Infinity".to_string()
    };
  }
  let rounded = value.round();
  if (value - rounded).abs() < EPS && rounded.abs() < 1e15 {
    let n = rounded as i64;
    return n.to_string();
  }
  if value.abs() >= 1e15 || value.abs() < 1e-5 {
    return format!("{:e}", value);
  }
  format!("{}", value)
}

pub fn format_complex(re: f64, im: f64) -> String {
  if im.abs() < EPS {
    return format_real(re);
  }
  let imag = match format_real(im.abs()).as_str() {
    "1" => "I".to_string(),
    s => format!("{s}*I"),
  };
  if re.abs() < EPS {
    if im < 0.0 {
      format!("-{imag}")
    } else {
      imag
    }
  } else if im < 0.0 {
    format!("{} - {}", format_real(re), imag)
  } else {
    format!("{} + {}", format_real(re), imag)
  }
}

pub fn format_rational(r: &BigRational) -> String {
  if r.is_integer() {
    r.to_integer().to_string()
  } else {
    format!("{}/{}", r.numer(), r.denom())
  }
}

pub fn expr_to_string(expr: &Expr) -> String {
  match expr {
    Expr::Integer(n) => n.to_string(),
    Expr::Rational(r) => format_rational(r),
    Expr::Real(f) => format_real(*f),
    Expr::Complex { re, im } => format_complex(*re, *im),
    Expr::Identifier(name) => name.clone(),
    Expr::List(items) => {
      let parts: Vec<String> = items.iter().map(expr_to_string).collect();
      format!("{{{}}}", parts.join(", "))
    }
    Expr::FunctionCall { name, args } => {
      let parts: Vec<String> = args.iter().map(expr_to_string).collect();
      format!("{}[{}]", name, parts.join(", "))
    }
    Expr::Polynomial { poly, var } => poly.to_string_in(var),
  }
}

