use log::{debug, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::eigen::polynomial::Polynomial;
use crate::eigen::rational_function::RationalFunction;
use crate::matrix::Matrix;
use crate::LinalgError;

/// Largest denominator tried when recovering a short fraction from an `f64`.
const MAX_RECOVERED_DENOMINATOR: i128 = 1_000_000;

/// `det(A − λI)` as an exact polynomial in `λ`.
///
/// `A − λI` is brought to upper-triangular form over rational functions of
/// `λ`; the determinant is the product of the pivots times the sign picked up
/// by row swaps.
pub fn characteristic_polynomial(a: &Matrix) -> Result<Polynomial, LinalgError> {
  require_square(a)?;

  let lambda = RationalFunction::from_polynomial(Polynomial::x());
  let mut c = exact_entries(a)?;
  for (i, row) in c.iter_mut().enumerate() {
    row[i] = &row[i] - &lambda;
  }

  let det = triangular_determinant(c);
  let p = det.to_polynomial().ok_or_else(|| {
    LinalgError::EvaluationError(
      "characteristic polynomial did not reduce to a polynomial".into(),
    )
  })?;
  debug!("characteristic polynomial of {}x{}: {}", a.nrows(), a.ncols(), p);
  Ok(p)
}

/// Exact determinant of `a`, by the same elimination.
pub fn determinant(a: &Matrix) -> Result<BigRational, LinalgError> {
  require_square(a)?;
  let det = triangular_determinant(exact_entries(a)?);
  Ok(
    det
      .to_polynomial()
      .map(|p| p.coeff(0))
      .unwrap_or_else(BigRational::zero),
  )
}

fn require_square(a: &Matrix) -> Result<(), LinalgError> {
  if a.is_square() {
    Ok(())
  } else {
    Err(LinalgError::DimensionError(format!(
      "expected a square matrix, got {}x{}",
      a.nrows(),
      a.ncols()
    )))
  }
}

fn exact_entries(a: &Matrix) -> Result<Vec<Vec<RationalFunction>>, LinalgError> {
  a.rows()
    .map(|row| {
      row
        .iter()
        .map(|&v| {
          rational_from_f64(v).map(RationalFunction::constant).ok_or_else(|| {
            LinalgError::EvaluationError(format!("matrix entry {v} is not finite"))
          })
        })
        .collect()
    })
    .collect()
}

fn triangular_determinant(mut c: Vec<Vec<RationalFunction>>) -> RationalFunction {
  let n = c.len();
  let mut negate = false;
  let mut pivots = Vec::with_capacity(n);

  for k in 0..n {
    if c[k][k].is_zero() {
      if let Some(r) = (k + 1..n).find(|&r| !c[r][k].is_zero()) {
        trace!("swapping rows {} and {}", k, r);
        c.swap(k, r);
        negate = !negate;
      }
    }

    let p = c[k][k].clone();
    if p.is_zero() {
      // Singular along this path: the zero pivot zeroes the product.
      trace!("no pivot in column {}", k);
      pivots.push(p);
      continue;
    }

    for m in k + 1..n {
      if c[m][k].is_zero() {
        continue;
      }
      let Some(factor) = c[m][k].checked_div(&p) else {
        continue;
      };
      for j in k..n {
        c[m][j] = &c[m][j] - &(&factor * &c[k][j]);
      }
    }
    pivots.push(p);
  }

  let product = pivots
    .iter()
    .fold(RationalFunction::one(), |acc, p| &acc * p);
  if negate {
    -&product
  } else {
    product
  }
}

/// Exact rational value of `x`.
///
/// Short fractions that round-trip through `f64` (`0.1 → 1/10`,
/// `1.0 / 3.0 → 1/3`) are recovered; anything else keeps its exact binary
/// expansion. `None` for NaN and infinities.
pub fn rational_from_f64(x: f64) -> Option<BigRational> {
  if !x.is_finite() {
    return None;
  }
  if x.fract() == 0.0 && x.abs() < 1e18 {
    return Some(BigRational::from_integer(BigInt::from(x as i128)));
  }

  // Continued-fraction convergents h/k of x.
  let (mut h_prev, mut h) = (0i128, 1i128);
  let (mut k_prev, mut k) = (1i128, 0i128);
  let mut rest = x;
  for _ in 0..64 {
    let a = rest.floor();
    if a.abs() > 1e15 {
      break;
    }
    let a = a as i128;
    let (h_next, k_next) = match (
      a.checked_mul(h).and_then(|v| v.checked_add(h_prev)),
      a.checked_mul(k).and_then(|v| v.checked_add(k_prev)),
    ) {
      (Some(hn), Some(kn)) => (hn, kn),
      _ => break,
    };
    if k_next > MAX_RECOVERED_DENOMINATOR {
      break;
    }
    if h_next as f64 / k_next as f64 == x {
      return Some(BigRational::new(h_next.into(), k_next.into()));
    }
    (h_prev, h) = (h, h_next);
    (k_prev, k) = (k, k_next);

    let frac = rest - rest.floor();
    if frac == 0.0 {
      break;
    }
    rest = 1.0 / frac;
  }

  BigRational::from_float(x)
}
