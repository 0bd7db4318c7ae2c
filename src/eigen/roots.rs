//! Roots of an exact polynomial.
//!
//! The square-free part `q = p / gcd(p, p')` is taken first, exactly, so every
//! root to isolate is simple and reported once. Zero and degree-one roots are
//! read off exactly. Otherwise:
//!
//! * real roots are counted and isolated with a Sturm sequence of `q` and
//!   refined by exact bisection;
//! * non-real roots come from the Aberth–Ehrlich iteration, with every Newton
//!   correction `q(z)/q'(z)` evaluated exactly at the `f64` iterate and only
//!   then rounded, so clustered roots stay resolvable. They are reported as
//!   conjugate pairs.
//!
//! Precision: every reported root `z` is within `tolerance·(1 + |z|)` of a
//! true root, the bisection width for real roots and the Newton correction
//! `|q(z)/q'(z)|` for complex ones. Tolerances below `4·ε` are raised to
//! `4·ε`. A root that cannot reach this bound within `max_iterations` is a
//! `RootFindingError`. Real roots that are short fractions (denominator up to
//! 1000) and make `q` vanish are snapped to that fraction.

use std::f64::consts::TAU;

use log::{debug, trace};
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::LinalgError;
use crate::eigen::polynomial::Polynomial;
use crate::eigen::sturm::SturmSequence;

const SNAP_TOLERANCE: f64 = 1e-9;

const MAX_SNAP_DENOMINATOR: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinderConfig {
  /// Aberth sweeps, and bisection steps per real root, before giving up
  /// with `RootFindingError`.
  pub max_iterations: usize,
  /// Relative error bound every reported root must reach.
  pub tolerance: f64,
}

impl Default for RootFinderConfig {
  fn default() -> Self {
    Self {
      max_iterations: 500,
      tolerance: 1e-14,
    }
  }
}

impl RootFinderConfig {
  /// Absolute error allowed for a root near `z`.
  fn accuracy(&self, z: f64) -> f64 {
    self.tolerance.max(4.0 * f64::EPSILON) * (1.0 + z.abs())
  }
}

/// Distinct roots of `p`, sorted by real then imaginary part.
pub fn find_roots(
  p: &Polynomial,
  config: &RootFinderConfig,
) -> Result<Vec<Complex64>, LinalgError> {
  if p.is_zero() {
    return Err(LinalgError::RootFindingError(
      "the zero polynomial has no isolated roots".into(),
    ));
  }

  let mut q = p.square_free_part().monic();
  let mut roots = Vec::new();

  if q.degree().unwrap_or(0) >= 1 && q.coeff(0).is_zero() {
    roots.push(Complex64::new(0.0, 0.0));
    if let Some((deflated, _)) = q.div_rem(&Polynomial::x()) {
      q = deflated;
    }
  }

  match q.degree() {
    None | Some(0) => {}
    Some(1) => {
      let root = -(q.coeff(0) / q.coeff(1));
      roots.push(Complex64::new(to_f64(&root)?, 0.0));
    }
    Some(degree) => {
      let sturm = SturmSequence::new(&q);
      let n_real = sturm.count_real();
      if (degree - n_real) % 2 != 0 {
        return Err(LinalgError::RootFindingError(format!(
          "{} has {} real roots out of {}, which a real polynomial cannot",
          q, n_real, degree
        )));
      }
      trace!("{} has {} real root(s) of {}", q, n_real, degree);

      for x in real_roots(&q, &sturm, n_real, config)? {
        roots.push(Complex64::new(x, 0.0));
      }
      let pairs = (degree - n_real) / 2;
      if pairs > 0 {
        for z in complex_pairs(&q, pairs, config)? {
          roots.push(z);
          roots.push(z.conj());
        }
      }
    }
  }

  let mut roots: Vec<Complex64> = roots
    .into_iter()
    .map(|z| Complex64::new(z.re + 0.0, z.im + 0.0))
    .collect();
  roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));

  debug!("roots of {}: {:?}", p, roots);
  Ok(roots)
}

fn real_roots(
  q: &Polynomial,
  sturm: &SturmSequence,
  n_real: usize,
  config: &RootFinderConfig,
) -> Result<Vec<f64>, LinalgError> {
  let two = BigRational::from_integer(2.into());
  let bound = cauchy_bound(q);
  let mut pending = vec![(-bound.clone(), bound)];
  let mut isolated = Vec::with_capacity(n_real);
  let mut splits = 0;

  while let Some((lo, hi)) = pending.pop() {
    match sturm.count_in(&lo, &hi) {
      0 => {}
      1 => isolated.push((lo, hi)),
      _ => {
        splits += 1;
        if splits > config.max_iterations * n_real.max(1) {
          return Err(LinalgError::RootFindingError(format!(
            "real roots of {} not separated within {} bisections",
            q, splits
          )));
        }
        let mid = (&lo + &hi) / &two;
        pending.push((lo, mid.clone()));
        pending.push((mid, hi));
      }
    }
  }

  isolated
    .into_iter()
    .map(|(lo, hi)| refine_real(q, sturm, lo, hi, config))
    .collect()
}

/// Halve `(lo, hi]`, which holds exactly one root, until it is narrow enough.
fn refine_real(
  q: &Polynomial,
  sturm: &SturmSequence,
  mut lo: BigRational,
  mut hi: BigRational,
  config: &RootFinderConfig,
) -> Result<f64, LinalgError> {
  let two = BigRational::from_integer(2.into());

  for _ in 0..=config.max_iterations {
    if q.eval(&hi).is_zero() {
      return to_f64(&hi);
    }
    let mid = (&lo + &hi) / &two;
    let center = to_f64(&mid)?;
    let width = to_f64(&(&hi - &lo))?;
    if width <= config.accuracy(center) {
      return Ok(snap_real(q, &lo, &hi).unwrap_or(center));
    }
    if sturm.count_in(&lo, &mid) == 1 {
      hi = mid;
    } else {
      lo = mid;
    }
  }

  Err(LinalgError::RootFindingError(format!(
    "real root of {} in ({}, {}] not refined within {} bisections",
    q,
    lo.to_f64().unwrap_or(f64::NAN),
    hi.to_f64().unwrap_or(f64::NAN),
    config.max_iterations
  )))
}

/// The short fraction inside `(lo, hi]` that is an exact root, if any.
fn snap_real(q: &Polynomial, lo: &BigRational, hi: &BigRational) -> Option<f64> {
  let center = ((lo + hi) / BigRational::from_integer(2.into())).to_f64()?;
  let r = nearest_short_fraction(center)?;
  if &r > lo && &r <= hi && q.eval(&r).is_zero() {
    r.to_f64()
  } else {
    None
  }
}

/// Upper half-plane representatives of the `pairs` conjugate pairs of `q`.
fn complex_pairs(
  q: &Polynomial,
  pairs: usize,
  config: &RootFinderConfig,
) -> Result<Vec<Complex64>, LinalgError> {
  let mut upper: Vec<(Complex64, f64)> = aberth(q, config)?
    .into_iter()
    .filter(|(z, _)| z.im > 0.0)
    .collect();
  upper.sort_by(|a, b| b.0.im.total_cmp(&a.0.im));

  if upper.len() < pairs {
    return Err(LinalgError::RootFindingError(format!(
      "{} has {} conjugate pair(s) but only {} were isolated",
      q,
      pairs,
      upper.len()
    )));
  }

  upper
    .into_iter()
    .take(pairs)
    .map(|(z, error)| {
      if error > config.accuracy(z.norm()) {
        return Err(LinalgError::RootFindingError(format!(
          "root {} of {} only resolved to within {:e}",
          z, q, error
        )));
      }
      if z.im <= error {
        return Err(LinalgError::RootFindingError(format!(
          "root {} of {} is not separated from the real axis",
          z, q
        )));
      }
      let re = if z.re.abs() <= error { 0.0 } else { z.re };
      Ok(Complex64::new(re, z.im))
    })
    .collect()
}

/// All roots of `q` with their error estimates `|q(z)/q'(z)|`.
fn aberth(
  q: &Polynomial,
  config: &RootFinderConfig,
) -> Result<Vec<(Complex64, f64)>, LinalgError> {
  let coeffs = q.to_f64_coeffs();
  if coeffs.iter().any(|c| !c.is_finite()) {
    return Err(LinalgError::RootFindingError(format!(
      "coefficients of {} do not fit in f64",
      q
    )));
  }
  let derivative = q.derivative();

  let n = coeffs.len() - 1;
  let radius = fujiwara_bound(&coeffs);
  let mut z: Vec<Complex64> = (0..n)
    .map(|k| Complex64::from_polar(radius, TAU * k as f64 / n as f64 + 0.4))
    .collect();
  let mut converged = vec![false; n];

  for iteration in 0..config.max_iterations {
    for k in 0..n {
      if converged[k] {
        continue;
      }

      let Some(ratio) = newton_ratio(q, &derivative, z[k])? else {
        // Stationary point: nudge off it and retry next sweep.
        z[k] += Complex64::new(radius * 1e-3, radius * 1e-3);
        continue;
      };
      if ratio.norm() <= config.accuracy(z[k].norm()) {
        converged[k] = true;
        continue;
      }

      let repulsion: Complex64 = (0..n)
        .filter(|&j| j != k)
        .map(|j| z[k] - z[j])
        .filter(|d| d.norm() > 0.0)
        .map(|d| d.inv())
        .sum();
      let step = ratio / (Complex64::new(1.0, 0.0) - ratio * repulsion);
      z[k] -= if step.is_finite() { step } else { ratio };
    }

    if converged.iter().all(|&c| c) {
      trace!("aberth converged after {} sweep(s)", iteration + 1);
      return z
        .into_iter()
        .map(|root| polish(q, &derivative, root))
        .collect();
    }
  }

  Err(LinalgError::RootFindingError(format!(
    "roots of {} not isolated within {} iterations",
    q, config.max_iterations
  )))
}

/// `q(z) / q'(z)`, computed exactly and rounded once. `None` where `q'`
/// vanishes.
fn newton_ratio(
  q: &Polynomial,
  derivative: &Polynomial,
  z: Complex64,
) -> Result<Option<Complex64>, LinalgError> {
  let (re, im) = match (
    BigRational::from_float(z.re),
    BigRational::from_float(z.im),
  ) {
    (Some(re), Some(im)) => (re, im),
    _ => {
      return Err(LinalgError::RootFindingError(format!(
        "iterate {} for {} is not finite",
        z, q
      )));
    }
  };

  let (a, b) = q.eval_gaussian(&re, &im);
  let (c, d) = derivative.eval_gaussian(&re, &im);
  let norm = &c * &c + &d * &d;
  if norm.is_zero() {
    return Ok(None);
  }
  let ratio_re = (&a * &c + &b * &d) / &norm;
  let ratio_im = (&b * &c - &a * &d) / &norm;
  Ok(Some(Complex64::new(to_f64(&ratio_re)?, to_f64(&ratio_im)?)))
}

/// Up to two exact Newton steps, each kept only if it shrinks the
/// correction. Returns the root and its final correction size.
fn polish(
  q: &Polynomial,
  derivative: &Polynomial,
  mut z: Complex64,
) -> Result<(Complex64, f64), LinalgError> {
  let Some(mut ratio) = newton_ratio(q, derivative, z)? else {
    return Ok((z, f64::INFINITY));
  };
  for _ in 0..2 {
    let candidate = z - ratio;
    let Some(next) = newton_ratio(q, derivative, candidate)? else {
      break;
    };
    if next.norm() >= ratio.norm() {
      break;
    }
    z = candidate;
    ratio = next;
  }
  Ok((z, ratio.norm()))
}

/// `1 + max |cᵢ / cₙ|`: every real root lies strictly inside.
fn cauchy_bound(q: &Polynomial) -> BigRational {
  let one = BigRational::from_integer(1.into());
  let Some(lead) = q.leading() else {
    return one;
  };
  let degree = q.degree().unwrap_or(0);
  let largest = (0..degree)
    .map(|k| (q.coeff(k) / lead).abs())
    .max()
    .unwrap_or_else(BigRational::zero);
  one + largest
}

/// Fujiwara's bound on the root moduli of a monic polynomial.
fn fujiwara_bound(coeffs: &[f64]) -> f64 {
  let n = coeffs.len() - 1;
  let mut bound: f64 = 0.0;
  for k in 1..=n {
    let c = coeffs[n - k].abs();
    let term = if k == n {
      (c / 2.0).powf(1.0 / k as f64)
    } else {
      c.powf(1.0 / k as f64)
    };
    bound = bound.max(term);
  }
  if bound > 0.0 { 2.0 * bound } else { 1.0 }
}

fn to_f64(x: &BigRational) -> Result<f64, LinalgError> {
  x.to_f64().filter(|v| v.is_finite()).ok_or_else(|| {
    LinalgError::RootFindingError(format!("{} does not fit in f64", x))
  })
}

/// Closest fraction with a small denominator that agrees with `x` to within
/// `SNAP_TOLERANCE` relative precision.
fn nearest_short_fraction(x: f64) -> Option<BigRational> {
  if !x.is_finite() || x.abs() > 1e12 {
    return None;
  }
  let tolerance = SNAP_TOLERANCE * (1.0 + x.abs());

  let (mut h_prev, mut h) = (0i64, 1i64);
  let (mut k_prev, mut k) = (1i64, 0i64);
  let mut rest = x;
  for _ in 0..32 {
    let a = rest.floor() as i64;
    let h_next = a.checked_mul(h)?.checked_add(h_prev)?;
    let k_next = a.checked_mul(k)?.checked_add(k_prev)?;
    if k_next > MAX_SNAP_DENOMINATOR {
      return None;
    }
    if (h_next as f64 / k_next as f64 - x).abs() <= tolerance {
      return Some(BigRational::new(h_next.into(), k_next.into()));
    }
    (h_prev, h) = (h, h_next);
    (k_prev, k) = (k, k_next);

    let frac = rest - rest.floor();
    if frac == 0.0 {
      return None;
    }
    rest = 1.0 / frac;
  }
  None
}
