//! Dense univariate polynomials with exact rational coefficients.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::syntax::format_rational;

/// Coefficients are stored in ascending order of power with no trailing
/// zeros, so the zero polynomial has no coefficients at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
  coeffs: Vec<BigRational>,
}

impl Polynomial {
  pub fn new(mut coeffs: Vec<BigRational>) -> Self {
    while coeffs.last().is_some_and(|c| c.is_zero()) {
      coeffs.pop();
    }
    Self { coeffs }
  }

  pub fn zero() -> Self {
    Self { coeffs: Vec::new() }
  }

  pub fn one() -> Self {
    Self::constant(BigRational::one())
  }

  pub fn constant(c: BigRational) -> Self {
    Self::new(vec![c])
  }

  /// The polynomial `x`.
  pub fn x() -> Self {
    Self::new(vec![BigRational::zero(), BigRational::one()])
  }

  pub fn from_i64(coeffs: &[i64]) -> Self {
    Self::new(
      coeffs
        .iter()
        .map(|&c| BigRational::from_integer(c.into()))
        .collect(),
    )
  }

  pub fn is_zero(&self) -> bool {
    self.coeffs.is_empty()
  }

  /// `None` for the zero polynomial.
  pub fn degree(&self) -> Option<usize> {
    self.coeffs.len().checked_sub(1)
  }

  pub fn coeff(&self, power: usize) -> BigRational {
    self
      .coeffs
      .get(power)
      .cloned()
      .unwrap_or_else(BigRational::zero)
  }

  pub fn leading(&self) -> Option<&BigRational> {
    self.coeffs.last()
  }

  pub fn scale(&self, k: &BigRational) -> Self {
    Self::new(self.coeffs.iter().map(|c| c * k).collect())
  }

  /// Divide by the leading coefficient. The zero polynomial stays zero.
  pub fn monic(&self) -> Self {
    match self.leading() {
      Some(lead) if !lead.is_one() => {
        let inv = lead.recip();
        self.scale(&inv)
      }
      _ => self.clone(),
    }
  }

  pub fn derivative(&self) -> Self {
    Self::new(
      self
        .coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| c * BigRational::from_integer(k.into()))
        .collect(),
    )
  }

  /// Euclidean division. `None` when dividing by the zero polynomial.
  pub fn div_rem(&self, divisor: &Polynomial) -> Option<(Polynomial, Polynomial)> {
    let d_deg = divisor.degree()?;
    let lead = divisor.leading()?;
    if self.coeffs.len() < divisor.coeffs.len() {
      return Some((Polynomial::zero(), self.clone()));
    }

    let mut rem = self.coeffs.clone();
    let mut quot = vec![BigRational::zero(); self.coeffs.len() - d_deg];
    for k in (0..quot.len()).rev() {
      let c = &rem[k + d_deg] / lead;
      if !c.is_zero() {
        for (i, d) in divisor.coeffs.iter().enumerate() {
          rem[k + i] = &rem[k + i] - &(&c * d);
        }
      }
      quot[k] = c;
    }
    rem.truncate(d_deg);

    Some((Polynomial::new(quot), Polynomial::new(rem)))
  }

  /// Monic greatest common divisor; `gcd(0, 0) = 0`.
  pub fn gcd(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let mut a = a.monic();
    let mut b = b.monic();
    while !b.is_zero() {
      let r = match a.div_rem(&b) {
        Some((_, r)) => r,
        None => break,
      };
      a = b;
      b = r.monic();
    }
    a
  }

  /// `p / gcd(p, p')`: the same roots as `p`, each with multiplicity one.
  pub fn square_free_part(&self) -> Polynomial {
    if self.degree().unwrap_or(0) == 0 {
      return self.clone();
    }
    let g = Polynomial::gcd(self, &self.derivative());
    match self.div_rem(&g) {
      Some((q, _)) => q,
      None => self.clone(),
    }
  }

  /// Exact evaluation by Horner's rule.
  pub fn eval(&self, x: &BigRational) -> BigRational {
    self
      .coeffs
      .iter()
      .rev()
      .fold(BigRational::zero(), |acc, c| acc * x + c)
  }

  /// Exact value at the Gaussian rational `re + im·i`, as `(re, im)`.
  pub fn eval_gaussian(
    &self,
    re: &BigRational,
    im: &BigRational,
  ) -> (BigRational, BigRational) {
    let mut acc_re = BigRational::zero();
    let mut acc_im = BigRational::zero();
    for c in self.coeffs.iter().rev() {
      let next_re = &acc_re * re - &acc_im * im + c;
      let next_im = &acc_re * im + &acc_im * re;
      acc_re = next_re;
      acc_im = next_im;
    }
    (acc_re, acc_im)
  }

  /// Coefficients rounded to `f64`, ascending.
  pub fn to_f64_coeffs(&self) -> Vec<f64> {
    self
      .coeffs
      .iter()
      .map(|c| c.to_f64().unwrap_or(f64::NAN))
      .collect()
  }

  /// Render in ascending powers of `var`, e.g. `3 - 4*x + x^2`.
  pub fn to_string_in(&self, var: &str) -> String {
    if self.is_zero() {
      return "0".to_string();
    }

    let mut out = String::new();
    for (k, c) in self.coeffs.iter().enumerate() {
      if c.is_zero() {
        continue;
      }
      let magnitude = c.abs();
      let power = match k {
        0 => String::new(),
        1 => var.to_string(),
        _ => format!("{var}^{k}"),
      };
      let term = if k == 0 {
        format_rational(&magnitude)
      } else if magnitude.is_one() {
        power
      } else {
        format!("{}*{}", format_rational(&magnitude), power)
      };

      if out.is_empty() {
        if c.is_negative() {
          out.push('-');
        }
      } else if c.is_negative() {
        out.push_str(" - ");
      } else {
        out.push_str(" + ");
      }
      out.push_str(&term);
    }
    out
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_string_in("x"))
  }
}

impl Add for &Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: &Polynomial) -> Polynomial {
    let len = self.coeffs.len().max(rhs.coeffs.len());
    Polynomial::new(
      (0..len)
        .map(|k| match (self.coeffs.get(k), rhs.coeffs.get(k)) {
          (Some(a), Some(b)) => a + b,
          (Some(a), None) => a.clone(),
          (None, Some(b)) => b.clone(),
          (None, None) => BigRational::zero(),
        })
        .collect(),
    )
  }
}

impl Sub for &Polynomial {
  type Output = Polynomial;

  fn sub(self, rhs: &Polynomial) -> Polynomial {
    self + &(-rhs)
  }
}

impl Neg for &Polynomial {
  type Output = Polynomial;

  fn neg(self) -> Polynomial {
    Polynomial {
      coeffs: self.coeffs.iter().map(|c| -c).collect(),
    }
  }
}

impl Mul for &Polynomial {
  type Output = Polynomial;

  fn mul(self, rhs: &Polynomial) -> Polynomial {
    if self.is_zero() || rhs.is_zero() {
      return Polynomial::zero();
    }
    let mut out =
      vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
    for (i, a) in self.coeffs.iter().enumerate() {
      if a.is_zero() {
        continue;
      }
      for (j, b) in rhs.coeffs.iter().enumerate() {
        out[i + j] = &out[i + j] + &(a * b);
      }
    }
    Polynomial::new(out)
  }
}
