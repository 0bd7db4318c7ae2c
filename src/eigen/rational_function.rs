use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;
use num_traits::One;

use crate::eigen::polynomial::Polynomial;

/// Quotient of two polynomials, the scalar field the characteristic
/// polynomial is eliminated over.
///
/// Always in lowest terms with a monic denominator, so equal functions have
/// equal representations and a function is zero iff its numerator is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalFunction {
  num: Polynomial,
  den: Polynomial,
}

impl RationalFunction {
  /// `None` when `den` is the zero polynomial.
  pub fn new(num: Polynomial, den: Polynomial) -> Option<Self> {
    let lead = den.leading()?.clone();
    if num.is_zero() {
      return Some(Self::zero());
    }

    let g = Polynomial::gcd(&num, &den);
    let (num, den) = match (num.div_rem(&g), den.div_rem(&g)) {
      (Some((n, _)), Some((d, _))) => (n, d),
      _ => (num, den),
    };
    let lead = den.leading().cloned().unwrap_or(lead);
    let inv = lead.recip();

    Some(Self {
      num: num.scale(&inv),
      den: den.scale(&inv),
    })
  }

  pub fn from_polynomial(p: Polynomial) -> Self {
    Self {
      num: p,
      den: Polynomial::one(),
    }
  }

  pub fn constant(c: BigRational) -> Self {
    Self::from_polynomial(Polynomial::constant(c))
  }

  pub fn zero() -> Self {
    Self::from_polynomial(Polynomial::zero())
  }

  pub fn one() -> Self {
    Self::constant(BigRational::one())
  }

  pub fn is_zero(&self) -> bool {
    self.num.is_zero()
  }

  pub fn numerator(&self) -> &Polynomial {
    &self.num
  }

  pub fn denominator(&self) -> &Polynomial {
    &self.den
  }

  /// `None` when dividing by zero.
  pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
    if rhs.is_zero() {
      return None;
    }
    RationalFunction::new(&self.num * &rhs.den, &self.den * &rhs.num)
  }

  /// The polynomial this function equals, if its denominator divides the
  /// numerator exactly.
  pub fn to_polynomial(&self) -> Option<Polynomial> {
    let (q, r) = self.num.div_rem(&self.den)?;
    r.is_zero().then_some(q)
  }
}

// Operands always carry non-zero denominators, so products of them do too.
fn reduced(num: Polynomial, den: Polynomial) -> RationalFunction {
  RationalFunction::new(num, den).unwrap_or_else(RationalFunction::zero)
}

impl Neg for &RationalFunction {
  type Output = RationalFunction;

  fn neg(self) -> RationalFunction {
    RationalFunction {
      num: -&self.num,
      den: self.den.clone(),
    }
  }
}

impl Add for &RationalFunction {
  type Output = RationalFunction;

  fn add(self, rhs: &RationalFunction) -> RationalFunction {
    if self.den == rhs.den {
      return reduced(&self.num + &rhs.num, self.den.clone());
    }
    reduced(
      &(&self.num * &rhs.den) + &(&rhs.num * &self.den),
      &self.den * &rhs.den,
    )
  }
}

impl Sub for &RationalFunction {
  type Output = RationalFunction;

  fn sub(self, rhs: &RationalFunction) -> RationalFunction {
    self + &(-rhs)
  }
}

impl Mul for &RationalFunction {
  type Output = RationalFunction;

  fn mul(self, rhs: &RationalFunction) -> RationalFunction {
    reduced(&self.num * &rhs.num, &self.den * &rhs.den)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn poly(coeffs: &[i64]) -> Polynomial {
    Polynomial::from_i64(coeffs)
  }

  #[test]
  fn test_lowest_terms() {
    // (x^2 - 1) / (2x - 2) = (x + 1) / 2 = (1/2)(x + 1) / 1
    let f = RationalFunction::new(poly(&[-1, 0, 1]), poly(&[-2, 2])).unwrap();
    assert_eq!(f.denominator(), &Polynomial::one());
    assert_eq!(
      f.to_polynomial().unwrap(),
      Polynomial::new(vec![
        BigRational::new(1.into(), 2.into()),
        BigRational::new(1.into(), 2.into()),
      ])
    );
  }

  #[test]
  fn test_zero_denominator_rejected() {
    assert!(RationalFunction::new(poly(&[1]), Polynomial::zero()).is_none());
    assert!(
      RationalFunction::one()
        .checked_div(&RationalFunction::zero())
        .is_none()
    );
  }

  #[test]
  fn test_arithmetic_round_trip() {
    let a = RationalFunction::new(poly(&[1]), poly(&[0, 1])).unwrap(); // 1/x
    let b = RationalFunction::from_polynomial(poly(&[0, 1])); // x
    assert_eq!(&a * &b, RationalFunction::one());
    let sum = &a + &b; // (1 + x^2) / x
    assert_eq!(sum.numerator(), &poly(&[1, 0, 1]));
    assert_eq!(sum.denominator(), &poly(&[0, 1]));
    assert!((&sum - &sum).is_zero());
    assert_eq!(
      sum.checked_div(&a).unwrap().to_polynomial().unwrap(),
      poly(&[1, 0, 1])
    );
    assert!(a.to_polynomial().is_none());
  }
}
