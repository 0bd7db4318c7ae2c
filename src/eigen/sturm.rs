//! Sturm sequences: exact counts of distinct real roots.

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::eigen::polynomial::Polynomial;

/// `p, p', -rem(p, p'), ...` down to the last non-zero remainder.
#[derive(Debug, Clone)]
pub struct SturmSequence {
  chain: Vec<Polynomial>,
}

impl SturmSequence {
  pub fn new(p: &Polynomial) -> Self {
    let mut chain = vec![p.clone()];
    let mut next = p.derivative();
    while !next.is_zero() {
      let rem = match chain.last().and_then(|last| last.div_rem(&next)) {
        Some((_, rem)) => rem,
        None => break,
      };
      chain.push(next);
      next = -&rem;
    }
    Self { chain }
  }

  /// Distinct real roots in `(lo, hi]`.
  pub fn count_in(&self, lo: &BigRational, hi: &BigRational) -> usize {
    self.variations_at(lo).saturating_sub(self.variations_at(hi))
  }

  /// Distinct real roots on the whole line.
  pub fn count_real(&self) -> usize {
    self
      .variations_at_infinity(false)
      .saturating_sub(self.variations_at_infinity(true))
  }

  fn variations_at(&self, x: &BigRational) -> usize {
    sign_changes(self.chain.iter().map(|p| sign(&p.eval(x))))
  }

  fn variations_at_infinity(&self, positive: bool) -> usize {
    sign_changes(self.chain.iter().map(|p| {
      let lead = p.leading().map(sign).unwrap_or(0);
      let odd = p.degree().unwrap_or(0) % 2 == 1;
      if !positive && odd { -lead } else { lead }
    }))
  }
}

fn sign(x: &BigRational) -> i8 {
  if x.is_zero() {
    0
  } else if x.is_negative() {
    -1
  } else {
    1
  }
}

/// Sign changes in a sequence, zeros skipped.
fn sign_changes(signs: impl Iterator<Item = i8>) -> usize {
  let mut changes = 0;
  let mut last = 0;
  for s in signs.filter(|&s| s != 0) {
    if last != 0 && s != last {
      changes += 1;
    }
    last = s;
  }
  changes
}
