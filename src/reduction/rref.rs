use log::trace;

use crate::EPS;
use crate::matrix::Matrix;

/// Bring `matrix` to reduced row-echelon form.
///
/// Works column by column with partial pivoting: the candidate of largest
/// magnitude at or below the current pivot row is swapped up, the pivot row
/// is normalised to a leading 1 and the pivot column is cleared in every
/// other row, above and below.
///
/// Takes the matrix by value; clone first if the original is still needed.
pub fn row_reduce(mut matrix: Matrix) -> Matrix {
  let rows = matrix.nrows();
  let cols = matrix.ncols();

  let mut col = 0;
  for n in 0..rows.min(cols) {
    let pivot_row = loop {
      if col >= cols {
        break None;
      }
      match pivot_candidate(&matrix, n, col) {
        Some(r) => break Some(r),
        None => {
          trace!("no pivot in column {} at or below row {}", col, n);
          col += 1;
        }
      }
    };

    let Some(pivot_row) = pivot_row else {
      trace!("no pivot possible in row {}", n);
      break;
    };

    if pivot_row != n {
      trace!("swapping rows {} and {}", n, pivot_row);
      matrix.swap_rows(n, pivot_row);
    }

    let p = matrix[(n, col)];
    trace!("pivot is {} at ({}, {})", p, n, col);
    matrix.scale_row(n, 1.0 / p);
    matrix[(n, col)] = 1.0;

    for m in 0..rows {
      if m == n {
        continue;
      }
      let k = matrix[(m, col)];
      matrix.sub_scaled_row(m, n, k);
      matrix[(m, col)] = 0.0;
    }
    trace!("after pivot ({}, {}):\n{}", n, col, matrix);

    col += 1;
  }

  matrix
}

fn pivot_candidate(matrix: &Matrix, from_row: usize, col: usize) -> Option<usize> {
  let mut best: Option<(usize, f64)> = None;
  for r in from_row..matrix.nrows() {
    let magnitude = matrix[(r, col)].abs();
    if magnitude < EPS {
      continue;
    }
    match best {
      Some((_, m)) if m >= magnitude => {}
      _ => best = Some((r, magnitude)),
    }
  }
  best.map(|(r, _)| r)
}
