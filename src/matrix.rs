//! Dense row-major `f64` matrix with the elementary row operations used by
//! the reducer.
//!
//! Dimensions are fixed at construction. Rows only change through the
//! explicit in-place operations (`swap_rows`, `scale_row`, `sub_scaled_row`);
//! everything else returns a new value.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::LinalgError;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
  rows: usize,
  cols: usize,
  data: Vec<f64>,
}

impl Matrix {
  /// Build a matrix from a rectangular sequence of rows.
  pub fn from_rows<R>(rows: Vec<R>) -> Result<Self, LinalgError>
  where
    R: AsRef<[f64]>,
  {
    let nrows = rows.len();
    let ncols = match rows.first() {
      Some(first) => first.as_ref().len(),
      None => {
        return Err(LinalgError::DimensionError(
          "matrix must have at least one row".into(),
        ));
      }
    };
    if ncols == 0 {
      return Err(LinalgError::DimensionError(
        "matrix must have at least one column".into(),
      ));
    }

    let mut data = Vec::with_capacity(nrows * ncols);
    for (i, row) in rows.iter().enumerate() {
      let row = row.as_ref();
      if row.len() != ncols {
        return Err(LinalgError::DimensionError(format!(
          "row {} has {} entries, expected {}",
          i,
          row.len(),
          ncols
        )));
      }
      data.extend_from_slice(row);
    }

    Ok(Self {
      rows: nrows,
      cols: ncols,
      data,
    })
  }

  pub fn zeros(rows: usize, cols: usize) -> Self {
    Self {
      rows,
      cols,
      data: vec![0.0; rows * cols],
    }
  }

  pub fn identity(size: usize) -> Self {
    let mut m = Self::zeros(size, size);
    for i in 0..size {
      m[(i, i)] = 1.0;
    }
    m
  }

  pub fn nrows(&self) -> usize {
    self.rows
  }

  pub fn ncols(&self) -> usize {
    self.cols
  }

  pub fn is_square(&self) -> bool {
    self.rows == self.cols
  }

  pub fn get(&self, row: usize, col: usize) -> Option<f64> {
    if row < self.rows && col < self.cols {
      Some(self.data[row * self.cols + col])
    } else {
      None
    }
  }

  pub fn row(&self, row: usize) -> &[f64] {
    &self.data[row * self.cols..(row + 1) * self.cols]
  }

  pub fn column(&self, col: usize) -> Vec<f64> {
    (0..self.rows).map(|i| self[(i, col)]).collect()
  }

  pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
    self.data.chunks(self.cols)
  }

  pub fn to_rows(&self) -> Vec<Vec<f64>> {
    self.rows().map(|r| r.to_vec()).collect()
  }

  pub fn swap_rows(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    for j in 0..self.cols {
      self.data.swap(a * self.cols + j, b * self.cols + j);
    }
  }

  /// `row ← k·row`
  pub fn scale_row(&mut self, row: usize, k: f64) {
    for value in &mut self.data[row * self.cols..(row + 1) * self.cols] {
      *value *= k;
    }
  }

  /// `target ← target − k·source`
  pub fn sub_scaled_row(&mut self, target: usize, source: usize, k: f64) {
    if k == 0.0 {
      return;
    }
    for j in 0..self.cols {
      let delta = k * self.data[source * self.cols + j];
      self.data[target * self.cols + j] -= delta;
    }
  }

  /// Append `rhs` as an extra column (the augmented system `[A | B]`).
  pub fn augment(&self, rhs: &[f64]) -> Result<Matrix, LinalgError> {
    if rhs.len() != self.rows {
      return Err(LinalgError::DimensionError(format!(
        "right-hand side has {} entries but the matrix has {} rows",
        rhs.len(),
        self.rows
      )));
    }
    let cols = self.cols + 1;
    let mut data = Vec::with_capacity(self.rows * cols);
    for (row, b) in self.rows().zip(rhs) {
      data.extend_from_slice(row);
      data.push(*b);
    }
    Ok(Matrix {
      rows: self.rows,
      cols,
      data,
    })
  }

  pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, LinalgError> {
    if v.len() != self.cols {
      return Err(LinalgError::DimensionError(format!(
        "vector has {} entries but the matrix has {} columns",
        v.len(),
        self.cols
      )));
    }
    Ok(
      self
        .rows()
        .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
        .collect(),
    )
  }

  /// `A − λI`
  pub fn shifted(&self, lambda: f64) -> Result<Matrix, LinalgError> {
    if !self.is_square() {
      return Err(LinalgError::DimensionError(format!(
        "expected a square matrix, got {}x{}",
        self.rows, self.cols
      )));
    }
    let mut m = self.clone();
    for i in 0..self.rows {
      m[(i, i)] -= lambda;
    }
    Ok(m)
  }
}

impl Index<(usize, usize)> for Matrix {
  type Output = f64;

  fn index(&self, (row, col): (usize, usize)) -> &f64 {
    &self.data[row * self.cols + col]
  }
}

impl IndexMut<(usize, usize)> for Matrix {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
    &mut self.data[row * self.cols + col]
  }
}

impl fmt::Display for Matrix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, row) in self.rows().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      let cells: Vec<String> =
        row.iter().map(|v| crate::syntax::format_real(*v)).collect();
      write!(f, "[{}]", cells.join(", "))?;
    }
    Ok(())
  }
}
