use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::{check_len, NeuralError, Result};

/// Dense row-major matrix. `data.len() == rows * cols` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills a `rows x cols` matrix with independent uniform [0, 1) draws.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.randomize(rng);
        res
    }

    /// Builds a matrix from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = rows.first().map_or(0, |r| r.len());
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            check_len("matrix row width", cols, row.len())?;
            data.extend(row);
        }
        Ok(Matrix { rows: n_rows, cols, data })
    }

    pub fn identity(n: usize) -> Matrix {
        let mut res = Matrix::zeros(n, n);
        for i in 0..n {
            res.data[i * n + i] = 1.0;
        }
        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of scalars, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Row-major view of all elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for x in self.data.iter_mut() {
            *x = rng.gen::<f64>();
        }
    }

    /// `result[i] = sum_j self[i, j] * v[j]`, accumulated row by row with the
    /// inner loop over columns.
    pub fn mul_vec_into(&self, v: &[f64], result: &mut [f64]) -> Result<()> {
        check_len("matrix-vector product", self.cols, v.len())?;
        check_len("matrix-vector product result", self.rows, result.len())?;
        for (i, out) in result.iter_mut().enumerate() {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            let mut sum = 0.0;
            for (a, x) in row.iter().zip(v) {
                sum += a * x;
            }
            *out = sum;
        }
        Ok(())
    }

    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        let mut result = vec![0.0; self.rows];
        self.mul_vec_into(v, &mut result)?;
        Ok(result)
    }

    /// Element-wise sum written into `result`.
    pub fn add_into(&self, other: &Matrix, result: &mut Matrix) -> Result<()> {
        check_len("matrix add rows", self.rows, other.rows)?;
        check_len("matrix add cols", self.cols, other.cols)?;
        check_len("matrix add result rows", self.rows, result.rows)?;
        check_len("matrix add result cols", self.cols, result.cols)?;
        for ((r, a), b) in result.data.iter_mut().zip(&self.data).zip(&other.data) {
            *r = a + b;
        }
        Ok(())
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        let mut result = Matrix::zeros(self.rows, self.cols);
        self.add_into(other, &mut result)?;
        Ok(result)
    }

    /// Matrix-matrix multiplication is not supported.
    pub fn mul(&self, _other: &Matrix) -> Result<Matrix> {
        Err(NeuralError::Unimplemented("matrix-matrix multiplication"))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.rows {
            write!(f, "   ")?;
            for j in 0..self.cols {
                write!(f, " {:.4}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
