use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{check_len, Result};

/// Fixed-length dense vector of reals.
///
/// The length is set at construction and never changes; every operation that
/// takes a second operand checks that the lengths line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn zeros(n: usize) -> Vector {
        Vector { data: vec![0.0; n] }
    }

    pub fn from_vec(data: Vec<f64>) -> Vector {
        Vector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Element-wise sum written into `result`.
    pub fn add_into(&self, other: &Vector, result: &mut Vector) -> Result<()> {
        check_len("vector add", self.len(), other.len())?;
        check_len("vector add result", self.len(), result.len())?;
        for ((r, a), b) in result.data.iter_mut().zip(&self.data).zip(&other.data) {
            *r = a + b;
        }
        Ok(())
    }

    /// Element-wise sum as a new vector.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        let mut result = Vector::zeros(self.len());
        self.add_into(other, &mut result)?;
        Ok(result)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::from_vec(data)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", x)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NeuralError;

    #[test]
    fn zeros_has_requested_length() {
        let v = Vector::zeros(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn add_sums_elementwise() {
        let u = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let v = Vector::from_vec(vec![0.5, -2.0, 10.0]);
        assert_eq!(u.add(&v).unwrap().as_slice(), &[1.5, 0.0, 13.0]);
    }

    #[test]
    fn add_rejects_length_mismatch() {
        let u = Vector::zeros(3);
        let v = Vector::zeros(2);
        match u.add(&v) {
            Err(NeuralError::ShapeMismatch { expected: 3, found: 2, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn add_into_checks_result_length() {
        let u = Vector::zeros(2);
        let v = Vector::zeros(2);
        let mut out = Vector::zeros(4);
        assert!(u.add_into(&v, &mut out).is_err());
    }

    #[test]
    fn display_uses_four_decimals() {
        let v = Vector::from_vec(vec![1.0, 0.123456, -2.5]);
        assert_eq!(v.to_string(), "[1.0000, 0.1235, -2.5000]");
    }
}
