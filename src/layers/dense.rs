use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::{check_len, Result};
use crate::math::{matrix::Matrix, vector::Vector};

/// One affine transform `W x + b`.
///
/// `weights` has shape `[output_size, input_size]`, `biases` has length
/// `output_size`. Shapes are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    weights: Matrix,
    biases: Vector,
}

impl Layer {
    pub fn new(input_size: usize, output_size: usize) -> Layer {
        Layer {
            weights: Matrix::zeros(output_size, input_size),
            biases: Vector::zeros(output_size),
        }
    }

    /// Builds a layer from explicit parameters; `biases` must match the
    /// weight matrix's row count.
    pub fn from_parts(weights: Matrix, biases: Vector) -> Result<Layer> {
        check_len("layer bias length", weights.rows(), biases.len())?;
        Ok(Layer { weights, biases })
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    /// `in * out + out`.
    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Vector {
        &self.biases
    }

    /// Row-major weight storage. Slices keep the shape fixed.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        self.weights.as_mut_slice()
    }

    pub fn biases_mut(&mut self) -> &mut [f64] {
        self.biases.as_mut_slice()
    }

    /// Replaces the weights; the new matrix must have the same shape.
    pub fn set_weights(&mut self, weights: Matrix) -> Result<()> {
        check_len("layer weight rows", self.weights.rows(), weights.rows())?;
        check_len("layer weight cols", self.weights.cols(), weights.cols())?;
        self.weights = weights;
        Ok(())
    }

    pub fn set_biases(&mut self, biases: Vector) -> Result<()> {
        check_len("layer bias length", self.biases.len(), biases.len())?;
        self.biases = biases;
        Ok(())
    }

    /// Redraws every weight and bias uniformly from [0, 1).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.weights.randomize(rng);
        for b in self.biases.as_mut_slice() {
            *b = rng.gen::<f64>();
        }
    }

    /// Writes `W input + b` into `output` (pre-activation).
    pub fn affine_into(&self, input: &[f64], output: &mut [f64]) -> Result<()> {
        self.weights.mul_vec_into(input, output)?;
        for (o, b) in output.iter_mut().zip(self.biases.iter()) {
            *o += b;
        }
        Ok(())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "weights = {}", self.weights)?;
        write!(f, "biases = {}", self.biases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_follow_in_out_sizes() {
        let layer = Layer::new(3, 2);
        assert_eq!(layer.input_size(), 3);
        assert_eq!(layer.output_size(), 2);
        assert_eq!(layer.weights().rows(), 2);
        assert_eq!(layer.biases().len(), 2);
        assert_eq!(layer.parameter_count(), 8);
    }

    #[test]
    fn affine_adds_bias_after_product() {
        let weights = Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, -1.0]]).unwrap();
        let layer = Layer::from_parts(weights, Vector::from_vec(vec![0.5, 1.0])).unwrap();
        let mut out = [0.0; 2];
        layer.affine_into(&[3.0, 4.0], &mut out).unwrap();
        assert_eq!(out, [11.5, -3.0]);
    }

    #[test]
    fn from_parts_rejects_bias_mismatch() {
        assert!(Layer::from_parts(Matrix::zeros(2, 2), Vector::zeros(3)).is_err());
    }

    #[test]
    fn setters_keep_shape() {
        let mut layer = Layer::new(2, 2);
        assert!(layer.set_weights(Matrix::zeros(3, 2)).is_err());
        assert!(layer.set_biases(Vector::zeros(1)).is_err());
        assert!(layer.set_weights(Matrix::identity(2)).is_ok());
        assert_eq!(layer.weights().get(1, 1), 1.0);
    }
}
