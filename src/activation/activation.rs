use serde::{Serialize, Deserialize};
use std::f64::consts::E;

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

pub fn identity(x: f64) -> f64 {
    x
}

/// Branch-free ReLU, equal to `max(x, 0)`.
pub fn relu(x: f64) -> f64 {
    (x + x.abs()) / 2.0
}

/// Replaces every element with `e^v[i] / sum_j e^v[j]`.
///
/// The maximum is subtracted before exponentiating; this leaves the result
/// unchanged mathematically but keeps large inputs from overflowing to inf.
///
/// Non-finite inputs take the limit of that formula: `+inf` entries split
/// the whole mass equally and everything else gets `0`, an all-`-inf` vector
/// becomes uniform, and any `NaN` turns the whole output into `NaN`.
pub fn softmax_mut(values: &mut [f64]) {
    if values.iter().any(|x| x.is_nan()) {
        values.iter_mut().for_each(|x| *x = f64::NAN);
        return;
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        let share = 1.0 / values.len() as f64;
        values.iter_mut().for_each(|x| *x = share);
        return;
    }
    if max == f64::INFINITY {
        let share = 1.0 / values.iter().filter(|&&x| x == max).count() as f64;
        values.iter_mut().for_each(|x| *x = if *x == max { share } else { 0.0 });
        return;
    }
    let mut sum = 0.0;
    for x in values.iter_mut() {
        *x = (*x - max).exp();
        sum += *x;
    }
    for x in values.iter_mut() {
        *x /= sum;
    }
}

/// Activation applied after a layer's affine transform.
///
/// `Sigmoid`, `Identity` and `ReLU` act element-wise. `Softmax` normalizes
/// across the whole output vector, so it is only ever applied through
/// [`ActivationFunction::apply_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Identity,
    #[serde(rename = "relu")]
    ReLU,
    Softmax,
}

impl ActivationFunction {
    /// Scalar form of an element-wise activation; `None` for `Softmax`.
    pub fn scalar(&self) -> Option<fn(f64) -> f64> {
        match self {
            ActivationFunction::Sigmoid => Some(sigmoid),
            ActivationFunction::Identity => Some(identity),
            ActivationFunction::ReLU => Some(relu),
            ActivationFunction::Softmax => None,
        }
    }

    /// Applies the activation to `values` in place.
    pub fn apply_mut(&self, values: &mut [f64]) {
        match self.scalar() {
            Some(f) => values.iter_mut().for_each(|x| *x = f(*x)),
            None => softmax_mut(values),
        }
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Sigmoid
    }
}
