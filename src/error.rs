use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NeuralError>;

#[derive(Error, Debug)]
pub enum NeuralError {
    /// Two operands (or an operand and the network) disagree on a dimension.
    #[error("shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),

    /// A step size (`eps`, `learning_rate`) that would poison every parameter.
    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    /// Cost is a mean over samples; it is undefined for zero samples.
    #[error("training data contains no samples")]
    EmptyDataset,

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NeuralError {
    pub(crate) fn shape(context: &'static str, expected: usize, found: usize) -> NeuralError {
        NeuralError::ShapeMismatch { context, expected, found }
    }
}

/// Fails with `ShapeMismatch` unless `found == expected`.
pub(crate) fn check_len(context: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(NeuralError::shape(context, expected, found))
    }
}

/// The finite-difference step must be finite and non-zero; anything else
/// makes every estimate 0/0 or inf/inf.
pub(crate) fn check_eps(eps: f64) -> Result<()> {
    if eps.is_finite() && eps != 0.0 {
        Ok(())
    } else {
        Err(NeuralError::InvalidHyperparameter(format!(
            "eps must be finite and non-zero, got {}",
            eps
        )))
    }
}

pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if learning_rate.is_finite() {
        Ok(())
    } else {
        Err(NeuralError::InvalidHyperparameter(format!(
            "learning_rate must be finite, got {}",
            learning_rate
        )))
    }
}
