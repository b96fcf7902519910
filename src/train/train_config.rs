use serde::{Serialize, Deserialize};

use crate::grad::finite_diff::DifferenceScheme;

/// Configuration for a `train` run.
///
/// # Fields
/// - `iterations`   — number of estimate-gradient / apply-gradient cycles
/// - `report_every` — record and log the cost every this many iterations;
///                    `0` records only the final iteration
/// - `scheme`       — finite-difference scheme used for every estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub report_every: usize,
    pub scheme: DifferenceScheme,
}

impl TrainConfig {
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 20_000,
            report_every: 1_000,
            scheme: DifferenceScheme::Forward,
        }
    }
}
