use serde::{Serialize, Deserialize};

/// Snapshot recorded by `train` at each report interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based count of completed estimate/apply cycles.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Full-dataset cost after this iteration's update.
    pub cost: f64,
    /// Wall-clock time since training started, in milliseconds.
    pub elapsed_ms: u64,
}

/// Outcome of a `train` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub initial_cost: f64,
    pub final_cost: f64,
    pub history: Vec<IterationStats>,
}
