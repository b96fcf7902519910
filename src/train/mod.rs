pub mod iteration_stats;
pub mod train_config;
pub mod trainer;

pub use iteration_stats::{IterationStats, TrainReport};
pub use train_config::TrainConfig;
pub use trainer::train;
