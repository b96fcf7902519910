pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod data;
pub mod loss;
pub mod grad;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NeuralError, Result};
pub use math::{matrix::Matrix, vector::Vector};
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{ForwardScratch, Network, NetworkSpec};
pub use data::training_data::{TrainingData, TrainingSample};
pub use loss::mse::network_cost;
pub use grad::finite_diff::{estimate_gradient, estimate_gradient_with, DifferenceScheme};
pub use optim::sgd::apply_gradient;
pub use train::{train, TrainConfig, TrainReport};
