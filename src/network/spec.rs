use rand::Rng;
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::activation::activation::ActivationFunction;
use crate::error::{check_eps, check_learning_rate, Result};
use crate::network::network::{Network, DEFAULT_EPS, DEFAULT_LEARNING_RATE};
use crate::train::train_config::TrainConfig;

/// Architecture and hyperparameters of a network, serializable to JSON.
///
/// Only the description is stored here; trained weights are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable run name.
    pub name: String,
    /// `[input, hidden..., output]` widths.
    pub layer_sizes: Vec<usize>,
    #[serde(default)]
    pub hidden_activation: ActivationFunction,
    #[serde(default)]
    pub output_activation: ActivationFunction,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_eps")]
    pub eps: f64,
    /// Seed for reproducible randomization; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub training: TrainConfig,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

fn default_eps() -> f64 {
    DEFAULT_EPS
}

impl NetworkSpec {
    pub fn new(name: &str, layer_sizes: Vec<usize>) -> NetworkSpec {
        NetworkSpec {
            name: name.to_string(),
            layer_sizes,
            hidden_activation: ActivationFunction::Sigmoid,
            output_activation: ActivationFunction::Sigmoid,
            learning_rate: DEFAULT_LEARNING_RATE,
            eps: DEFAULT_EPS,
            seed: None,
            training: TrainConfig::default(),
        }
    }

    /// Zero-initialized network carrying this spec's activations and steps.
    pub fn build(&self) -> Result<Network> {
        check_eps(self.eps)?;
        check_learning_rate(self.learning_rate)?;
        let mut network = Network::new(&self.layer_sizes)?;
        network.set_activations(self.hidden_activation, self.output_activation);
        network.learning_rate = self.learning_rate;
        network.eps = self.eps;
        Ok(network)
    }

    pub fn build_random<R: Rng>(&self, rng: &mut R) -> Result<Network> {
        let mut network = self.build()?;
        network.randomize(rng);
        Ok(network)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
