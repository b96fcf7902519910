use rand::Rng;
use std::fmt;
use std::path::Path;

use crate::activation::activation::ActivationFunction;
use crate::error::{NeuralError, Result};
use crate::layers::dense::Layer;
use crate::network::params::{self, ParamSlot};

pub const DEFAULT_LEARNING_RATE: f64 = 1e-2;
pub const DEFAULT_EPS: f64 = 1e-2;

/// An L-layer perceptron.
///
/// `layers_sizes[0]` is the input width and `layers_sizes[i]` the width after
/// layer `i`, so there is always one more size than layers. Hidden layers share
/// `hidden_activation`; the last layer uses `output_activation`.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    layers_sizes: Vec<usize>,
    max_layer_size: usize,
    hidden_activation: ActivationFunction,
    output_activation: ActivationFunction,
    /// Step applied by `apply_gradient`: `p -= g * learning_rate`.
    pub learning_rate: f64,
    /// Perturbation used by the finite-difference gradient estimator.
    pub eps: f64,
    slots: Vec<ParamSlot>,
}

impl Network {
    /// Allocates a zero-initialized network. `layers_sizes` needs at least an
    /// input and an output width, none of them zero.
    pub fn new(layers_sizes: &[usize]) -> Result<Network> {
        if layers_sizes.len() < 2 {
            return Err(NeuralError::InvalidArchitecture(format!(
                "need at least 2 layer sizes, got {}",
                layers_sizes.len()
            )));
        }
        if let Some(i) = layers_sizes.iter().position(|&s| s == 0) {
            return Err(NeuralError::InvalidArchitecture(format!(
                "layer size {} is zero",
                i
            )));
        }

        let layers: Vec<Layer> = layers_sizes
            .windows(2)
            .map(|w| Layer::new(w[0], w[1]))
            .collect();
        let slots = params::param_slots(&layers);
        let max_layer_size = layers_sizes.iter().copied().max().unwrap_or(0);

        log::debug!(
            "allocated network {:?} with {} parameters",
            layers_sizes,
            slots.len()
        );

        Ok(Network {
            layers,
            layers_sizes: layers_sizes.to_vec(),
            max_layer_size,
            hidden_activation: ActivationFunction::Sigmoid,
            output_activation: ActivationFunction::Sigmoid,
            learning_rate: DEFAULT_LEARNING_RATE,
            eps: DEFAULT_EPS,
            slots,
        })
    }

    /// Allocates a network and fills every weight and bias with uniform
    /// [0, 1) draws from `rng`.
    pub fn random<R: Rng>(layers_sizes: &[usize], rng: &mut R) -> Result<Network> {
        let mut network = Network::new(layers_sizes)?;
        network.randomize(rng);
        Ok(network)
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.randomize(rng);
        }
    }

    /// Releases every layer and resets the scalar fields. The network is
    /// unusable until rebuilt; plain `drop` is enough for ordinary release.
    pub fn clear(&mut self) {
        self.layers = Vec::new();
        self.layers_sizes = Vec::new();
        self.slots = Vec::new();
        self.max_layer_size = 0;
        self.hidden_activation = ActivationFunction::default();
        self.output_activation = ActivationFunction::default();
        self.learning_rate = 0.0;
        self.eps = 0.0;
    }

    pub fn layers_num(&self) -> usize {
        self.layers.len()
    }

    pub fn layers_sizes(&self) -> &[usize] {
        &self.layers_sizes
    }

    pub fn input_size(&self) -> usize {
        self.layers_sizes.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layers_sizes.last().copied().unwrap_or(0)
    }

    /// Widest entry of `layers_sizes`; bounds every intermediate vector.
    pub fn max_layer_size(&self) -> usize {
        self.max_layer_size
    }

    /// Sum over layers of `in * out + out`.
    pub fn number_of_parameters(&self) -> usize {
        self.slots.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, i: usize) -> Option<&Layer> {
        self.layers.get(i)
    }

    pub fn layer_mut(&mut self, i: usize) -> Option<&mut Layer> {
        self.layers.get_mut(i)
    }

    pub fn hidden_activation(&self) -> ActivationFunction {
        self.hidden_activation
    }

    pub fn output_activation(&self) -> ActivationFunction {
        self.output_activation
    }

    pub fn set_hidden_activation(&mut self, activation: ActivationFunction) {
        self.hidden_activation = activation;
    }

    pub fn set_output_activation(&mut self, activation: ActivationFunction) {
        self.output_activation = activation;
    }

    pub fn set_activations(&mut self, hidden: ActivationFunction, output: ActivationFunction) {
        self.hidden_activation = hidden;
        self.output_activation = output;
    }

    /// Activation used after layer `i`.
    pub(crate) fn activation_for(&self, i: usize) -> ActivationFunction {
        if i + 1 == self.layers.len() {
            self.output_activation
        } else {
            self.hidden_activation
        }
    }

    /// Parameter addresses in training order.
    pub fn param_slots(&self) -> &[ParamSlot] {
        &self.slots
    }

    /// Value of the `i`-th parameter in training order.
    pub fn parameter(&self, i: usize) -> Option<f64> {
        self.slots.get(i).map(|&slot| params::read(&self.layers, slot))
    }

    pub fn set_parameter(&mut self, i: usize, value: f64) -> Result<()> {
        let slot = *self
            .slots
            .get(i)
            .ok_or_else(|| NeuralError::shape("parameter index", self.slots.len(), i))?;
        params::write(&mut self.layers, slot, value);
        Ok(())
    }

    /// All parameters flattened in training order.
    pub fn parameters(&self) -> Vec<f64> {
        self.slots
            .iter()
            .map(|&slot| params::read(&self.layers, slot))
            .collect()
    }

    pub(crate) fn read_slot(&self, slot: ParamSlot) -> f64 {
        params::read(&self.layers, slot)
    }

    pub(crate) fn write_slot(&mut self, slot: ParamSlot, value: f64) {
        params::write(&mut self.layers, slot, value);
    }

    /// Persisting trained weights is not supported.
    pub fn save<P: AsRef<Path>>(&self, _path: P) -> Result<()> {
        Err(NeuralError::Unimplemented("network persistence"))
    }

    pub fn load<P: AsRef<Path>>(_path: P) -> Result<Network> {
        Err(NeuralError::Unimplemented("network persistence"))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network {:?} (hidden: {:?}, output: {:?}, lr = {}, eps = {})",
            self.layers_sizes,
            self.hidden_activation,
            self.output_activation,
            self.learning_rate,
            self.eps
        )?;
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(f, "W{} = {}", i, layer.weights())?;
            writeln!(f, "b{} = {}", i, layer.biases())?;
        }
        Ok(())
    }
}
