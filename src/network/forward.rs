use crate::error::{check_len, NeuralError, Result};
use crate::math::vector::Vector;
use crate::network::network::Network;

/// Two ping-pong buffers of `max_layer_size` reals.
///
/// Each layer reads the first `in` elements of `front` and writes the first
/// `out` elements of `back`, then the buffers swap. Nothing is resized, so one
/// scratch can serve any number of forward passes through the same network.
#[derive(Debug, Clone, Default)]
pub struct ForwardScratch {
    front: Vec<f64>,
    back: Vec<f64>,
}

impl ForwardScratch {
    pub fn new(max_layer_size: usize) -> ForwardScratch {
        ForwardScratch {
            front: vec![0.0; max_layer_size],
            back: vec![0.0; max_layer_size],
        }
    }

    pub fn for_network(network: &Network) -> ForwardScratch {
        ForwardScratch::new(network.max_layer_size())
    }

    fn reserve(&mut self, size: usize) {
        if self.front.len() < size {
            self.front.resize(size, 0.0);
            self.back.resize(size, 0.0);
        }
    }
}

impl Network {
    /// Runs `input` through every layer and returns the output activations as
    /// a new vector. The caller's input is never modified.
    pub fn forward(&self, input: &[f64]) -> Result<Vector> {
        let mut scratch = ForwardScratch::for_network(self);
        let output = self.forward_with(input, &mut scratch)?;
        Ok(Vector::from_vec(output.to_vec()))
    }

    /// Like [`Network::forward`] but works inside `scratch`; the returned
    /// slice borrows from it and is valid until the next call.
    pub fn forward_with<'s>(
        &self,
        input: &[f64],
        scratch: &'s mut ForwardScratch,
    ) -> Result<&'s [f64]> {
        if self.layers_num() == 0 {
            return Err(NeuralError::InvalidArchitecture("network has no layers".into()));
        }
        check_len("forward input width", self.input_size(), input.len())?;
        scratch.reserve(self.max_layer_size());

        let mut width = input.len();
        scratch.front[..width].copy_from_slice(input);

        for (i, layer) in self.layers().iter().enumerate() {
            let out = layer.output_size();
            layer.affine_into(&scratch.front[..width], &mut scratch.back[..out])?;
            self.activation_for(i).apply_mut(&mut scratch.back[..out]);
            std::mem::swap(&mut scratch.front, &mut scratch.back);
            width = out;
        }

        Ok(&scratch.front[..width])
    }
}
