use serde::{Serialize, Deserialize};

use crate::layers::dense::Layer;

/// Which tensor of a layer a parameter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamRole {
    Weight,
    Bias,
}

/// Address of one trainable scalar: `offset` indexes the row-major weight
/// storage or the bias vector of layer `layer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSlot {
    pub layer: usize,
    pub role: ParamRole,
    pub offset: usize,
}

/// Lists every parameter in training order: layer by layer, all weights
/// (row-major) before the layer's biases.
///
/// Gradient estimation and gradient application both walk this list, so
/// gradient index `i` always refers to `slots[i]`.
pub fn param_slots(layers: &[Layer]) -> Vec<ParamSlot> {
    let total: usize = layers.iter().map(Layer::parameter_count).sum();
    let mut slots = Vec::with_capacity(total);
    for (layer, l) in layers.iter().enumerate() {
        slots.extend((0..l.weights().len()).map(|offset| ParamSlot {
            layer,
            role: ParamRole::Weight,
            offset,
        }));
        slots.extend((0..l.biases().len()).map(|offset| ParamSlot {
            layer,
            role: ParamRole::Bias,
            offset,
        }));
    }
    slots
}

pub(crate) fn read(layers: &[Layer], slot: ParamSlot) -> f64 {
    let layer = &layers[slot.layer];
    match slot.role {
        ParamRole::Weight => layer.weights().as_slice()[slot.offset],
        ParamRole::Bias => layer.biases()[slot.offset],
    }
}

pub(crate) fn write(layers: &mut [Layer], slot: ParamSlot, value: f64) {
    let layer = &mut layers[slot.layer];
    match slot.role {
        ParamRole::Weight => layer.weights_mut()[slot.offset] = value,
        ParamRole::Bias => layer.biases_mut()[slot.offset] = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_come_before_biases_within_a_layer() {
        let layers = vec![Layer::new(2, 3), Layer::new(3, 1)];
        let slots = param_slots(&layers);
        assert_eq!(slots.len(), 13);

        assert_eq!(slots[0], ParamSlot { layer: 0, role: ParamRole::Weight, offset: 0 });
        assert_eq!(slots[5], ParamSlot { layer: 0, role: ParamRole::Weight, offset: 5 });
        assert_eq!(slots[6], ParamSlot { layer: 0, role: ParamRole::Bias, offset: 0 });
        assert_eq!(slots[8], ParamSlot { layer: 0, role: ParamRole::Bias, offset: 2 });
        assert_eq!(slots[9], ParamSlot { layer: 1, role: ParamRole::Weight, offset: 0 });
        assert_eq!(slots[12], ParamSlot { layer: 1, role: ParamRole::Bias, offset: 0 });
    }

    #[test]
    fn write_then_read_hits_the_same_scalar() {
        let mut layers = vec![Layer::new(2, 2)];
        let slots = param_slots(&layers);
        for (i, slot) in slots.iter().enumerate() {
            write(&mut layers, *slot, i as f64);
        }
        assert_eq!(layers[0].weights().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(layers[0].biases().as_slice(), &[4.0, 5.0]);
        assert_eq!(read(&layers, slots[4]), 4.0);
    }
}
