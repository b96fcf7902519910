use crate::error::{check_learning_rate, check_len, NeuralError, Result};
use crate::network::network::Network;

/// Applies one gradient-descent step, `p -= gradient[i] * learning_rate`,
/// walking parameters in the same order the gradient was estimated in.
pub fn apply_gradient(network: &mut Network, gradient: &[f64]) -> Result<()> {
    check_len("gradient length", network.number_of_parameters(), gradient.len())?;
    let learning_rate = network.learning_rate;
    check_learning_rate(learning_rate)?;
    if let Some(i) = gradient.iter().position(|g| !g.is_finite()) {
        return Err(NeuralError::InvalidHyperparameter(format!(
            "gradient entry {} is {}",
            i, gradient[i]
        )));
    }
    for (idx, g) in gradient.iter().enumerate() {
        let slot = network.param_slots()[idx];
        let value = network.read_slot(slot);
        network.write_slot(slot, value - g * learning_rate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_entry_updates_its_own_parameter() {
        let mut network = Network::new(&[2, 3, 1]).unwrap();
        network.learning_rate = 0.5;
        let gradient: Vec<f64> = (0..network.number_of_parameters()).map(|i| i as f64).collect();

        apply_gradient(&mut network, &gradient).unwrap();

        let expected: Vec<f64> = gradient.iter().map(|g| -0.5 * g).collect();
        assert_eq!(network.parameters(), expected);
        // Layer 0 weights are 0..6, its biases 6..9, then layer 1.
        assert_eq!(network.layer(0).unwrap().biases().as_slice(), &[-3.0, -3.5, -4.0]);
        assert_eq!(network.layer(1).unwrap().weights().as_slice(), &[-4.5, -5.0, -5.5]);
        assert_eq!(network.layer(1).unwrap().biases()[0], -6.0);
    }

    #[test]
    fn rejects_gradient_of_wrong_length() {
        let mut network = Network::new(&[2, 1]).unwrap();
        match apply_gradient(&mut network, &[1.0, 2.0]) {
            Err(NeuralError::ShapeMismatch { expected: 3, found: 2, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(network.parameters().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn non_finite_steps_leave_parameters_untouched() {
        let mut network = Network::new(&[2, 1]).unwrap();
        network.learning_rate = f64::NAN;
        assert!(matches!(
            apply_gradient(&mut network, &[1.0, 1.0, 1.0]),
            Err(NeuralError::InvalidHyperparameter(_))
        ));

        network.learning_rate = 0.1;
        assert!(matches!(
            apply_gradient(&mut network, &[1.0, f64::NAN, 1.0]),
            Err(NeuralError::InvalidHyperparameter(_))
        ));
        assert!(network.parameters().iter().all(|&p| p == 0.0));
    }
}
