use crate::data::training_data::TrainingData;
use crate::error::{check_len, NeuralError, Result};
use crate::network::forward::ForwardScratch;
use crate::network::network::Network;

pub struct MseLoss;

impl MseLoss {
    /// Squared Euclidean distance: sum((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        check_len("cost expected output width", predicted.len(), expected.len())?;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum())
    }
}

/// Mean over `data` of the squared distance between each forward output and
/// its expected output. Every call is a full pass over the dataset.
pub fn network_cost(network: &Network, data: &TrainingData) -> Result<f64> {
    if data.is_empty() {
        return Err(NeuralError::EmptyDataset);
    }
    let mut scratch = ForwardScratch::for_network(network);
    let mut total = 0.0;
    for sample in data {
        let output = network.forward_with(sample.input.as_slice(), &mut scratch)?;
        total += MseLoss::loss(output, sample.output.as_slice())?;
    }
    Ok(total / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::data::training_data::TrainingSample;
    use crate::math::matrix::Matrix;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn identity_network(n: usize) -> Network {
        let mut network = Network::new(&[n, n]).unwrap();
        network.set_activations(ActivationFunction::Identity, ActivationFunction::Identity);
        network.layer_mut(0).unwrap().set_weights(Matrix::identity(n)).unwrap();
        network
    }

    #[test]
    fn loss_is_squared_distance() {
        assert_relative_eq!(MseLoss::loss(&[1.0, 2.0], &[0.0, 4.0]).unwrap(), 5.0);
        assert!(MseLoss::loss(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn cost_is_zero_for_perfect_predictions() {
        let network = identity_network(2);
        let data = TrainingData::from_pairs(
            &[vec![0.5, -1.0], vec![3.0, 2.0]],
            &[vec![0.5, -1.0], vec![3.0, 2.0]],
        ).unwrap();
        assert_eq!(network_cost(&network, &data).unwrap(), 0.0);
    }

    #[test]
    fn cost_averages_over_samples() {
        let network = identity_network(1);
        let data = TrainingData::from_pairs(
            &[vec![0.0], vec![0.0]],
            &[vec![1.0], vec![3.0]],
        ).unwrap();
        // (1 + 9) / 2
        assert_relative_eq!(network_cost(&network, &data).unwrap(), 5.0);
    }

    #[test]
    fn cost_is_non_negative_and_order_free() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let network = Network::random(&[2, 3, 1], &mut rng).unwrap();
        let data = TrainingData::xor();
        let cost = network_cost(&network, &data).unwrap();
        assert!(cost >= 0.0);

        let mut reversed: Vec<TrainingSample> = data.samples().to_vec();
        reversed.reverse();
        let reversed = TrainingData::new(reversed).unwrap();
        assert_relative_eq!(network_cost(&network, &reversed).unwrap(), cost, epsilon = 1e-12);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let network = identity_network(1);
        let data = TrainingData::default();
        assert!(matches!(network_cost(&network, &data), Err(NeuralError::EmptyDataset)));
    }

    #[test]
    fn mismatched_widths_are_reported() {
        let network = identity_network(2);
        let data = TrainingData::from_pairs(&[vec![1.0, 2.0]], &[vec![1.0]]).unwrap();
        assert!(matches!(
            network_cost(&network, &data),
            Err(NeuralError::ShapeMismatch { .. })
        ));
    }
}
