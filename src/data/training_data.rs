use serde::{Serialize, Deserialize};

use crate::error::{check_len, Result};
use crate::math::vector::Vector;
use crate::network::network::Network;

/// One (input, expected output) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub input: Vector,
    pub output: Vector,
}

impl TrainingSample {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> TrainingSample {
        TrainingSample {
            input: Vector::from_vec(input),
            output: Vector::from_vec(output),
        }
    }
}

/// A labeled dataset. All inputs share one width and all outputs share one
/// width; sample order has no effect on the cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    samples: Vec<TrainingSample>,
}

impl TrainingData {
    pub fn new(samples: Vec<TrainingSample>) -> Result<TrainingData> {
        if let Some(first) = samples.first() {
            let (input_width, output_width) = (first.input.len(), first.output.len());
            for sample in &samples {
                check_len("training sample input width", input_width, sample.input.len())?;
                check_len("training sample output width", output_width, sample.output.len())?;
            }
        }
        Ok(TrainingData { samples })
    }

    /// Pairs `inputs[i]` with `outputs[i]`.
    pub fn from_pairs(inputs: &[Vec<f64>], outputs: &[Vec<f64>]) -> Result<TrainingData> {
        check_len("training outputs count", inputs.len(), outputs.len())?;
        let samples = inputs
            .iter()
            .zip(outputs)
            .map(|(i, o)| TrainingSample::new(i.clone(), o.clone()))
            .collect();
        TrainingData::new(samples)
    }

    /// The four rows of the XOR truth table.
    pub fn xor() -> TrainingData {
        TrainingData {
            samples: vec![
                TrainingSample::new(vec![0.0, 0.0], vec![0.0]),
                TrainingSample::new(vec![0.0, 1.0], vec![1.0]),
                TrainingSample::new(vec![1.0, 0.0], vec![1.0]),
                TrainingSample::new(vec![1.0, 1.0], vec![0.0]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingSample> {
        self.samples.iter()
    }

    /// Checks that the sample widths match the network's input and output
    /// widths.
    pub fn check_against(&self, network: &Network) -> Result<()> {
        if let Some(first) = self.samples.first() {
            check_len("training input width", network.input_size(), first.input.len())?;
            check_len("training output width", network.output_size(), first.output.len())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TrainingData {
    type Item = &'a TrainingSample;
    type IntoIter = std::slice::Iter<'a, TrainingSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_zips_inputs_and_outputs() {
        let data = TrainingData::from_pairs(
            &[vec![1.0, 2.0], vec![3.0, 4.0]],
            &[vec![0.0], vec![1.0]],
        ).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.samples()[1].input.as_slice(), &[3.0, 4.0]);
        assert_eq!(data.samples()[1].output.as_slice(), &[1.0]);
    }

    #[test]
    fn rejects_ragged_samples() {
        let result = TrainingData::from_pairs(
            &[vec![1.0, 2.0], vec![3.0]],
            &[vec![0.0], vec![1.0]],
        );
        assert!(result.is_err());
        assert!(TrainingData::from_pairs(&[vec![1.0]], &[]).is_err());
    }

    #[test]
    fn check_against_compares_network_widths() {
        let data = TrainingData::xor();
        assert!(data.check_against(&Network::new(&[2, 2, 1]).unwrap()).is_ok());
        assert!(data.check_against(&Network::new(&[3, 1]).unwrap()).is_err());
        assert!(data.check_against(&Network::new(&[2, 2]).unwrap()).is_err());
    }
}
