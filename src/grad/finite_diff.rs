use serde::{Serialize, Deserialize};

use crate::data::training_data::TrainingData;
use crate::error::{check_eps, Result};
use crate::loss::mse::network_cost;
use crate::math::vector::Vector;
use crate::network::network::Network;

/// How each partial derivative is approximated.
///
/// - `Forward` — `(C(p + ε) − C(p)) / ε`, error O(ε). One extra cost
///   evaluation per parameter plus one shared base cost.
/// - `Central` — `(C(p + ε) − C(p − ε)) / 2ε`, error O(ε²). Two cost
///   evaluations per parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceScheme {
    #[default]
    Forward,
    Central,
}

/// Estimates the gradient of [`network_cost`] with the forward-difference
/// scheme and the network's own `eps`.
///
/// Entry `i` of the result is the partial derivative with respect to
/// `network.param_slots()[i]`.
pub fn estimate_gradient(network: &mut Network, data: &TrainingData) -> Result<Vector> {
    estimate_gradient_with(network, data, DifferenceScheme::Forward)
}

/// Perturbs each parameter in training order, evaluates the full-dataset cost
/// and restores the parameter before moving to the next one.
///
/// On return every parameter holds exactly its original value, including when
/// a cost evaluation fails part way.
pub fn estimate_gradient_with(
    network: &mut Network,
    data: &TrainingData,
    scheme: DifferenceScheme,
) -> Result<Vector> {
    data.check_against(network)?;
    let eps = network.eps;
    check_eps(eps)?;
    let n_params = network.number_of_parameters();
    log::debug!(
        "estimating {:?} gradient over {} parameters and {} samples (eps = {})",
        scheme,
        n_params,
        data.len(),
        eps
    );

    let base_cost = match scheme {
        DifferenceScheme::Forward => Some(network_cost(network, data)?),
        DifferenceScheme::Central => None,
    };

    let mut gradient = Vector::zeros(n_params);
    for idx in 0..n_params {
        let slot = network.param_slots()[idx];
        let saved = network.read_slot(slot);

        network.write_slot(slot, saved + eps);
        let plus = network_cost(network, data);

        let estimate = match base_cost {
            Some(base) => {
                network.write_slot(slot, saved);
                (plus? - base) / eps
            }
            None => {
                network.write_slot(slot, saved - eps);
                let minus = network_cost(network, data);
                network.write_slot(slot, saved);
                (plus? - minus?) / (2.0 * eps)
            }
        };
        gradient[idx] = estimate;
    }

    Ok(gradient)
}
