use std::time::{Duration, Instant};

use crate::data::training_data::TrainingData;
use crate::error::Result;
use crate::grad::finite_diff::estimate_gradient_with;
use crate::loss::mse::network_cost;
use crate::network::network::Network;
use crate::optim::sgd::apply_gradient;
use crate::train::iteration_stats::{IterationStats, TrainReport};
use crate::train::train_config::TrainConfig;

/// Runs `config.iterations` cycles of gradient estimation followed by a
/// gradient step over the whole of `data`.
///
/// The cost is recorded (and logged at `info`) every `report_every`
/// iterations and always after the last one.
pub fn train(
    network: &mut Network,
    data: &TrainingData,
    config: &TrainConfig,
) -> Result<TrainReport> {
    data.check_against(network)?;
    let initial_cost = network_cost(network, data)?;
    log::info!(
        "training {:?} for {} iterations, initial cost {:.6}",
        network.layers_sizes(),
        config.iterations,
        initial_cost
    );

    let start = Instant::now();
    let mut history = Vec::new();
    let mut final_cost = initial_cost;

    for iteration in 1..=config.iterations {
        let gradient = estimate_gradient_with(network, data, config.scheme)?;
        apply_gradient(network, gradient.as_slice())?;

        let due = config.report_every > 0 && iteration % config.report_every == 0;
        if due || iteration == config.iterations {
            final_cost = network_cost(network, data)?;
            let stats = IterationStats {
                iteration,
                total_iterations: config.iterations,
                cost: final_cost,
                elapsed_ms: elapsed_ms(start.elapsed()),
            };
            log::info!("iteration {}/{}: cost = {:.6}", iteration, config.iterations, final_cost);
            history.push(stats);
        }
    }

    Ok(TrainReport {
        initial_cost,
        final_cost,
        history,
    })
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
