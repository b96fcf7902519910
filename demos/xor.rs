use perturb_nn::{train, ActivationFunction, Network, TrainConfig, TrainingData};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> perturb_nn::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut network = Network::random(&[2, 2, 1], &mut rng)?;
    network.set_activations(ActivationFunction::Sigmoid, ActivationFunction::Sigmoid);
    network.learning_rate = 1.0;
    network.eps = 1e-3;

    let data = TrainingData::xor();
    let config = TrainConfig { iterations: 10_000, report_every: 1_000, ..TrainConfig::default() };
    let report = train(&mut network, &data, &config)?;
    println!("cost: {:.6} -> {:.6}", report.initial_cost, report.final_cost);

    for sample in &data {
        let output = network.forward(sample.input.as_slice())?;
        println!("Input: {} -> Output: {:.4}", sample.input, output[0]);
    }
    Ok(())
}
