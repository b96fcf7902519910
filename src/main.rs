// Trains the XOR truth table with finite-difference gradient descent.
//
//   cargo run --release -- [spec.json]
//
// Without an argument the built-in XOR spec is used. Set RUST_LOG=info to see
// the cost at each report interval.
use perturb_nn::{train, NetworkSpec, Result, TrainingData};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn default_spec() -> NetworkSpec {
    let mut spec = NetworkSpec::new("xor", vec![2, 2, 1]);
    spec.learning_rate = 1e-1;
    spec.eps = 1e-1;
    spec
}

fn run() -> Result<()> {
    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(path)?,
        None => default_spec(),
    };
    let mut rng = match spec.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let data = TrainingData::xor();
    let mut network = spec.build_random(&mut rng)?;
    println!("{}", network);
    let report = train(&mut network, &data, &spec.training)?;
    println!("COST BEFORE: {:.6}", report.initial_cost);
    println!("COST AFTER: {:.6}\n", report.final_cost);
    println!("{}", network);

    println!("Values for training set:");
    for sample in &data {
        println!("{} -> {}", sample.input, network.forward(sample.input.as_slice())?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("perturb-nn: {}", e);
        std::process::exit(1);
    }
}
