pub mod sgd;

pub use sgd::apply_gradient;
