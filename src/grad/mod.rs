pub mod finite_diff;

pub use finite_diff::{estimate_gradient, estimate_gradient_with, DifferenceScheme};
