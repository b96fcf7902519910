pub mod mse;

pub use mse::{network_cost, MseLoss};
