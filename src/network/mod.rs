pub mod forward;
pub mod network;
pub mod params;
pub mod spec;

pub use forward::ForwardScratch;
pub use network::Network;
pub use params::{ParamRole, ParamSlot};
pub use spec::NetworkSpec;
