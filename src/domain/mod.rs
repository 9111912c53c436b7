// Domain layer: models and ports. No dependencies on adapters or config.

pub mod model;
pub mod ports;
