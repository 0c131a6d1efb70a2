// Domain layer: request/response models and ports. No HTTP framework types here.

pub mod model;
pub mod ports;
