// Domain layer: core models and ports (interfaces). No framework dependencies.

pub mod model;
pub mod ports;
