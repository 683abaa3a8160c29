// Domain layer: models and ports (interfaces). Nothing here beyond std/serde.

pub mod model;
pub mod ports;
