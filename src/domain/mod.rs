// Domain layer: request/response shapes and the upstream port.

pub mod model;
pub mod ports;
