// Domain layer: deployment models and the ports the publisher talks through.

pub mod model;
pub mod ports;
