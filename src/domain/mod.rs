// Domain layer: models and ports. Adapters and the account core depend on these.

pub mod model;
pub mod ports;
