// Domain layer: vehicle entities and the shared vehicle contract.

pub mod model;
pub mod ports;
