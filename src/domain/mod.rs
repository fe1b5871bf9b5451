// Domain layer: participants, match results and the ports the pipeline talks through.

pub mod model;
pub mod ports;
