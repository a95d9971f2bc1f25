// Domain layer: venue records, flattened rows and the ports the pipeline runs through.

pub mod model;
pub mod ports;
