// Domain layer: course models and the ports the catalog and session depend on.

pub mod model;
pub mod ports;
