// Domain layer: core models and ports (interfaces). No host types leak past
// here; everything external is reached through a port.

pub mod model;
pub mod ports;
