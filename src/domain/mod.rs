// Domain layer: payload types and the ports (traits) backends, adapters and
// configuration sources implement.

pub mod model;
pub mod ports;
