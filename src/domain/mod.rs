// Domain layer: wire models, the matcher and the transport port.
// Nothing in here performs I/O.

pub mod matcher;
pub mod model;
pub mod panel;
pub mod ports;
