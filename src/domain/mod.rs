// Domain layer: value types and ports (traits). No I/O happens here.

pub mod model;
pub mod ports;
