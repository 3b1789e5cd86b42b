// Domain layer: barcode model and the ports the scan flow talks to.
// Concrete implementations live under `crate::adapters`.

pub mod model;
pub mod ports;
