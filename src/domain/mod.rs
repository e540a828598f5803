// Domain layer: wire models and ports (interfaces). No dependencies on the
// transport crates; those live in core.

pub mod model;
pub mod ports;
