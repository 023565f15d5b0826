// Domain layer: core models, the catalog store, and ports (interfaces).

pub mod catalog;
pub mod fixture;
pub mod model;
pub mod ports;
