// Domain layer: immutable scaling value objects and the KVP port they implement.

pub mod model;
pub mod ports;
