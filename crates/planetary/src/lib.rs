//! Planetary generation and habitability
//!
//! This crate derives a system's circumstellar zones from its aggregate
//! stellar flux and temperature, populates a fixed ladder of orbital slots
//! with planets, and scores each planet with position, composition, and
//! atmosphere habitability metrics.

pub mod generation;
pub mod habitability;
pub mod planet;
pub mod planet_class;
pub mod zones;

// Re-export key types at crate root
pub use generation::{generate_planets, ORBIT_SLOTS};
pub use planet::Planet;
pub use planet_class::PlanetClass;
pub use zones::{compute_zones, Zone, ZoneBand};

#[cfg(test)]
mod zones_test;
