//! Stellar classification and parameter sampling
//!
//! This crate assigns spectral classes to star systems from a fixed
//! cumulative-probability table, decides multiplicity per class, and samples
//! physical stellar parameters (temperature, mass, radius, luminosity, color)
//! within each class's reference range.

pub mod constants;
pub mod spectral;
pub mod star;
pub mod stellar_color;

// Re-export key types at crate root
pub use spectral::{select_classes, SpectralClass};
pub use star::{init_star, Star};
pub use stellar_color::StellarColor;

#[cfg(test)]
mod spectral_test;
