//! Physical constants shared across the generator.
//!
//! Gravity is computed in CGS; masses and radii are stored in SI-adjacent
//! units (kg, km) and converted at the point of use.

/// Gravitational constant (dyn·cm²/g²)
pub const G: f64 = 6.6720e-8;

/// Boltzmann constant (erg/K)
pub const K_B: f64 = 1.380649e-16;

/// Atomic mass unit (g)
pub const AMU_G: f64 = 1.66054e-24;

/// Mass of the Sun (kg)
pub const SOLAR_MASS_KG: f64 = 1.9891e30;

/// Radius of the Sun (km)
pub const SOLAR_RADIUS_KM: f64 = 6.96265e5;

/// Surface gravity in cm/s² for a body of the given mass and radius.
///
/// Mass enters in kilograms and radius in kilometers; both are converted to
/// CGS to stay consistent with [`G`].
pub fn surface_gravity(mass_kg: f64, radius_km: f64) -> f64 {
    let mass_g = mass_kg * 1.0e3;
    let radius_cm = radius_km * 1.0e5;
    G * mass_g / (radius_cm * radius_cm)
}
