//! Derived surface and habitability quantities.
//!
//! Closed-form approximations only: an equilibrium surface temperature from
//! the redistribution-weighted stellar flux, and the three habitability
//! metrics HZD (position), HZC (composition), HZA (atmosphere retention).

use stellar::constants::{surface_gravity, AMU_G, K_B};

use crate::planet::{EARTH_MASS_KG, EARTH_RADIUS_KM};
use crate::zones::ZoneBand;

/// Effective temperature of a bare blackbody at 1 AU under 1 L☉ (K)
const T_UNIT_FLUX: f64 = 278.5;

/// Planets above this mass have no meaningful rock/water composition axis.
const HZC_MASS_LIMIT: f64 = 20.0;

/// Jeans criterion: a gas is retained when the escape velocity exceeds this
/// multiple of the gas's mean thermal speed.
const JEANS_RETENTION: f64 = 6.0;

/// Molecular reference masses for atmosphere retention (amu)
const M_HYDROGEN: f64 = 1.0;
const M_NITROGEN: f64 = 14.0;

/// Equilibrium surface temperature in Kelvin.
///
/// `flux` is the arena-level luminosity sum (L☉), `orbit` the slot distance,
/// `albedo` the Bond albedo, `greenhouse` the normalized greenhouse forcing,
/// and `redistribution` the heat redistribution factor (2 for the
/// tidally-locked airless regime, up to 1 otherwise).
pub fn surface_temperature(
    redistribution: f64,
    flux: f64,
    albedo: f64,
    greenhouse: f64,
    orbit: f64,
) -> f64 {
    let absorbed = redistribution * flux * (1.0 - albedo);
    T_UNIT_FLUX * (absorbed / (orbit * orbit * (1.0 - greenhouse))).powf(0.25)
}

/// Habitable-zone distance metric.
///
/// Negative values lie inside the warm band's inner edge, positive outside
/// its outer edge; magnitudes below 1 are within the band. A zero-width band
/// has no defined position and yields NaN.
pub fn hzd(orbit: f64, warm: &ZoneBand) -> f64 {
    let width = warm.width();
    if width == 0.0 {
        return f64::NAN;
    }
    (2.0 * orbit - warm.outer - warm.inner) / width
}

/// Habitable-zone composition metric.
///
/// Compares the planet's radius against empirical mass-radius curves for a
/// pure-iron and a pure-water body of the same mass (log-quadratic fits in
/// Earth units). Only meaningful in the rocky regime: masses at or above
/// 20 M⊕ (or non-positive) score zero.
pub fn hzc(mass_kg: f64, radius_km: f64) -> f64 {
    let mass = mass_kg / EARTH_MASS_KG;
    if mass <= 0.0 || mass >= HZC_MASS_LIMIT {
        return 0.0;
    }

    let log_mass = mass.log10();
    let r_iron = (0.0975 * log_mass + 0.4938) * log_mass + 0.7932;
    let r_water = (0.2515 * log_mass + 1.0717) * log_mass + 1.5832;
    let radius = radius_km / EARTH_RADIUS_KM;

    (2.0 * radius - r_water - r_iron) / (r_water - r_iron)
}

/// Habitable-zone atmosphere metric.
///
/// Positions the planet's escape velocity between the Jeans retention
/// thresholds for molecular hydrogen and nitrogen at its surface
/// temperature: below -1 the planet cannot hold nitrogen, above +1 it keeps
/// a primordial hydrogen envelope. A non-positive temperature has no defined
/// thresholds and yields NaN.
pub fn hza(mass_kg: f64, radius_km: f64, surface_temp: f64) -> f64 {
    if surface_temp <= 0.0 {
        return f64::NAN;
    }

    let escape = escape_velocity(mass_kg, radius_km);
    let hold_hydrogen = JEANS_RETENTION * thermal_velocity(surface_temp, M_HYDROGEN);
    let hold_nitrogen = JEANS_RETENTION * thermal_velocity(surface_temp, M_NITROGEN);

    (2.0 * escape - hold_hydrogen - hold_nitrogen) / (hold_hydrogen - hold_nitrogen)
}

/// Surface escape velocity in cm/s, from the same CGS gravity used for the
/// stored gravity field.
fn escape_velocity(mass_kg: f64, radius_km: f64) -> f64 {
    let radius_cm = radius_km * 1.0e5;
    (2.0 * surface_gravity(mass_kg, radius_km) * radius_cm).sqrt()
}

/// Mean thermal speed in cm/s of a gas of the given molecular mass (amu).
fn thermal_velocity(temperature: f64, molecular_mass: f64) -> f64 {
    (3.0 * K_B * temperature / (molecular_mass * AMU_G)).sqrt()
}
