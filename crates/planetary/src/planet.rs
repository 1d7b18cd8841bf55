use serde::{Deserialize, Serialize};

use crate::planet_class::PlanetClass;
use crate::zones::Zone;

/// Mass of the Earth (kg)
pub const EARTH_MASS_KG: f64 = 5.9736e24;

/// Radius of the Earth (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A planet belonging to one arena.
///
/// All quantities are fixed at generation time; nothing is resampled or
/// mutated after the derived values are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    pub class: PlanetClass,
    /// Orbital distance, one of the fixed slot values
    pub orbit: f64,
    /// Zone band the orbit falls in
    pub zone: Zone,
    /// Mass in kilograms
    pub mass: f64,
    /// Radius in kilometers
    pub radius: f64,
    /// Surface gravity in cm/s²
    pub gravity: f64,
    /// Equilibrium surface temperature in Kelvin
    pub surface_temperature: f64,
    /// Habitable-zone distance metric (0 = centered in the warm band)
    pub hzd: f64,
    /// Habitable-zone composition metric (0 outside the rocky mass regime)
    pub hzc: f64,
    /// Habitable-zone atmosphere metric
    pub hza: f64,
}
