//! Star records and per-class parameter sampling.
//!
//! Each spectral class maps to a set of reference intervals for the physical
//! parameters of a main-sequence star. One uniform draw per star is applied
//! across all four intervals, so a star hot for its class is also massive,
//! large, and bright for its class.

use rand::Rng;
use rand_chacha::ChaChaRng;
use sampling::Range;
use serde::{Deserialize, Serialize};

use crate::constants::{surface_gravity, SOLAR_MASS_KG, SOLAR_RADIUS_KM};
use crate::spectral::SpectralClass;
use crate::stellar_color::StellarColor;

/// Reference intervals for one spectral class.
///
/// # Physical Ranges
/// * temperature: Kelvin
/// * mass: solar masses
/// * radius: solar radii
/// * luminosity: solar luminosities
#[derive(Debug, Clone, Copy)]
pub struct ClassProfile {
    pub temperature: Range,
    pub mass: Range,
    pub radius: Range,
    pub luminosity: Range,
    pub color: StellarColor,
}

impl SpectralClass {
    /// The class's reference intervals and display color.
    ///
    /// Temperature bounds and colors follow the classifier's source tables;
    /// mass/radius/luminosity are the standard main-sequence values for each
    /// class.
    pub fn profile(self) -> ClassProfile {
        match self {
            SpectralClass::M => ClassProfile {
                temperature: Range::new(2400.0, 3700.0),
                mass: Range::new(0.08, 0.45),
                radius: Range::new(0.10, 0.70),
                luminosity: Range::new(0.0001, 0.08),
                color: StellarColor::new(0xFF, 0xB5, 0x6C),
            },
            SpectralClass::K => ClassProfile {
                temperature: Range::new(3700.0, 5200.0),
                mass: Range::new(0.45, 0.80),
                radius: Range::new(0.70, 0.96),
                luminosity: Range::new(0.08, 0.60),
                color: StellarColor::new(0xFF, 0xDA, 0xB5),
            },
            SpectralClass::G => ClassProfile {
                temperature: Range::new(5200.0, 6000.0),
                mass: Range::new(0.80, 1.04),
                radius: Range::new(0.96, 1.15),
                luminosity: Range::new(0.60, 1.50),
                color: StellarColor::new(0xFF, 0xED, 0xE3),
            },
            SpectralClass::F => ClassProfile {
                temperature: Range::new(6000.0, 7500.0),
                mass: Range::new(1.04, 1.40),
                radius: Range::new(1.15, 1.40),
                luminosity: Range::new(1.50, 5.0),
                color: StellarColor::new(0xF9, 0xF5, 0xFF),
            },
            SpectralClass::A => ClassProfile {
                temperature: Range::new(7500.0, 10000.0),
                mass: Range::new(1.40, 2.10),
                radius: Range::new(1.40, 1.80),
                luminosity: Range::new(5.0, 25.0),
                color: StellarColor::new(0xD5, 0xE0, 0xFF),
            },
            SpectralClass::B => ClassProfile {
                temperature: Range::new(10000.0, 30000.0),
                mass: Range::new(2.10, 16.0),
                radius: Range::new(1.80, 6.60),
                luminosity: Range::new(25.0, 30000.0),
                color: StellarColor::new(0xA2, 0xC0, 0xFF),
            },
            SpectralClass::O => ClassProfile {
                temperature: Range::new(30000.0, 50000.0),
                mass: Range::new(16.0, 90.0),
                radius: Range::new(6.60, 15.0),
                luminosity: Range::new(30000.0, 1000000.0),
                color: StellarColor::new(0x92, 0xB5, 0xFF),
            },
        }
    }
}

/// A star belonging to one arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    pub class: SpectralClass,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    /// Mass in kilograms
    pub mass: f64,
    /// Radius in kilometers
    pub radius: f64,
    /// Surface gravity in cm/s²
    pub gravity: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub color: StellarColor,
}

/// Sample a star of the given class.
///
/// Consumes exactly one uniform draw, reused across the class's temperature,
/// mass, radius, and luminosity intervals for internal consistency. Mass and
/// radius are converted to kilograms and kilometers; surface gravity is
/// derived from them in CGS.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::{init_star, SpectralClass};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = init_star(&mut rng, "Bahova".to_string(), SpectralClass::M);
/// assert_eq!(star.class, SpectralClass::M);
/// ```
pub fn init_star(rng: &mut ChaChaRng, name: String, class: SpectralClass) -> Star {
    let profile = class.profile();
    let p = rng.random::<f64>();

    let temperature = profile.temperature.percentage(p);
    let mass = profile.mass.percentage(p) * SOLAR_MASS_KG;
    let radius = profile.radius.percentage(p) * SOLAR_RADIUS_KM;
    let luminosity = profile.luminosity.percentage(p);

    Star {
        name,
        class,
        temperature,
        mass,
        radius,
        gravity: surface_gravity(mass, radius),
        luminosity,
        color: profile.color,
    }
}
