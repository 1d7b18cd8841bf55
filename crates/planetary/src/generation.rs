//! Planetary generation over the fixed orbital ladder.
//!
//! Each of ten candidate distances (a Titius–Bode-like progression) receives
//! one class draw out of five outcomes, one of which leaves the slot empty.
//! A populated slot samples its physical parameters from the class's
//! reference intervals and derives every remaining quantity in closed form.

use rand::Rng;
use rand_chacha::ChaChaRng;
use sampling::Range;
use stellar::constants::surface_gravity;

use crate::habitability::{hza, hzc, hzd, surface_temperature};
use crate::planet::{Planet, EARTH_MASS_KG, EARTH_RADIUS_KM};
use crate::planet_class::PlanetClass;
use crate::zones::{zone_of, ZoneBand};

/// Candidate orbital distances, inside-out.
pub const ORBIT_SLOTS: [f64; 10] = [0.4, 0.7, 1.0, 1.6, 2.8, 5.2, 10.0, 19.6, 38.8, 77.2];

/// Outcomes per slot draw: empty plus the four classes.
const SLOT_OUTCOMES: u32 = 5;

/// Redistribution samples above this selector draw a continuous factor;
/// below it the planet is tidally locked and airless.
const LOCKED_SELECTOR: f64 = 0.3;

/// Redistribution factor for the tidally-locked airless regime.
const LOCKED_REDISTRIBUTION: f64 = 2.0;

/// Continuous redistribution interval for planets with atmospheres.
const REDISTRIBUTION: Range = Range::new(0.0, 1.0);

/// Populate the orbital ladder of one arena.
///
/// `flux` is the arena's summed stellar luminosity (L☉) and `zones` its
/// three bands. Each slot consumes one integer draw; a populated slot
/// consumes five further uniforms (`p`, `p1`..`p4`) in a fixed order:
/// mass/radius share `p`, albedo takes `p1`, the redistribution regime
/// selector `p2`, the redistribution factor `p3`, greenhouse `p4`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use planetary::{compute_zones, generate_planets};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let zones = compute_zones(1.0, 5700.0);
/// let planets = generate_planets(&mut rng, "Bahova", 1.0, &zones);
/// assert!(planets.len() <= 10);
/// ```
pub fn generate_planets(
    rng: &mut ChaChaRng,
    arena_name: &str,
    flux: f64,
    zones: &[ZoneBand; 3],
) -> Vec<Planet> {
    let mut planets = Vec::new();

    for &orbit in ORBIT_SLOTS.iter() {
        let draw = rng.random_range(0..SLOT_OUTCOMES);
        let Some(class) = PlanetClass::from_slot_draw(draw) else {
            continue;
        };

        let name = format!("{} {}", arena_name, planets.len() + 1);
        planets.push(init_planet(rng, name, class, orbit, flux, zones));
    }

    planets
}

/// Sample one planet at a populated slot.
fn init_planet(
    rng: &mut ChaChaRng,
    name: String,
    class: PlanetClass,
    orbit: f64,
    flux: f64,
    zones: &[ZoneBand; 3],
) -> Planet {
    let profile = class.profile();

    let p = rng.random::<f64>();
    let p1 = rng.random::<f64>();
    let p2 = rng.random::<f64>();
    let p3 = rng.random::<f64>();
    let p4 = rng.random::<f64>();

    let mass = profile.mass.percentage(p) * EARTH_MASS_KG;
    let radius = profile.radius.percentage(p) * EARTH_RADIUS_KM;
    let albedo = profile.albedo.percentage(p1);
    let redistribution = if p2 > LOCKED_SELECTOR {
        REDISTRIBUTION.percentage(p3)
    } else {
        LOCKED_REDISTRIBUTION
    };
    let greenhouse = profile.greenhouse.percentage(p4);

    let temperature = surface_temperature(redistribution, flux, albedo, greenhouse, orbit);

    Planet {
        name,
        class,
        orbit,
        zone: zone_of(zones, orbit),
        mass,
        radius,
        gravity: surface_gravity(mass, radius),
        surface_temperature: temperature,
        hzd: hzd(orbit, &zones[1]),
        hzc: hzc(mass, radius),
        hza: hza(mass, radius, temperature),
    }
}
