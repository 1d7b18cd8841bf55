use std::fmt;

use sampling::Range;
use serde::{Deserialize, Serialize};

/// Planetary mass class.
///
/// Classes are drawn per orbital slot alongside an empty outcome; the class
/// letter follows the stellar convention (M rocky, T terran, N neptunian,
/// J jovian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    Rocky,
    Terran,
    Neptunian,
    Jovian,
}

impl fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            PlanetClass::Rocky => "M",
            PlanetClass::Terran => "T",
            PlanetClass::Neptunian => "N",
            PlanetClass::Jovian => "J",
        };
        write!(f, "{}", str)
    }
}

/// Reference intervals for one planet class.
///
/// # Physical Ranges
/// * mass: Earth masses
/// * radius: Earth radii
/// * albedo: Bond albedo, dimensionless
/// * greenhouse: normalized greenhouse forcing, dimensionless
#[derive(Debug, Clone, Copy)]
pub struct ClassProfile {
    pub mass: Range,
    pub radius: Range,
    pub albedo: Range,
    pub greenhouse: Range,
}

impl PlanetClass {
    /// Map a slot draw in [0, 5) onto a class; 0 leaves the slot empty.
    pub fn from_slot_draw(draw: u32) -> Option<PlanetClass> {
        match draw {
            1 => Some(PlanetClass::Rocky),
            2 => Some(PlanetClass::Terran),
            3 => Some(PlanetClass::Neptunian),
            4 => Some(PlanetClass::Jovian),
            _ => None,
        }
    }

    /// The class's reference intervals.
    ///
    /// Albedo and greenhouse ranges bracket the solar-system reference
    /// bodies of each class (Mercury/Moon for rocky, Venus–Mars for terran,
    /// the ice and gas giants beyond).
    pub fn profile(self) -> ClassProfile {
        match self {
            PlanetClass::Rocky => ClassProfile {
                mass: Range::new(0.0, 0.1),
                radius: Range::new(0.03, 0.7),
                albedo: Range::new(0.05, 0.45),
                greenhouse: Range::new(0.0, 0.10),
            },
            PlanetClass::Terran => ClassProfile {
                mass: Range::new(0.1, 10.0),
                radius: Range::new(0.5, 3.3),
                albedo: Range::new(0.05, 0.75),
                greenhouse: Range::new(0.0, 0.60),
            },
            PlanetClass::Neptunian => ClassProfile {
                mass: Range::new(10.0, 50.0),
                radius: Range::new(2.1, 5.7),
                albedo: Range::new(0.25, 0.55),
                greenhouse: Range::new(0.10, 0.50),
            },
            PlanetClass::Jovian => ClassProfile {
                mass: Range::new(50.0, 5000.0),
                radius: Range::new(3.5, 27.0),
                albedo: Range::new(0.25, 0.65),
                greenhouse: Range::new(0.10, 0.50),
            },
        }
    }
}
