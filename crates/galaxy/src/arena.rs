use nalgebra::Vector3;
use planetary::{Planet, ZoneBand};
use serde::{Deserialize, Serialize};
use stellar::Star;

/// One generated star system: position, stars, zones, planets.
///
/// An arena exclusively owns its contents and is immutable once generation
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub coordinates: Vector3<f64>,
    pub name: String,
    pub stars: Vec<Star>,
    pub zones: [ZoneBand; 3],
    pub planets: Vec<Planet>,
}

impl Arena {
    /// Assemble an arena.
    ///
    /// # Panics
    /// Panics if `stars` is empty or holds more than two entries - every
    /// arena has one or two stars.
    pub fn new(
        coordinates: Vector3<f64>,
        name: String,
        stars: Vec<Star>,
        zones: [ZoneBand; 3],
        planets: Vec<Planet>,
    ) -> Self {
        assert!(
            (1..=2).contains(&stars.len()),
            "arena must have 1 or 2 stars, got {}",
            stars.len()
        );

        Self {
            coordinates,
            name,
            stars,
            zones,
            planets,
        }
    }

    /// The primary (first) star.
    pub fn primary_star(&self) -> &Star {
        &self.stars[0]
    }

    /// Whether this is a binary system.
    pub fn is_binary(&self) -> bool {
        self.stars.len() > 1
    }

    /// Aggregate luminosity of all stars (L☉), the flux the zones and
    /// planetary temperatures were derived from.
    pub fn total_luminosity(&self) -> f64 {
        self.stars.iter().map(|s| s.luminosity).sum()
    }

    /// Aggregate effective temperature of all stars (K).
    ///
    /// Summed rather than averaged; the zone boundaries depend on this sum.
    pub fn total_temperature(&self) -> f64 {
        self.stars.iter().map(|s| s.temperature).sum()
    }
}
