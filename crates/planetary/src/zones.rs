//! Circumstellar zone calculation.
//!
//! Three concentric radial bands (hot / warm / cold) are derived from the
//! aggregate stellar flux and effective temperature of a system. Boundaries
//! use the empirical Kasting-style polynomial fits around a solar reference
//! temperature, scaled by the square root of the flux.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Solar reference temperature for the boundary fits (K)
const T_SUN: f64 = 5700.0;

/// Inner boundary at solar temperature and unit flux (AU)
const RIS: f64 = 0.72;

/// Outer boundary at solar temperature and unit flux (AU)
const ROS: f64 = 1.77;

/// Inner boundary fit coefficients
const AI: f64 = 2.7619e-5;
const BI: f64 = 3.8095e-9;

/// Outer boundary fit coefficients
const AO: f64 = 1.3786e-4;
const BO: f64 = 1.4286e-9;

/// Outer edge of the cold zone; nothing orbits beyond it.
pub const OUTER_LIMIT: f64 = 100.0;

/// Zone category, ordered inside-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hot,
    Warm,
    Cold,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Zone::Hot => "Hot",
            Zone::Warm => "Warm",
            Zone::Cold => "Cold",
        };
        write!(f, "{}", str)
    }
}

/// One radial band `[inner, outer)` of a system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBand {
    pub zone: Zone,
    pub inner: f64,
    pub outer: f64,
}

impl ZoneBand {
    /// Whether an orbital distance falls inside the half-open band.
    pub fn contains(&self, orbit: f64) -> bool {
        orbit >= self.inner && orbit < self.outer
    }

    /// Band width.
    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Compute the three zones of a system from its aggregate stellar flux
/// (summed luminosity, L☉) and effective temperature (summed Kelvin).
///
/// Multi-star contributions are summed, not averaged; the warm band of a
/// tight binary is therefore wider and further out than either star's own.
///
/// The bands partition `[0, OUTER_LIMIT)` contiguously:
/// Hot `[0, ri)`, Warm `[ri, ro)`, Cold `[ro, OUTER_LIMIT)`.
///
/// # Example
/// ```
/// use planetary::compute_zones;
///
/// let zones = compute_zones(1.0, 5700.0);
/// assert_eq!(zones[0].inner, 0.0);
/// assert!(zones[1].inner < zones[1].outer);
/// ```
pub fn compute_zones(flux: f64, temperature: f64) -> [ZoneBand; 3] {
    let dt = temperature - T_SUN;
    let ri = (RIS - AI * dt - BI * dt * dt) * flux.sqrt();
    let ro = (ROS - AO * dt - BO * dt * dt) * flux.sqrt();

    [
        ZoneBand {
            zone: Zone::Hot,
            inner: 0.0,
            outer: ri,
        },
        ZoneBand {
            zone: Zone::Warm,
            inner: ri,
            outer: ro,
        },
        ZoneBand {
            zone: Zone::Cold,
            inner: ro,
            outer: OUTER_LIMIT,
        },
    ]
}

/// Zone membership for an orbital distance: the first band containing it.
///
/// The bands cover `[0, OUTER_LIMIT)` without gaps, so every slot orbit
/// matches; distances at or past the outer limit report Cold.
pub fn zone_of(bands: &[ZoneBand; 3], orbit: f64) -> Zone {
    for band in bands {
        if band.contains(orbit) {
            return band.zone;
        }
    }
    Zone::Cold
}
