//! Spiral-arm galactic placement.
//!
//! Systems are scattered over a logarithmic-spiral disk: a center-biased
//! radial draw, an angle snapped to the nearest arm sector, an arm offset
//! that tightens toward the rim, and an exponentially flattening vertical
//! scatter.

use std::f64::consts::PI;

use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaChaRng;

/// Spiral winding per unit of radial distance.
const ROTATION_FACTOR: f64 = 5.0;

/// Full width of the raw arm-offset draw, centered on zero.
const ARM_OFFSET_MAX: f64 = 0.5;

/// Horizontal jitter added to each axis.
const XY_JITTER: f64 = 0.1;

/// Exponential falloff of the disk thickness toward the rim.
const VERTICAL_FALLOFF: f64 = 3.0;

/// Vertical axis is compressed by this fraction of the scale to keep the
/// disk visually flat.
const VERTICAL_SCALE_DIVISOR: f64 = 4.0;

/// Sample one system position.
///
/// Consumes exactly seven uniform draws in a fixed order: radial distance,
/// base angle, arm offset, horizontal jitter x, horizontal jitter y,
/// vertical scatter, and the vertical sign. Reordering the draws changes
/// every seeded galaxy, so the sequence is part of the contract.
///
/// The radial draw is squared, which biases systems toward the galactic
/// center rather than sampling the disk uniformly. A zero distance (the
/// radial draw landing exactly on 0) would blow up the rim-tightening
/// division, so the arm offset degenerates to zero there.
pub fn sample_position(rng: &mut ChaChaRng, arms: u32, scale: f64) -> Vector3<f64> {
    let arm_separation = 2.0 * PI / f64::from(arms);

    let distance = rng.random::<f64>().powi(2);
    let angle = rng.random::<f64>() * 2.0 * PI;

    let mut arm_offset = rng.random::<f64>() * ARM_OFFSET_MAX - ARM_OFFSET_MAX / 2.0;
    if distance > 0.0 {
        arm_offset /= distance;
    } else {
        arm_offset = 0.0;
    }
    arm_offset = arm_offset.signum() * arm_offset * arm_offset;

    let rotation = distance * ROTATION_FACTOR;
    let angle = (angle / arm_separation).floor() * arm_separation + arm_offset + rotation;

    let mut x = angle.cos() * distance;
    let mut y = angle.sin() * distance;
    x += rng.random::<f64>() * XY_JITTER;
    y += rng.random::<f64>() * XY_JITTER;

    let z = rng.random::<f64>() * (-VERTICAL_FALLOFF * distance).exp();
    let up = if rng.random::<f64>() < 0.5 { 1.0 } else { -1.0 };

    Vector3::new(
        x * scale,
        y * scale,
        z * (scale / VERTICAL_SCALE_DIVISOR) * up,
    )
}
