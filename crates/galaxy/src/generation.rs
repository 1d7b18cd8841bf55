//! End-to-end arena generation.
//!
//! Each arena is produced by one pass over the shared random stream:
//! placement draws, then name draws, then stellar draws, then planetary
//! draws. Zone calculation is closed-form and consumes no draws. The pass
//! is a pure function of (seed, arena index, layout), so identical contexts
//! replay identical galaxies.

use planetary::{compute_zones, generate_planets};
use stellar::{init_star, select_classes, Star};

use crate::arena::Arena;
use crate::context::GenerationContext;
use crate::naming::{generate_name, DEFAULT_NAME_LENGTH};
use crate::placement::sample_position;

/// Generate every arena of the context's run.
///
/// # Example
/// ```
/// use galaxy::{generate_galaxy, GenerationContext};
///
/// let mut ctx = GenerationContext::new(1546098698, 10).unwrap();
/// let arenas = generate_galaxy(&mut ctx);
/// assert_eq!(arenas.len(), 10);
/// ```
pub fn generate_galaxy(ctx: &mut GenerationContext) -> Vec<Arena> {
    let count = ctx.arena_count();
    let mut arenas = Vec::with_capacity(count);

    for index in 0..count {
        let fraction = index as f64 / count as f64;
        arenas.push(generate_arena(ctx, fraction));
    }

    arenas
}

/// Generate one arena at the given fractional galactic position.
fn generate_arena(ctx: &mut GenerationContext, fraction: f64) -> Arena {
    let arms = ctx.arms();
    let scale = ctx.scale();
    let rng = ctx.rng_mut();

    let coordinates = sample_position(rng, arms, scale);
    let name = generate_name(rng, DEFAULT_NAME_LENGTH);

    let (primary, companion) = select_classes(rng, fraction);
    let stars: Vec<Star> = match companion {
        None => vec![init_star(rng, name.clone(), primary)],
        Some(secondary) => vec![
            init_star(rng, format!("{}-A", name), primary),
            init_star(rng, format!("{}-B", name), secondary),
        ],
    };

    let flux: f64 = stars.iter().map(|s| s.luminosity).sum();
    let temperature: f64 = stars.iter().map(|s| s.temperature).sum();
    let zones = compute_zones(flux, temperature);

    let planets = generate_planets(rng, &name, flux, &zones);

    Arena::new(coordinates, name, stars, zones, planets)
}
