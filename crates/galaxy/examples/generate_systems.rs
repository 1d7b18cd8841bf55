//! Dump generated systems as JSON lines.
//!
//! Usage: cargo run -p galaxy --example generate_systems -- [seed] [count]
//!
//! Output: one JSON object per system on stdout, with a summary on stderr.

use std::env;

use galaxy::{generate_galaxy, GenerationContext};

fn main() {
    let mut args = env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1546098698);
    let count: usize = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);

    let mut ctx = GenerationContext::new(seed, count).expect("invalid configuration");
    let arenas = generate_galaxy(&mut ctx);

    let mut binaries = 0usize;
    let mut planets = 0usize;
    for arena in &arenas {
        if arena.is_binary() {
            binaries += 1;
        }
        planets += arena.planets.len();

        println!("{}", serde_json::to_string(arena).expect("serializable arena"));
    }

    eprintln!(
        "Generated {} systems ({} binary) with {} planets",
        arenas.len(),
        binaries,
        planets
    );
}
