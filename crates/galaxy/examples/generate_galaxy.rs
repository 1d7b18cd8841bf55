//! Generate a galaxy coordinate file.
//!
//! Usage: cargo run -p galaxy --example generate_galaxy -- [seed] [count]
//!
//! Output: galaxy.xyz with one `x y z r g b` record per system.

use std::env;
use std::fs::File;
use std::io::BufWriter;

use galaxy::{generate_galaxy, GenerationContext, XyzWriter};

fn main() -> std::io::Result<()> {
    let mut args = env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1546098698);
    let count: usize = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10000);

    let mut ctx = GenerationContext::new(seed, count).expect("invalid configuration");
    let arenas = generate_galaxy(&mut ctx);

    let mut writer = XyzWriter::new(BufWriter::new(File::create("galaxy.xyz")?));
    for arena in &arenas {
        writer.write_arena(arena)?;
    }
    let records = writer.records();
    writer.finish()?;

    eprintln!("Generated {} systems into galaxy.xyz (seed {})", records, seed);
    Ok(())
}
