//! Flat-record output.
//!
//! One fixed-width line per generated system: the three scaled coordinates
//! and the primary star's display color as RGB bytes.

use std::io::{self, Write};

use crate::arena::Arena;

/// Writes `x y z r g b` records, one line per system.
///
/// Coordinates are zero-padded to width 9 with six decimal places,
/// matching the flat `.xyz` point-cloud format the galaxy viewer ingests.
#[derive(Debug)]
pub struct XyzWriter<W: Write> {
    out: W,
    records: usize,
}

impl<W: Write> XyzWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    /// Append one arena's record.
    pub fn write_arena(&mut self, arena: &Arena) -> io::Result<()> {
        let color = &arena.primary_star().color;
        writeln!(
            self.out,
            "{:09.6} {:09.6} {:09.6} {} {} {}",
            arena.coordinates.x, arena.coordinates.y, arena.coordinates.z, color.r, color.g, color.b
        )?;
        self.records += 1;
        Ok(())
    }

    /// Records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
