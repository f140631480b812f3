//! Sector listing command implementation.

use std::io::{self, Write};

use aegis_universe::SectorRegistry;
use anyhow::Result;

use crate::output;

/// List the registry's sectors with member counts.
pub(crate) fn list_sectors(verbose: bool) -> Result<()> {
    let registry = SectorRegistry::standard();
    let mut out = io::stdout().lock();

    output::banner(&mut out, "Registry Sectors")?;
    for sector in registry.entries() {
        writeln!(out, "  {:<26} {:>4} symbols", sector.name, sector.members.len())?;
        if verbose {
            for chunk in sector.members.chunks(10) {
                writeln!(out, "      {}", chunk.join(" "))?;
            }
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Universe: {} unique symbols", registry.all_symbols().len())?;

    if !verbose {
        writeln!(out, "Use --verbose to list sector members.")?;
    }
    writeln!(out)?;
    Ok(())
}
