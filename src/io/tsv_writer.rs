use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::params::ParameterSet;

/// Write the derived parameter table: one row per parameter with its value
/// and documented closed interval.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let params = ctx.parameters.as_ref().context("parameters missing")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "parameter\tvalue\tlower\tupper")?;
    for (name, value) in params.entries() {
        let (lo, hi) = ParameterSet::bounds_for(name)
            .ok_or_else(|| anyhow::anyhow!("no bounds recorded for {}", name))?;
        writeln!(w, "{}\t{:.6}\t{}\t{}", name, value, lo, hi)?;
    }

    Ok(())
}
