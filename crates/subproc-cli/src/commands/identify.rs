//! Identify command: descriptor corpus -> combination config.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use subproc_core::{
    build_table, collect_mappings, config_file, parton_code, BeamType, CombinationTable,
};

use crate::unpack;

/// Execute the identify command.
///
/// `source` is a process directory scanned as-is, or a file taken to be the
/// generator's SQLite process database and unpacked first. Nothing is
/// written until the full table has been built and rendered.
pub fn execute(source: &Path, beams: BeamType, target_path: &Path, verbose: bool) -> Result<()> {
    println!("Using {} beams", beams);

    let table = if source.is_file() {
        let scratch = unpack::unpack_process_db(source)?;
        resolve(scratch.path())?
        // scratch is dropped here, deleting the unpacked files.
    } else {
        resolve(source)?
    };

    if verbose {
        print_summary(&table, beams)?;
    }

    let rendered = config_file::render(&table, beams)?;
    std::fs::write(target_path, rendered).with_context(|| {
        format!(
            "failed to write combination config to {}",
            target_path.display()
        )
    })?;

    println!("lumi_pdf config written to {}", target_path.display());
    Ok(())
}

fn resolve(dir: &Path) -> Result<CombinationTable> {
    let mappings = collect_mappings(dir)?;
    debug!(mappings = mappings.len(), "collected descriptor mappings");
    let table = build_table(mappings);
    info!(targets = table.len(), "combination table built");
    Ok(table)
}

/// Per-target summary: the target pair, then every signed contributing pair.
fn print_summary(table: &CombinationTable, beams: BeamType) -> Result<()> {
    for entry in &table.entries {
        println!("('{}', '{}')", entry.target.0, entry.target.1);
        for (label1, label2) in &entry.initial_states {
            let (code1, code2) = beams.apply((parton_code(label1)?, parton_code(label2)?));
            println!("{} {}", code1, code2);
        }
    }
    Ok(())
}
