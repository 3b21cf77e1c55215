//! Descriptor file discovery and parsing.
//!
//! The generator writes one descriptor file per elementary subprocess, in one
//! of two dialects:
//!
//! - **AMEGIC** `.alt` files: the file name encodes the initial state, the
//!   first content line encodes the target the subprocess is mapped onto.
//!   Every `.alt` file also contributes the target's self-mapping.
//! - **COMIX** `.map` files: the file name encodes the initial state, the
//!   second whitespace field of the first content line encodes the target.
//!   Initial states with an inclusive-jet leg carry no concrete flavor
//!   assignment and are skipped.
//!
//! Both dialects embed flavor pairs with the key grammar
//! `"...__<label1>__<label2>..."`. `.alt` files are preferred; the scan falls
//! back to `.map` files only when no `.alt` file exists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Ordered (beam 1, beam 2) flavor label pair. Used both for initial states
/// and for the targets they are grouped under.
pub type FlavorPair = (String, String);

/// One initial-state to target relationship read from a descriptor.
pub type Mapping = (FlavorPair, FlavorPair);

/// Inclusive light-jet token: a leg carrying it denotes no concrete flavor.
const JET_TOKEN: &str = "j";

const ALT_EXT: &str = "alt";
const MAP_EXT: &str = "map";

/// Extract a flavor pair from a `"...__<label1>__<label2>..."` key.
///
/// Double underscores delimit the segments; the two labels occupy segments 1
/// and 2. Returns `None` when the key has fewer than three segments.
pub fn flavor_pair_from_key(key: &str) -> Option<FlavorPair> {
    let mut segments = key.split("__");
    segments.next()?;
    let label1 = segments.next()?;
    let label2 = segments.next()?;
    if label1.is_empty() || label2.is_empty() {
        return None;
    }
    Some((label1.to_string(), label2.to_string()))
}

/// Discover descriptor files and read every initial-state to target mapping.
///
/// Scans `dir` recursively (the generator scatters descriptors over process
/// subdirectories) in sorted path order for reproducible output. Fails with
/// [`Error::NoDescriptorsFound`] when neither dialect yields a single file.
pub fn collect_mappings(dir: &Path) -> Result<Vec<Mapping>> {
    let alt_files = find_descriptors(dir, ALT_EXT);
    if !alt_files.is_empty() {
        debug!(count = alt_files.len(), "found AMEGIC .alt descriptors");
        let mut mappings = Vec::new();
        for path in &alt_files {
            let (initial_state, target) = read_alt(path)?;
            mappings.push((initial_state, target.clone()));
            // AMEGIC targets always map onto themselves as well.
            mappings.push((target.clone(), target));
        }
        return Ok(mappings);
    }

    warn!("no AMEGIC files found, searching for COMIX maps");
    let map_files = find_descriptors(dir, MAP_EXT);
    if map_files.is_empty() {
        return Err(Error::NoDescriptorsFound {
            dir: dir.to_path_buf(),
        });
    }

    debug!(count = map_files.len(), "found COMIX .map descriptors");
    let mut mappings = Vec::new();
    for path in &map_files {
        if let Some(mapping) = read_map(path)? {
            mappings.push(mapping);
        }
    }
    Ok(mappings)
}

/// Collect all files under `dir` with the given extension, sorted by path.
fn find_descriptors(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.path().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == extension)
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// Read a dialect-A (`.alt`) descriptor.
fn read_alt(path: &Path) -> Result<(FlavorPair, FlavorPair)> {
    let initial_state = flavor_pair_from_key(file_key(path)?)
        .ok_or_else(|| malformed(path, "file name does not encode a flavor pair"))?;
    let line = first_line(path)?;
    let target = flavor_pair_from_key(line.trim())
        .ok_or_else(|| malformed(path, "first line does not encode a target pair"))?;
    Ok((initial_state, target))
}

/// Read a dialect-B (`.map`) descriptor. Returns `None` for inclusive-jet
/// initial states.
fn read_map(path: &Path) -> Result<Option<(FlavorPair, FlavorPair)>> {
    let initial_state = flavor_pair_from_key(file_key(path)?)
        .ok_or_else(|| malformed(path, "file name does not encode a flavor pair"))?;
    if initial_state.0 == JET_TOKEN || initial_state.1 == JET_TOKEN {
        debug!(path = %path.display(), "skipping inclusive-jet initial state");
        return Ok(None);
    }

    let line = first_line(path)?;
    let target_key = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| malformed(path, "first line has no target field"))?;
    let target = flavor_pair_from_key(target_key)
        .ok_or_else(|| malformed(path, "target field does not encode a flavor pair"))?;
    Ok(Some((initial_state, target)))
}

/// File stem used as the descriptor's flavor-pair key.
fn file_key(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| malformed(path, "file name is not valid UTF-8"))
}

/// Read the first line of a descriptor; the handle closes before the next
/// file is opened.
fn first_line(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    if line.trim().is_empty() {
        return Err(malformed(path, "descriptor is empty"));
    }
    Ok(line)
}

fn malformed(path: &Path, reason: &str) -> Error {
    Error::MalformedDescriptor {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
