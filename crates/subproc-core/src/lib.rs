//! Subprocess combination tables for Monte-Carlo parton-luminosity grids.
//!
//! Matrix-element generators write one descriptor file per elementary 2->N
//! subprocess. This crate discovers those descriptors, normalizes their
//! flavor labels into signed parton codes, groups the elementary initial
//! states under their combined ("target") subprocesses, and renders the
//! result in either of two fixed text formats:
//!
//! - the compact `lumi_pdf` combination config (one line per target with its
//!   flattened parton-code pairs), and
//! - a commented fastNLO steering file built from such a config.

pub mod combine;
pub mod config_file;
pub mod descriptor;
pub mod error;
pub mod flavor;
pub mod steering;

pub use combine::{build_table, CombinationBuilder, CombinationEntry, CombinationTable};
pub use descriptor::{collect_mappings, flavor_pair_from_key, FlavorPair, Mapping};
pub use error::{Error, Result};
pub use flavor::{flavor_label, parton_code, BeamType, PARTON_LABELS, PROTON_PDG};
