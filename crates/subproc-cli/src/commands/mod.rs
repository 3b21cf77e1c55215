//! Subcommand implementations.

pub mod identify;
pub mod steering;
