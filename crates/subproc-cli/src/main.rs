//! subprocs - parton-luminosity combination tables from generator output.
//!
//! Reads the per-subprocess descriptor files a matrix-element generator
//! writes (or the SQLite database they are packed into), builds the
//! deduplicated target-to-initial-state combination table, and renders it as
//! a `lumi_pdf` combination config. A second subcommand turns such a config
//! into a fastNLO steering file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use subproc_core::BeamType;

mod commands;
mod unpack;

use commands::{identify, steering};

#[derive(Parser, Debug)]
#[command(
    name = "subprocs",
    author,
    version,
    about = "Build PDF combination configs and fastNLO steering files from subprocess maps",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a lumi_pdf combination config from subprocess descriptors.
    ///
    /// SOURCE is either a process directory containing .alt or .map
    /// descriptor files (searched recursively), or the SQLite process
    /// database written by the generator, which is unpacked into a scratch
    /// directory first.
    Identify {
        /// Process directory or SQLite process database.
        source: PathBuf,

        /// Beam specification; defaults to pp, with a warning.
        #[arg(short, long, value_enum)]
        beamtype: Option<BeamArg>,

        /// Path for the generated combination config.
        #[arg(short = 'o', long, default_value = "subprocs.config")]
        target_path: PathBuf,
    },

    /// Render a combination config into a fastNLO steering file.
    ///
    /// The combination config always assumes pp beams; the beam signs are
    /// applied to every parton pair written into the steering file.
    Steering {
        /// Path to the combination config file.
        source: PathBuf,

        /// Beam specification; defaults to pp, with a warning.
        #[arg(short, long, value_enum)]
        beamtype: Option<BeamArg>,

        /// Output path: a file, or a directory to place the default
        /// file name into. Defaults to the current directory.
        #[arg(short = 'o', long)]
        target_path: Option<PathBuf>,
    },
}

/// Beam specification accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BeamArg {
    Pp,
    Ppbar,
    Pbarp,
    Pbarpbar,
}

impl From<BeamArg> for BeamType {
    fn from(arg: BeamArg) -> Self {
        match arg {
            BeamArg::Pp => BeamType::Pp,
            BeamArg::Ppbar => BeamType::Ppbar,
            BeamArg::Pbarp => BeamType::Pbarp,
            BeamArg::Pbarpbar => BeamType::Pbarpbar,
        }
    }
}

/// Resolve the beam type, warning when the default is silently in play.
fn resolve_beams(arg: Option<BeamArg>) -> BeamType {
    match arg {
        Some(arg) => arg.into(),
        None => {
            eprintln!(
                "WARNING: The default beams are used (pp). \
                 Use the --beamtype option to change this."
            );
            BeamType::Pp
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Identify {
            source,
            beamtype,
            target_path,
        } => identify::execute(&source, resolve_beams(beamtype), &target_path, cli.verbose),

        Commands::Steering {
            source,
            beamtype,
            target_path,
        } => steering::execute(&source, resolve_beams(beamtype), target_path.as_deref()),
    }
}
