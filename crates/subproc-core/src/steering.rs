//! fastNLO steering-file generation.
//!
//! Renders parsed combination-config pair lists into the commented steering
//! text consumed by the downstream table-filling tool. The layout and key
//! spellings are fixed by that tool; generated files are meant to be reviewed
//! and hand-edited before use.

use std::path::{Path, PathBuf};

use crate::config_file::SubprocessPairs;
use crate::flavor::BeamType;

/// Extension of generated steering files.
pub const STEERING_EXT: &str = "str";

const BANNER_RULE: &str =
    "# ==================================================================== #";
const SECTION_RULE: &str =
    "# -------------------------------------------------------------------- #";

/// Documented defaults plus commented-out override keys. Everything here is
/// fixed text the user is expected to review.
const GENERAL_SETTINGS: &str = r#"# NOTE: Please review the following settings and modify them if needed

# Unit of data cross sections (negative power of 10, e.g. 12->pb, 15->fb)
PublicationUnits              12

# Units of coeffients as passed to fastNLO (negative power of 10)
UnitsOfCoefficients           12

# Specify scale name and unit
ScaleDescriptionScale1        "Description [GeV]"

# Labels (symbol and unit) for the measurement dimension
DimensionLabels {
   "Quantity [Unit]"
}

## NOTE: The following settings can be uncommented to overwrite MCgrid defaults

## MCgrid default: Rivet histogram name
#ScenarioName                 Name

#ScenarioDescription {
#   "Description"
#   "RIVET_ID=ANALYSIS/HISTOGRAM"
#}

## MCgrid default: ["Sherpa"]
#CodeDescription {
#   "My Event Generator"
#}

## Number of decimal digits to store in the output table
#OutputPrecision              8

## Global output verbosity of fastNLO
# Possible values are DEBUG, MANUAL, INFO, WARNING, ERROR, SILENT
#GlobalVerbosity              ERROR

## Apply PDF reweighting for an optimized interpolation
#ApplyPDFReweighting          true

## Set limits for scale nodes to bin borders, if possible
#CheckScaleLimitsAgainstBins  true


"#;

const ORDER_LABELS: [&str; 3] = [
    "PartonCombinationsLO",
    "PartonCombinationsNLO",
    "PartonCombinationsNNLO",
];

/// Resolve the output path for a steering file.
///
/// The default file name is the source base name with its extension replaced
/// by `.str`. With no target path it lands in the current directory; a target
/// path that is an existing directory gets the default name appended;
/// anything else is used verbatim.
pub fn resolve_output_path(source_file_name: &str, target: Option<&Path>) -> PathBuf {
    let default_name = format!("{}.{}", file_stem(source_file_name), STEERING_EXT);
    match target {
        None => PathBuf::from(default_name),
        Some(path) if path.is_dir() => path.join(default_name),
        Some(path) => path.to_path_buf(),
    }
}

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}

/// Render the steering text for the given per-target parton pairs.
///
/// The source combination config always assumes pp beams, so the beam signs
/// are applied here to each leg of every pair. The three per-order blocks
/// carry identical content; only the first carries the placeholder comment.
pub fn render(subprocs: &SubprocessPairs, beams: BeamType, source_file_name: &str) -> String {
    let (sign1, sign2) = beams.signs();
    let (pdg1, pdg2) = beams.pdg_codes();
    let count = subprocs.len();

    let mut out = String::new();

    out.push_str("# -*-sh-*-\n");
    out.push_str(BANNER_RULE);
    out.push_str("\n#\n");
    out.push_str("#   A steering file for creating a fastNLO table with MCgrid\n");
    out.push_str("#   Automatically generated from the PDF combination file\n");
    out.push_str("#\n");
    out.push_str(&format!("#     {}\n", source_file_name));
    out.push_str("#\n");
    out.push_str(BANNER_RULE);
    out.push_str("\n\n\n");

    out.push_str(SECTION_RULE);
    out.push_str("\n# General settings \n");
    out.push_str(SECTION_RULE);
    out.push_str("\n\n");
    out.push_str(GENERAL_SETTINGS);

    out.push_str(SECTION_RULE);
    out.push_str("\n# PDF combination settings \n");
    out.push_str(SECTION_RULE);
    out.push_str("\n\n");

    out.push_str(&format!("{:<30}{:>4}\n", "PDF1", space_signed(pdg1)));
    out.push_str(&format!("{:<30}{:>4}\n", "PDF2", space_signed(pdg2)));
    out.push('\n');

    for key in [
        "NSubProcessesLO",
        "NSubProcessesNLO",
        "NSubProcessesNNLO",
        "IPDFdef3LO",
        "IPDFdef3NLO",
        "IPDFdef3NNLO",
    ] {
        out.push_str(&format!("{:<33}{}\n", key, count));
    }
    out.push('\n');

    for (order, label) in ORDER_LABELS.iter().enumerate() {
        out.push_str(&format!("{} {{{{\n", label));
        if order == 0 {
            out.push_str("  # one line here!\n");
        } else {
            out.push('\n');
        }
        for (subproc_id, pairs) in subprocs.iter().enumerate() {
            out.push_str(&format!("{:>3}", subproc_id));
            for &(code1, code2) in pairs {
                out.push_str(&format!(" {}", space_signed(sign1 * code1)));
                out.push_str(&format!(" {}", space_signed(sign2 * code2)));
            }
            out.push('\n');
        }
        out.push_str("}}\n\n");
    }

    out
}

/// Positive codes carry a leading space so the sign column lines up with
/// negative codes.
fn space_signed(code: i32) -> String {
    if code < 0 {
        code.to_string()
    } else {
        format!(" {}", code)
    }
}
