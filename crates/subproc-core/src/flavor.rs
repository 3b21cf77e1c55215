//! Flavor label vocabulary, signed parton codes and beam configurations.

use crate::error::{Error, Result};

/// The generator's fixed flavor vocabulary: six antiquarks, the gluon, six
/// quarks. A label's position in this list determines its parton code.
pub const PARTON_LABELS: [&str; 13] = [
    "tb", "bb", "cb", "sb", "ub", "db", "G", "d", "u", "s", "c", "b", "t",
];

/// Position of the gluon within [`PARTON_LABELS`]; subtracted from the index
/// so that the gluon maps to code 0.
const GLUON_INDEX: i32 = 6;

/// PDG code of the proton.
pub const PROTON_PDG: i32 = 2212;

/// Translate a flavor label into its signed parton code in [-6, 6].
///
/// Unknown labels mean the upstream generator wrote a corrupt descriptor;
/// the error is fatal and must abort the run.
pub fn parton_code(label: &str) -> Result<i32> {
    PARTON_LABELS
        .iter()
        .position(|known| *known == label)
        .map(|index| index as i32 - GLUON_INDEX)
        .ok_or_else(|| Error::UnknownFlavor {
            label: label.to_string(),
        })
}

/// Inverse of [`parton_code`]: the label for a code in [-6, 6].
pub fn flavor_label(code: i32) -> Option<&'static str> {
    let index = code + GLUON_INDEX;
    if (0..PARTON_LABELS.len() as i32).contains(&index) {
        Some(PARTON_LABELS[index as usize])
    } else {
        None
    }
}

/// Beam composition of the collider run.
///
/// An antiproton beam flips the sign of every parton code drawn from it
/// (charge conjugation), and flips the sign of that beam's PDG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeamType {
    #[default]
    Pp,
    Ppbar,
    Pbarp,
    Pbarpbar,
}

impl BeamType {
    /// Per-beam sign factors: -1 for an antiproton beam.
    pub fn signs(self) -> (i32, i32) {
        match self {
            BeamType::Pp => (1, 1),
            BeamType::Ppbar => (1, -1),
            BeamType::Pbarp => (-1, 1),
            BeamType::Pbarpbar => (-1, -1),
        }
    }

    /// Signed beam PDG codes (proton = 2212).
    pub fn pdg_codes(self) -> (i32, i32) {
        let (sign1, sign2) = self.signs();
        (sign1 * PROTON_PDG, sign2 * PROTON_PDG)
    }

    /// Apply the per-beam signs to a (beam 1, beam 2) parton code pair.
    pub fn apply(self, pair: (i32, i32)) -> (i32, i32) {
        let (sign1, sign2) = self.signs();
        (sign1 * pair.0, sign2 * pair.1)
    }
}

impl std::str::FromStr for BeamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pp" => Ok(BeamType::Pp),
            "ppbar" => Ok(BeamType::Ppbar),
            "pbarp" => Ok(BeamType::Pbarp),
            "pbarpbar" => Ok(BeamType::Pbarpbar),
            _ => Err(Error::UnknownBeamType {
                spec: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BeamType::Pp => "pp",
            BeamType::Ppbar => "ppbar",
            BeamType::Pbarp => "pbarp",
            BeamType::Pbarpbar => "pbarpbar",
        };
        write!(f, "{}", name)
    }
}
