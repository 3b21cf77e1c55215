//! The compact `lumi_pdf` combination-config format.
//!
//! ```text
//! 0
//! <target_index> <pair_count> <p1a> <p1b> <p2a> <p2b> ...
//! ```
//!
//! Line 0 is a reserved flag, always `0`. Each following line describes one
//! target in table order, numbered from 0: the number of recorded initial
//! states, then the flattened (beam 1, beam 2) parton code pairs with the
//! beam signs already applied.

use crate::combine::CombinationTable;
use crate::error::{Error, Result};
use crate::flavor::{parton_code, BeamType};

/// Signed parton pairs per target, as read back from a combination config.
pub type SubprocessPairs = Vec<Vec<(i32, i32)>>;

/// Render a combination table as combination-config text.
pub fn render(table: &CombinationTable, beams: BeamType) -> Result<String> {
    let mut out = String::from("0\n");
    for (index, entry) in table.entries.iter().enumerate() {
        out.push_str(&format!("{} {}", index, entry.initial_states.len()));
        for (label1, label2) in &entry.initial_states {
            let (code1, code2) = beams.apply((parton_code(label1)?, parton_code(label2)?));
            out.push_str(&format!(" {} {}", code1, code2));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Parse combination-config text back into per-target parton pairs.
///
/// The reserved flag line is ignored, as is the leading target index of each
/// row (redundant with the row position). The pair count bounds how many
/// codes are consumed from the rest of the line.
pub fn parse(text: &str) -> Result<SubprocessPairs> {
    let mut subprocs = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        if line_number == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = line
            .split_whitespace()
            .skip(1)
            .map(|token| {
                token.parse::<i32>().map_err(|_| Error::MalformedCombinationFile {
                    line: line_number,
                    reason: format!("not an integer: {:?}", token),
                })
            })
            .collect::<Result<Vec<i32>>>()?;

        let Some((&pair_count, codes)) = fields.split_first() else {
            return Err(Error::MalformedCombinationFile {
                line: line_number,
                reason: "missing pair count".to_string(),
            });
        };
        if pair_count < 0 || codes.len() < 2 * pair_count as usize {
            return Err(Error::MalformedCombinationFile {
                line: line_number,
                reason: format!(
                    "expected {} parton pairs, found {} codes",
                    pair_count,
                    codes.len()
                ),
            });
        }

        let pairs = (0..pair_count as usize)
            .map(|i| (codes[2 * i], codes[2 * i + 1]))
            .collect();
        subprocs.push(pairs);
    }
    Ok(subprocs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::CombinationBuilder;
    use crate::descriptor::FlavorPair;

    fn pair(a: &str, b: &str) -> FlavorPair {
        (a.to_string(), b.to_string())
    }

    fn two_state_table() -> CombinationTable {
        let mut builder = CombinationBuilder::new();
        builder.add(pair("u", "d"), pair("u", "d"));
        builder.add(pair("c", "s"), pair("u", "d"));
        builder.finalize()
    }

    #[test]
    fn test_render_pp() {
        let text = render(&two_state_table(), BeamType::Pp).unwrap();
        assert_eq!(text, "0\n0 2 2 1 4 3\n");
    }

    #[test]
    fn test_render_pbarp_flips_beam1_only() {
        let text = render(&two_state_table(), BeamType::Pbarp).unwrap();
        assert_eq!(text, "0\n0 2 -2 1 -4 3\n");
    }

    #[test]
    fn test_render_empty_target_has_zero_pair_count() {
        let mut builder = CombinationBuilder::new();
        builder.add_target(pair("G", "G"));
        let text = render(&builder.finalize(), BeamType::Pp).unwrap();
        assert_eq!(text, "0\n0 0\n");
    }

    #[test]
    fn test_render_unknown_flavor_fails() {
        let mut builder = CombinationBuilder::new();
        builder.add(pair("quark", "d"), pair("u", "d"));
        assert!(matches!(
            render(&builder.finalize(), BeamType::Pp),
            Err(Error::UnknownFlavor { .. })
        ));
    }

    #[test]
    fn test_parse() {
        let subprocs = parse("0\n0 2 2 1 4 3\n1 1 0 0\n").unwrap();
        assert_eq!(subprocs, vec![vec![(2, 1), (4, 3)], vec![(0, 0)]]);
    }

    #[test]
    fn test_parse_rejects_truncated_pair_list() {
        assert!(matches!(
            parse("0\n0 2 2 1 4\n"),
            Err(Error::MalformedCombinationFile { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse("0\n0 two 1 2\n"),
            Err(Error::MalformedCombinationFile { .. })
        ));
    }

    #[test]
    fn test_round_trip_preserves_counts_and_codes() {
        let table = two_state_table();
        for beams in [BeamType::Pp, BeamType::Ppbar, BeamType::Pbarp, BeamType::Pbarpbar] {
            let text = render(&table, beams).unwrap();
            let parsed = parse(&text).unwrap();
            assert_eq!(parsed.len(), table.len());
            for (entry, pairs) in table.entries.iter().zip(&parsed) {
                assert_eq!(pairs.len(), entry.initial_states.len());
                for ((label1, label2), &signed) in entry.initial_states.iter().zip(pairs) {
                    let raw = (parton_code(label1).unwrap(), parton_code(label2).unwrap());
                    assert_eq!(signed, beams.apply(raw));
                }
            }
        }
    }
}
