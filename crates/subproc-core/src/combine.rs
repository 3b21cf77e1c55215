//! Target deduplication and initial-state accumulation.

use crate::descriptor::{FlavorPair, Mapping};

/// One combined subprocess and the elementary initial states grouped under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationEntry {
    /// The canonical combined subprocess acting as the grouping key.
    pub target: FlavorPair,
    /// Deduplicated contributing initial states, in first-seen order. May be
    /// empty: a target without recorded initial states is a legal, if
    /// degenerate, row.
    pub initial_states: Vec<FlavorPair>,
}

/// The resolver's core output: distinct targets in first-seen order, each
/// with its contributing initial states.
///
/// Built once per run from the full descriptor stream, consumed once by a
/// serializer, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationTable {
    pub entries: Vec<CombinationEntry>,
}

impl CombinationTable {
    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Incremental builder for a [`CombinationTable`].
///
/// Keeps targets and per-target initial states in first-seen order, which
/// makes the serialized output deterministic across runs and platforms.
#[derive(Debug, Default)]
pub struct CombinationBuilder {
    entries: Vec<CombinationEntry>,
}

impl CombinationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one initial-state to target relationship.
    ///
    /// The target is inserted on first sight; an initial state already
    /// recorded for the same target is skipped, so duplicate descriptors
    /// never inflate a target's pair count.
    pub fn add(&mut self, initial_state: FlavorPair, target: FlavorPair) {
        let index = self.index_of(target);
        let states = &mut self.entries[index].initial_states;
        if !states.contains(&initial_state) {
            states.push(initial_state);
        }
    }

    /// Register a target without recording an initial state.
    pub fn add_target(&mut self, target: FlavorPair) {
        self.index_of(target);
    }

    fn index_of(&mut self, target: FlavorPair) -> usize {
        match self.entries.iter().position(|entry| entry.target == target) {
            Some(index) => index,
            None => {
                self.entries.push(CombinationEntry {
                    target,
                    initial_states: Vec::new(),
                });
                self.entries.len() - 1
            }
        }
    }

    pub fn finalize(self) -> CombinationTable {
        CombinationTable {
            entries: self.entries,
        }
    }
}

/// Build a table from a full descriptor mapping stream.
pub fn build_table(mappings: impl IntoIterator<Item = Mapping>) -> CombinationTable {
    let mut builder = CombinationBuilder::new();
    for (initial_state, target) in mappings {
        builder.add(initial_state, target);
    }
    builder.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> FlavorPair {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_targets_keep_first_seen_order() {
        let table = build_table(vec![
            (pair("u", "d"), pair("u", "d")),
            (pair("c", "s"), pair("c", "s")),
            (pair("ub", "db"), pair("u", "d")),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0].target, pair("u", "d"));
        assert_eq!(table.entries[1].target, pair("c", "s"));
        assert_eq!(
            table.entries[0].initial_states,
            vec![pair("u", "d"), pair("ub", "db")]
        );
    }

    #[test]
    fn test_duplicate_mappings_do_not_inflate_pair_count() {
        let table = build_table(vec![
            (pair("u", "d"), pair("u", "d")),
            (pair("u", "d"), pair("u", "d")),
            (pair("u", "d"), pair("u", "d")),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries[0].initial_states.len(), 1);
    }

    #[test]
    fn test_target_without_initial_states_is_legal() {
        let mut builder = CombinationBuilder::new();
        builder.add_target(pair("G", "G"));
        let table = builder.finalize();
        assert_eq!(table.len(), 1);
        assert!(table.entries[0].initial_states.is_empty());
    }

    #[test]
    fn test_add_target_does_not_duplicate_existing_target() {
        let mut builder = CombinationBuilder::new();
        builder.add(pair("u", "d"), pair("u", "d"));
        builder.add_target(pair("u", "d"));
        let table = builder.finalize();
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries[0].initial_states.len(), 1);
    }
}
