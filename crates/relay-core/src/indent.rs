//! Indent clustering
//!
//! Handwritten indentation is never pixel exact: two lines a writer meant to
//! start at the same column come back from OCR a few units apart. Clustering
//! collapses the raw indents into a handful of ordinal levels (0 = outermost).
//!
//! The clustering is greedy and anchor based. Each cluster is anchored at its
//! smallest indent and a new cluster starts only when a value is more than
//! `threshold` away from that anchor. A run of small steps that drifts past
//! the threshold in total therefore stays in one cluster; this differs from a
//! gap-to-previous rule and must not be swapped for one.

use std::collections::{BTreeMap, HashSet};

use crate::ocr::Line;

/// Mapping from raw indent to logical level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: BTreeMap<i32, usize>,
}

impl LevelMap {
    /// Level for a raw indent, if the indent was clustered
    pub fn level(&self, indent: i32) -> Option<usize> {
        self.levels.get(&indent).copied()
    }

    /// Level for a raw indent, falling back to 0 for unknown indents.
    ///
    /// Callers must build the map from the same lines they look up, otherwise
    /// unknown indents are silently placed at the outermost level.
    pub fn level_or_root(&self, indent: i32) -> usize {
        self.level(indent).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of distinct levels
    pub fn depth(&self) -> usize {
        self.levels.values().max().map_or(0, |max| max + 1)
    }

    /// (indent, level) pairs in ascending indent order
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.levels.iter().map(|(&indent, &level)| (indent, level))
    }
}

/// Distinct indents of a layout capture, in first-seen order
pub fn distinct_indents(lines: &[Line]) -> Vec<i32> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .map(|line| line.indent)
        .filter(|indent| seen.insert(*indent))
        .collect()
}

/// Cluster raw indents into logical levels.
///
/// `threshold` is the minimum distance from a cluster's anchor that starts
/// the next level. Duplicates in `indents` are harmless.
pub fn cluster_indents(indents: &[i32], threshold: u32) -> LevelMap {
    let mut sorted = indents.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut levels = BTreeMap::new();
    let mut anchor: Option<i32> = None;
    let mut level = 0;

    for value in sorted {
        match anchor {
            None => anchor = Some(value),
            Some(start) if i64::from(value) - i64::from(start) > i64::from(threshold) => {
                level += 1;
                anchor = Some(value);
            }
            Some(_) => {}
        }
        levels.insert(value, level);
    }

    let map = LevelMap { levels };
    tracing::trace!("Clustered {} indents into {} levels", map.len(), map.depth());
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bands() {
        let map = cluster_indents(&[65, 10, 60, 15], 40);

        assert_eq!(map.level(10), Some(0));
        assert_eq!(map.level(15), Some(0));
        assert_eq!(map.level(60), Some(1));
        assert_eq!(map.level(65), Some(1));
        assert_eq!(map.depth(), 2);
    }

    #[test]
    fn test_single_and_empty() {
        let map = cluster_indents(&[137], 40);
        assert_eq!(map.level(137), Some(0));

        let empty = cluster_indents(&[], 40);
        assert!(empty.is_empty());
        assert_eq!(empty.depth(), 0);
    }

    #[test]
    fn test_gap_equal_to_threshold_stays_in_cluster() {
        let map = cluster_indents(&[0, 40, 41], 40);
        assert_eq!(map.level(40), Some(0));
        // 41 is measured against the anchor 0, not against 40
        assert_eq!(map.level(41), Some(1));
    }

    #[test]
    fn test_gradual_drift_is_measured_from_anchor() {
        // Every step is below the threshold; the cluster still splits once the
        // distance to the anchor exceeds it.
        let map = cluster_indents(&[0, 30, 60, 90], 40);
        assert_eq!(map.level(0), Some(0));
        assert_eq!(map.level(30), Some(0));
        assert_eq!(map.level(60), Some(1));
        assert_eq!(map.level(90), Some(1));
    }

    #[test]
    fn test_drift_within_threshold_never_splits() {
        let map = cluster_indents(&[100, 110, 120, 130, 140], 40);
        assert!(map.iter().all(|(_, level)| level == 0));
    }

    #[test]
    fn test_zero_threshold_splits_every_distinct_value() {
        let map = cluster_indents(&[5, 5, 6, 8], 0);
        assert_eq!(map.len(), 3);
        assert_eq!(map.level(5), Some(0));
        assert_eq!(map.level(6), Some(1));
        assert_eq!(map.level(8), Some(2));
    }

    #[test]
    fn test_negative_indents() {
        let map = cluster_indents(&[-50, -45, 10], 40);
        assert_eq!(map.level(-50), Some(0));
        assert_eq!(map.level(-45), Some(0));
        assert_eq!(map.level(10), Some(1));
    }

    #[test]
    fn test_extreme_indents_do_not_overflow() {
        let wide = cluster_indents(&[i32::MIN, i32::MIN + 40, 0, i32::MAX], u32::MAX);
        assert!(wide.iter().all(|(_, level)| level == 0));

        let tight = cluster_indents(&[i32::MIN, i32::MAX], 0);
        assert_eq!(tight.level(i32::MIN), Some(0));
        assert_eq!(tight.level(i32::MAX), Some(1));
    }

    #[test]
    fn test_level_or_root_fallback() {
        let map = cluster_indents(&[10, 90], 40);
        assert_eq!(map.level(50), None);
        assert_eq!(map.level_or_root(50), 0);
        assert_eq!(map.level_or_root(90), 1);
    }

    #[test]
    fn test_distinct_indents_first_seen_order() {
        let lines = vec![
            Line::new("a", 60, 0),
            Line::new("b", 10, 0),
            Line::new("c", 60, 0),
            Line::new("d", 12, 1),
        ];
        assert_eq!(distinct_indents(&lines), vec![60, 10, 12]);
    }
}
