//! Orders facet values by rank.

use std::cmp::Ordering;

use common::facet::FacetValue;


#[derive(Debug, Clone, PartialEq)]
pub struct RankedValues {
    pub values: Vec<FacetValue>,
    /// Values taking part in ranking.
    pub rank_count: usize,
    /// Ranked values that are not disabled.
    pub rank_active_count: usize,
}

/// Puts ranked values first, highest rank first, then the unranked ones in
/// their incoming order. Equal ranks keep their incoming order too.
///
/// The counters are only filled when `with_counts` is set.
pub fn sort_values_by_rank(values: Vec<FacetValue>, with_counts: bool) -> RankedValues {
    let mut rank_count = 0;
    let mut rank_active_count = 0;
    if with_counts {
        for value in values.iter().filter(|value| value.is_rank) {
            rank_count += 1;
            if !value.disabled {
                rank_active_count += 1;
            }
        }
    }

    let mut values = values;
    // slice::sort_by is stable
    values.sort_by(|a, b| match (a.is_rank, b.is_rank) {
        (true, true) => b.rank.total_cmp(&a.rank),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });

    RankedValues { values, rank_count, rank_active_count }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[FacetValue]) -> Vec<u64> {
        values.iter().map(|v| v.id).collect()
    }

    #[test]
    fn ranked_first_by_descending_rank() {
        let values = vec![
            FacetValue::new(1, "a"),
            FacetValue::new(2, "b").ranked(1.0),
            FacetValue::new(3, "c"),
            FacetValue::new(4, "d").ranked(7.5),
            FacetValue::new(5, "e").ranked(3.0).disabled(),
        ];
        let ranked = sort_values_by_rank(values, true);
        assert_eq!(ids(&ranked.values), vec![4, 5, 2, 1, 3]);
        assert_eq!(ranked.rank_count, 3);
        assert_eq!(ranked.rank_active_count, 2);
    }

    #[test]
    fn equal_ranks_keep_input_order_not_title_order() {
        let values = vec![
            FacetValue::new(1, "zeta").ranked(2.0),
            FacetValue::new(2, "alpha").ranked(2.0),
            FacetValue::new(3, "mid").ranked(5.0),
            FacetValue::new(4, "beta").ranked(2.0),
        ];
        let ranked = sort_values_by_rank(values, true);
        assert_eq!(ids(&ranked.values), vec![3, 1, 2, 4]);
    }

    #[test]
    fn stability_holds_for_reversed_input() {
        let values: Vec<FacetValue> = (1..=6).map(|id| FacetValue::new(id, "x").ranked((id % 2) as f64)).collect();
        let ranked = sort_values_by_rank(values, true);
        assert_eq!(ids(&ranked.values), vec![1, 3, 5, 2, 4, 6]);

        let values: Vec<FacetValue> = (1..=6).rev().map(|id| FacetValue::new(id, "x").ranked((id % 2) as f64)).collect();
        let ranked = sort_values_by_rank(values, true);
        assert_eq!(ids(&ranked.values), vec![5, 3, 1, 6, 4, 2]);
    }

    #[test]
    fn counters_skipped_without_counts() {
        let values = vec![FacetValue::new(1, "a").ranked(1.0)];
        let ranked = sort_values_by_rank(values, false);
        assert_eq!(ranked.rank_count, 0);
        assert_eq!(ranked.rank_active_count, 0);
        assert_eq!(ids(&ranked.values), vec![1]);
    }

    #[test]
    fn empty_input() {
        let ranked = sort_values_by_rank(Vec::new(), true);
        assert!(ranked.values.is_empty());
        assert_eq!(ranked.rank_count, 0);
    }
}
