//! Short list selection and final value ordering of one facet.

use std::{cmp::Ordering, collections::HashSet};

use common::facet::{Facet, FacetValue};

use crate::config::{ShortListConfig, ShortListWindow};
use crate::ranking::rank_sorter::sort_values_by_rank;


/// Fills `short_list`, `total_found` and `total_filtered` and reorders
/// `values` into short list followed by the rest.
pub fn compose_short_list(facet: Facet, with_auto_ranking: bool, config: &ShortListConfig) -> Facet {
    if facet.disallow_auto_ranking {
        return prepare_values_without_auto_ranking(facet, config);
    }

    let mut facet = facet;
    let default_size = config.default_short_list_size;
    let ranked = sort_values_by_rank(facet.values.clone(), true);

    let target_size = if ranked.rank_count > 0 && with_auto_ranking {
        ranked.rank_count
    } else {
        default_size
    };
    let window = match config.window {
        ShortListWindow::CappedByDefault => target_size.min(default_size),
        ShortListWindow::RankCount => target_size,
    };

    let mut total_found = 0;
    let mut total_filtered = 0;
    let mut non_sorted_short_list = Vec::with_capacity(window);
    for value in ranked.values {
        if !value.disabled {
            total_filtered += 1;
        }
        if total_found < window {
            non_sorted_short_list.push(value);
        }
        total_found += 1;
    }

    let (mut ranked_short_list, mut non_ranked_short_list): (Vec<_>, Vec<_>) =
        non_sorted_short_list.into_iter().partition(|value| value.is_rank);
    ranked_short_list.sort_by(|a, b| compare_titles(&a.title, &b.title));
    non_ranked_short_list.sort_by(|a, b| compare_titles(&a.title, &b.title));

    let mut short_list = ranked_short_list;
    short_list.append(&mut non_ranked_short_list);

    let short_list_ids: HashSet<u64> = short_list.iter().map(|value| value.id).collect();
    let mut rest: Vec<FacetValue> = std::mem::take(&mut facet.values)
        .into_iter()
        .filter(|value| value.id != 0 && !short_list_ids.contains(&value.id))
        .collect();
    rest.sort_by(|a, b| a.disabled.cmp(&b.disabled).then_with(|| compare_titles(&a.title, &b.title)));

    facet.values = short_list.iter().cloned().chain(rest).collect();
    facet.short_list = short_list;
    facet.total_found = total_found;
    facet.total_filtered = total_filtered;
    facet
}

/// Keeps the incoming order untouched; the short list is just the head.
fn prepare_values_without_auto_ranking(mut facet: Facet, config: &ShortListConfig) -> Facet {
    facet.total_found = facet.values.len();
    facet.total_filtered = facet.values.iter().filter(|value| !value.disabled).count();
    facet.short_list = facet.values.iter().take(config.default_short_list_size).cloned().collect();
    facet
}

/// Case-insensitive title order, exact title as tie breaker.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[FacetValue]) -> Vec<u64> {
        values.iter().map(|v| v.id).collect()
    }

    fn config(size: usize) -> ShortListConfig {
        ShortListConfig::with_size(size)
    }

    #[test]
    fn top_ranked_window_is_sorted_by_title() {
        let facet = Facet::new(
            "producer",
            "Producer",
            vec![
                FacetValue::new(1, "Delta").ranked(3.0),
                FacetValue::new(2, "Alpha").ranked(1.0),
                FacetValue::new(3, "Echo").ranked(2.0),
                FacetValue::new(4, "Bravo").ranked(1.0),
                FacetValue::new(5, "Charlie").ranked(5.0),
            ],
        );
        let facet = compose_short_list(facet, true, &config(3));
        assert_eq!(ids(&facet.short_list), vec![5, 1, 3]);
        assert_eq!(ids(&facet.values), vec![5, 1, 3, 2, 4]);
        assert_eq!(facet.total_found, 5);
        assert_eq!(facet.total_filtered, 5);
    }

    #[test]
    fn rank_count_shrinks_window_with_auto_ranking() {
        let facet = Facet::new(
            "producer",
            "Producer",
            vec![
                FacetValue::new(1, "Zeta"),
                FacetValue::new(2, "Yankee").ranked(1.0),
                FacetValue::new(3, "Alpha"),
                FacetValue::new(4, "Xray").ranked(9.0),
                FacetValue::new(5, "Bravo"),
            ],
        );
        let with_ranking = compose_short_list(facet.clone(), true, &config(10));
        assert_eq!(ids(&with_ranking.short_list), vec![4, 2]);
        assert_eq!(ids(&with_ranking.values), vec![4, 2, 3, 5, 1]);

        let without_ranking = compose_short_list(facet, false, &config(10));
        assert_eq!(ids(&without_ranking.short_list), vec![4, 2, 3, 5, 1]);
        assert_eq!(ids(&without_ranking.values), vec![4, 2, 3, 5, 1]);
    }

    #[test]
    fn non_ranked_follow_ranked_inside_short_list() {
        let facet = Facet::new(
            "series",
            "Series",
            vec![
                FacetValue::new(1, "beta"),
                FacetValue::new(2, "Zulu").ranked(1.0),
                FacetValue::new(3, "Alpha"),
            ],
        );
        let facet = compose_short_list(facet, false, &config(5));
        assert_eq!(ids(&facet.short_list), vec![2, 3, 1]);
    }

    #[test]
    fn rest_puts_enabled_before_disabled_and_drops_placeholders() {
        let facet = Facet::new(
            "producer",
            "Producer",
            vec![
                FacetValue::new(1, "Apple").disabled(),
                FacetValue::new(2, "Kiwi"),
                FacetValue::new(0, "Any"),
                FacetValue::new(3, "Banana"),
                FacetValue::new(4, "Cherry").disabled(),
                FacetValue::new(5, "Mango").ranked(4.0),
            ],
        );
        let facet = compose_short_list(facet, true, &config(10));
        assert_eq!(ids(&facet.short_list), vec![5]);
        assert_eq!(ids(&facet.values), vec![5, 3, 2, 1, 4]);
        assert_eq!(facet.total_found, 6);
        assert_eq!(facet.total_filtered, 4);
    }

    #[test]
    fn default_cap_binds_before_rank_count() {
        let values: Vec<FacetValue> = (1..=8).map(|id| FacetValue::new(id, format!("v{id}")).ranked(id as f64)).collect();
        let facet = compose_short_list(Facet::new("k", "K", values.clone()), true, &config(3));
        assert_eq!(facet.short_list.len(), 3);

        let uncapped = ShortListConfig { default_short_list_size: 3, window: ShortListWindow::RankCount };
        let facet = compose_short_list(Facet::new("k", "K", values), true, &uncapped);
        assert_eq!(facet.short_list.len(), 8);
    }

    #[test]
    fn without_auto_ranking_keeps_order() {
        let facet = Facet::new(
            "price",
            "Price",
            vec![
                FacetValue::new(3, "100 - 200").ranked(1.0),
                FacetValue::new(1, "200 - 500").disabled(),
                FacetValue::new(2, "500 - 1000"),
            ],
        )
        .without_auto_ranking();
        let facet = compose_short_list(facet, true, &config(2));
        assert_eq!(ids(&facet.values), vec![3, 1, 2]);
        assert_eq!(ids(&facet.short_list), vec![3, 1]);
        assert_eq!(facet.total_found, 3);
        assert_eq!(facet.total_filtered, 2);
    }

    #[test]
    fn empty_values() {
        let facet = compose_short_list(Facet::new("k", "K", Vec::new()), true, &config(10));
        assert!(facet.short_list.is_empty());
        assert!(facet.values.is_empty());
        assert_eq!(facet.total_found, 0);
        assert_eq!(facet.total_filtered, 0);
    }

    #[test]
    fn invariants_hold_across_shapes() {
        for size in 1..6 {
            for len in 0..12u64 {
                for with_auto_ranking in [true, false] {
                    for window in [ShortListWindow::CappedByDefault, ShortListWindow::RankCount] {
                        let values: Vec<FacetValue> = (1..=len)
                            .map(|id| {
                                let mut value = FacetValue::new(id, format!("t{}", (id * 7) % 5));
                                if id % 3 == 0 {
                                    value = value.ranked((id % 4) as f64);
                                }
                                if id % 4 == 1 {
                                    value = value.disabled();
                                }
                                value
                            })
                            .collect();
                        let rank_count = values.iter().filter(|v| v.is_rank).count();
                        let config = ShortListConfig { default_short_list_size: size, window };
                        let facet = compose_short_list(Facet::new("k", "K", values), with_auto_ranking, &config);

                        let value_ids: HashSet<u64> = facet.values.iter().map(|v| v.id).collect();
                        assert!(facet.short_list.iter().all(|v| value_ids.contains(&v.id)));
                        assert!(facet.short_list.len() <= size.max(rank_count));
                        assert!(facet.total_filtered <= facet.total_found);
                        assert_eq!(facet.values.len(), len as usize);
                        assert_eq!(&facet.values[..facet.short_list.len()], &facet.short_list[..]);
                    }
                }
            }
        }
    }

    #[test]
    fn title_order_ignores_case() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
    }
}
