//! Per-facet value ranking and short list composition.

mod rank_sorter;
pub use rank_sorter::{RankedValues, sort_values_by_rank};

mod short_list;
pub use short_list::{compare_titles, compose_short_list};
