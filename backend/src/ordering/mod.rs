//! Facet display ordering.

mod order_sequencer;
pub use order_sequencer::{mark_filters_order, ordered_sequence};
