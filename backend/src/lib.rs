//! Catalog filters engine: builds, ranks and orders the facets shown next
//! to a product listing.

pub mod builders;
pub mod config;
pub mod db_utils;
pub mod error;
pub mod filters_builder;
pub mod ordering;
pub mod ranking;
pub mod region;
pub mod searcher;

pub use error::{FiltersError, FiltersResult};
pub use filters_builder::FiltersBuilder;
