//! Data model shared between the filters engine and its callers.

extern crate serde;


pub mod condition;
pub mod facet;
pub mod filter_set;
