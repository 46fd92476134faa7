//! Manticore and ClickHouse plumbing used by the Manticore searcher.

pub mod clickhouse_utils;
pub mod facet_sql;
pub mod manticore_utils;
