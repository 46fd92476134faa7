//! Aggregation backends the facet builders read from.

mod in_memory;
pub use in_memory::InMemorySearcher;

mod manticore;
pub use manticore::ManticoreSearcher;

use async_trait::async_trait;
use common::{condition::Condition, facet::FacetValue};
use serde::{Deserialize, Serialize};


/// An attribute-driven facet available in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicOption {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub disallow_auto_ranking: bool,
}

impl DynamicOption {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self { key: key.into(), title: title.into(), disallow_auto_ranking: false }
    }
}

#[async_trait]
pub trait Searcher: Send + Sync {
    /// Primes the query context. Called once per build pass, before any
    /// counting.
    async fn set_filters(&self, condition: &Condition) -> anyhow::Result<()>;

    /// Candidate values of one facet under `condition` within the category.
    async fn count_values(
        &self,
        condition: &Condition,
        category_id: u64,
        facet_key: &str,
    ) -> anyhow::Result<Vec<FacetValue>>;

    async fn dynamic_options(&self, condition: &Condition, category_id: u64) -> anyhow::Result<Vec<DynamicOption>>;
}
