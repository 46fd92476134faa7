//! Searcher over a fixed catalog snapshot.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use common::{condition::Condition, facet::FacetValue};

use crate::searcher::{DynamicOption, Searcher};


/// Serves precomputed facet values per `(category, facet)`. Failures and
/// latency can be injected per facet key.
#[derive(Debug, Default)]
pub struct InMemorySearcher {
    values: HashMap<(u64, String), Vec<FacetValue>>,
    options: HashMap<u64, Vec<DynamicOption>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    primed: Mutex<Option<Condition>>,
    set_filters_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl InMemorySearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(mut self, category_id: u64, facet_key: impl Into<String>, values: Vec<FacetValue>) -> Self {
        self.values.insert((category_id, facet_key.into()), values);
        self
    }

    pub fn with_dynamic_option(mut self, category_id: u64, option: DynamicOption, values: Vec<FacetValue>) -> Self {
        self.values.insert((category_id, option.key.clone()), values);
        self.options.entry(category_id).or_default().push(option);
        self
    }

    pub fn failing_on(mut self, facet_key: impl Into<String>) -> Self {
        self.failing.insert(facet_key.into());
        self
    }

    pub fn delayed_on(mut self, facet_key: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(facet_key.into(), delay);
        self
    }

    pub fn set_filters_calls(&self) -> usize {
        self.set_filters_calls.load(Ordering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn primed_condition(&self) -> Option<Condition> {
        self.primed.lock().ok().and_then(|primed| primed.clone())
    }
}

#[async_trait]
impl Searcher for InMemorySearcher {
    async fn set_filters(&self, condition: &Condition) -> anyhow::Result<()> {
        self.set_filters_calls.fetch_add(1, Ordering::SeqCst);
        let mut primed = self.primed.lock().map_err(|_| anyhow::anyhow!("searcher state poisoned"))?;
        *primed = Some(condition.clone());
        Ok(())
    }

    async fn count_values(
        &self,
        _condition: &Condition,
        category_id: u64,
        facet_key: &str,
    ) -> anyhow::Result<Vec<FacetValue>> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(facet_key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(facet_key) {
            anyhow::bail!("aggregation backend unreachable for {facet_key}");
        }
        Ok(self.values.get(&(category_id, facet_key.to_string())).cloned().unwrap_or_default())
    }

    async fn dynamic_options(&self, _condition: &Condition, category_id: u64) -> anyhow::Result<Vec<DynamicOption>> {
        Ok(self.options.get(&category_id).cloned().unwrap_or_default())
    }
}
