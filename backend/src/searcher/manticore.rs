//! Searcher backed by a Manticore index and a ClickHouse term dictionary.

use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use common::{condition::Condition, facet::FacetValue};
use tracing::debug;

use crate::db_utils::{
    clickhouse_utils::get_clickhouse_client,
    facet_sql::{build_facet_sql, check_facet_keys},
    manticore_utils::{RawSearchResultAggregation, manticore_search_sql, manticore_url},
};
use crate::searcher::{DynamicOption, Searcher};


#[derive(Debug, Clone, PartialEq)]
struct TermLabel {
    name: String,
    title: String,
    rank: Option<f64>,
}

pub struct ManticoreSearcher {
    base_url: String,
    http: reqwest::Client,
    clickhouse: clickhouse::Client,
    primed: RwLock<Option<Condition>>,
}

impl ManticoreSearcher {
    pub fn new(base_url: impl Into<String>, clickhouse: clickhouse::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            clickhouse,
            primed: RwLock::new(None),
        }
    }

    /// Endpoints from `MANTICORE_URL` and `CLICKHOUSE_*`.
    pub fn from_env() -> Self {
        Self::new(manticore_url(), get_clickhouse_client())
    }

    /// Condition primed by `set_filters`. Counting under any other condition
    /// is refused, so every facet of a pass shares one query context.
    fn active_condition(&self, condition: &Condition) -> anyhow::Result<Condition> {
        let primed = self.primed.read().map_err(|_| anyhow::anyhow!("searcher state poisoned"))?;
        match primed.as_ref() {
            None => anyhow::bail!("set_filters must be called before counting"),
            Some(primed) if primed != condition => {
                anyhow::bail!("condition differs from the one primed by set_filters")
            }
            Some(primed) => Ok(primed.clone()),
        }
    }

    /// `(value id, document count)` pairs, most frequent first.
    async fn aggregate(&self, condition: &Condition, category_id: u64, facet_key: &str) -> anyhow::Result<Vec<(u64, u64)>> {
        let sql = build_facet_sql(condition, category_id, facet_key)?;
        let response = manticore_search_sql::<serde_json::Value>(&self.http, &self.base_url, sql).await?;
        let aggregations = response.aggregations.unwrap_or_default();
        let column = crate::db_utils::facet_sql::id_column(facet_key);
        let buckets = aggregations.get(&column).cloned().unwrap_or_else(RawSearchResultAggregation::default);
        parse_buckets(buckets)
    }

    async fn fetch_term_labels(&self, facet_key: &str, ids: Vec<u64>) -> anyhow::Result<HashMap<u64, TermLabel>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let sql = "
        SELECT term_id, term_name, term_title, term_rank
        FROM facet_value_terms
        WHERE term_field = ?
        AND term_id in ?
        ";
        let rows = self
            .clickhouse
            .query(sql)
            .bind(facet_key)
            .bind(ids)
            .fetch_all::<(u64, String, String, Option<f64>)>()
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name, title, rank)| (id, TermLabel { name, title, rank }))
            .collect())
    }
}

#[async_trait]
impl Searcher for ManticoreSearcher {
    async fn set_filters(&self, condition: &Condition) -> anyhow::Result<()> {
        check_facet_keys(condition.selections.keys().map(String::as_str))?;
        let mut primed = self.primed.write().map_err(|_| anyhow::anyhow!("searcher state poisoned"))?;
        *primed = Some(condition.clone());
        Ok(())
    }

    async fn count_values(
        &self,
        condition: &Condition,
        category_id: u64,
        facet_key: &str,
    ) -> anyhow::Result<Vec<FacetValue>> {
        check_facet_keys([facet_key])?;
        let condition = self.active_condition(condition)?;
        // a facet is never narrowed by its own selection
        let narrowing = condition.without(facet_key);
        let available = self.aggregate(&Condition::new(), category_id, facet_key).await?;
        let matching = if narrowing.has_condition() {
            self.aggregate(&narrowing, category_id, facet_key).await?
        } else {
            available.clone()
        };
        debug!(facet_key, available = available.len(), matching = matching.len(), "facet aggregated");

        let ids = available.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        let labels = self.fetch_term_labels(facet_key, ids).await?;
        Ok(merge_counts(&available, &matching, &labels))
    }

    async fn dynamic_options(&self, condition: &Condition, category_id: u64) -> anyhow::Result<Vec<DynamicOption>> {
        self.active_condition(condition)?;
        let sql = "
        SELECT option_key, option_title, disallow_auto_ranking
        FROM category_dynamic_options
        WHERE category_id = ?
        ORDER BY position
        ";
        let rows = self
            .clickhouse
            .query(sql)
            .bind(category_id)
            .fetch_all::<(String, String, bool)>()
            .await?;
        check_facet_keys(rows.iter().map(|(key, _, _)| key.as_str()))?;
        Ok(rows
            .into_iter()
            .map(|(key, title, disallow_auto_ranking)| DynamicOption { key, title, disallow_auto_ranking })
            .collect())
    }
}

fn parse_buckets(aggregation: RawSearchResultAggregation) -> anyhow::Result<Vec<(u64, u64)>> {
    let mut result = Vec::with_capacity(aggregation.buckets.len());
    for bucket in aggregation.buckets {
        let id = match &bucket.key {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        };
        let Some(id) = id else {
            anyhow::bail!("Invalid facet bucket key from manticore: {:#?}", bucket.key);
        };
        result.push((id, bucket.doc_count));
    }
    Ok(result)
}

/// Values present in the category, disabled when the narrowed query no
/// longer finds them.
fn merge_counts(available: &[(u64, u64)], matching: &[(u64, u64)], labels: &HashMap<u64, TermLabel>) -> Vec<FacetValue> {
    let matching: HashMap<u64, u64> = matching.iter().copied().collect();
    available
        .iter()
        .map(|(id, _)| {
            let count = matching.get(id).copied().unwrap_or(0);
            let mut value = match labels.get(id) {
                Some(label) => FacetValue::new(*id, label.title.clone()).with_name(label.name.clone()),
                None => FacetValue::new(*id, id.to_string()),
            };
            if let Some(rank) = labels.get(id).and_then(|label| label.rank) {
                value = value.ranked(rank);
            }
            value = value.with_count(count);
            if count == 0 {
                value = value.disabled();
            }
            value
        })
        .collect()
}
