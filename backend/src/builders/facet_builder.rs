//! Contract shared by all facet builders.

use std::time::Duration;

use async_trait::async_trait;
use common::{condition::Condition, facet::{Facet, FacetValue}};
use tracing::debug;

use crate::error::{FiltersError, FiltersResult};
use crate::searcher::Searcher;


/// Inputs of one build pass, shared read-only by every builder.
pub struct BuildContext<'a> {
    pub condition: &'a Condition,
    pub category_id: u64,
    pub searcher: &'a dyn Searcher,
    pub aggregation_timeout: Option<Duration>,
}

#[async_trait]
pub trait FacetBuilder: Send + Sync {
    fn facet_key(&self) -> &str;

    /// Whether ranked values may shrink the short list of the built facets.
    fn with_auto_ranking(&self) -> bool {
        false
    }

    /// Builds zero or more facets. An empty result means the facet has no
    /// applicable values and is left out.
    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>>;
}

/// Asks the searcher for a facet's values, bounded by the pass timeout.
pub async fn count_facet_values(ctx: &BuildContext<'_>, facet_key: &str) -> FiltersResult<Vec<FacetValue>> {
    let counting = ctx.searcher.count_values(ctx.condition, ctx.category_id, facet_key);
    let values = match ctx.aggregation_timeout {
        Some(timeout) => tokio::time::timeout(timeout, counting)
            .await
            .map_err(|_| FiltersError::aggregation(facet_key, anyhow::anyhow!("timed out after {timeout:?}")))?,
        None => counting.await,
    };
    let values = values.map_err(|e| FiltersError::aggregation(facet_key, e))?;
    debug!(facet_key, values = values.len(), "facet values counted");
    Ok(values)
}

/// Single facet straight from the searcher's values, or nothing.
pub async fn build_value_facet(
    ctx: &BuildContext<'_>,
    facet_key: &str,
    title: &str,
    disallow_auto_ranking: bool,
) -> FiltersResult<Vec<Facet>> {
    let values = count_facet_values(ctx, facet_key).await?;
    Ok(single_facet(facet_key, title, values, disallow_auto_ranking))
}

pub fn single_facet(facet_key: &str, title: &str, values: Vec<FacetValue>, disallow_auto_ranking: bool) -> Vec<Facet> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut facet = Facet::new(facet_key, title, values);
    facet.disallow_auto_ranking = disallow_auto_ranking;
    vec![facet]
}
