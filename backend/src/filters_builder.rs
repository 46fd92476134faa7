//! Builds the ordered filter set of one catalog listing.

use std::{collections::HashSet, sync::Arc};

use common::{
    condition::Condition,
    facet::Facet,
    filter_set::{ChosenValue, FilterSet},
};
use futures::future::{join_all, try_join_all};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::builders::{BuildContext, FacetBuilder, default_builders, seller::SELLER_FACET_KEY};
use crate::config::{FailurePolicy, FiltersConfig};
use crate::error::{FiltersError, FiltersResult};
use crate::ordering::{mark_filters_order, ordered_sequence};
use crate::ranking::compose_short_list;
use crate::region::RegionPolicy;
use crate::searcher::Searcher;

/// Facet key reported when the searcher fails before any facet is counted.
pub const ALL_FACETS: &str = "*";


pub struct FiltersBuilder {
    category_id: u64,
    condition: Condition,
    searcher: Arc<dyn Searcher>,
    region_policy: Arc<dyn RegionPolicy>,
    config: Arc<FiltersConfig>,
    builders: Vec<Box<dyn FacetBuilder>>,
    filter_set: FilterSet,
}

impl FiltersBuilder {
    pub fn new(
        category_id: u64,
        condition: Condition,
        searcher: Arc<dyn Searcher>,
        region_policy: Arc<dyn RegionPolicy>,
        config: Arc<FiltersConfig>,
    ) -> FiltersResult<Self> {
        config.validate()?;
        Ok(Self {
            category_id,
            condition,
            searcher,
            region_policy,
            config,
            builders: default_builders(),
            filter_set: FilterSet::default(),
        })
    }

    /// Replaces the registered builders. Registration order is the fallback
    /// display order.
    pub fn with_builders(mut self, builders: Vec<Box<dyn FacetBuilder>>) -> Self {
        self.builders = builders;
        self
    }

    pub fn set_category_id(&mut self, category_id: u64) -> &mut Self {
        self.category_id = category_id;
        self
    }

    pub fn set_condition(&mut self, condition: Condition) -> &mut Self {
        self.condition = condition;
        self
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Facets of the last successful build, in display order.
    pub fn filters(&self) -> &[Facet] {
        &self.filter_set.filters
    }

    /// Selected values of the last successful build.
    pub fn chosen(&self) -> &[ChosenValue] {
        &self.filter_set.chosen
    }

    pub fn filter_set(&self) -> &FilterSet {
        &self.filter_set
    }

    pub async fn build_filters(&mut self) -> FiltersResult<&FilterSet> {
        self.filter_set = FilterSet::default();
        let filter_set = self.run_build().await?;
        self.filter_set = filter_set;
        Ok(&self.filter_set)
    }

    /// Like [`build_filters`](Self::build_filters), but gives up as soon as
    /// `cancel` fires. In-flight searcher calls are dropped.
    pub async fn build_filters_until(&mut self, cancel: &CancellationToken) -> FiltersResult<&FilterSet> {
        self.filter_set = FilterSet::default();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FiltersError::Cancelled),
            result = self.run_build() => result,
        };
        self.filter_set = outcome?;
        Ok(&self.filter_set)
    }

    async fn run_build(&self) -> FiltersResult<FilterSet> {
        self.condition.validate().map_err(FiltersError::InvalidCondition)?;

        self.searcher
            .set_filters(&self.condition)
            .await
            .map_err(|e| FiltersError::aggregation(ALL_FACETS, e))?;

        let ctx = BuildContext {
            condition: &self.condition,
            category_id: self.category_id,
            searcher: self.searcher.as_ref(),
            aggregation_timeout: self.config.aggregation_timeout(),
        };

        let enabled: Vec<&dyn FacetBuilder> = self
            .builders
            .iter()
            .map(|builder| builder.as_ref())
            .filter(|builder| builder.facet_key() != SELLER_FACET_KEY || self.region_policy.is_seller_facet_enabled())
            .collect();

        // both joins keep registration order regardless of completion order;
        // try_join_all drops the pending builds on the first error
        let builds = enabled.iter().map(|builder| builder.build(&ctx));
        let outputs: Vec<Vec<Facet>> = match self.config.failure_policy {
            FailurePolicy::FailFast => try_join_all(builds).await?,
            FailurePolicy::SkipFacet => {
                let mut outputs = Vec::with_capacity(enabled.len());
                for (builder, result) in enabled.iter().zip(join_all(builds).await) {
                    match result {
                        Ok(facets) => outputs.push(facets),
                        Err(err @ FiltersError::AggregationUnavailable { .. }) => {
                            warn!(builder = builder.facet_key(), error = ?err, "skipping facet, aggregation unavailable");
                            outputs.push(Vec::new());
                        }
                        Err(err) => return Err(err),
                    }
                }
                outputs
            }
        };

        let mut built: Vec<(Facet, bool)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (builder, facets) in enabled.iter().zip(outputs) {
            for facet in facets {
                if facet.is_empty() {
                    continue;
                }
                if !seen.insert(facet.option_name.clone()) {
                    warn!(facet = %facet.option_name, "duplicate facet dropped");
                    continue;
                }
                debug!(facet = %facet.option_name, values = facet.values.len(), "facet built");
                built.push((facet, builder.with_auto_ranking()));
            }
        }

        let mut filters: Vec<Facet> = built
            .into_iter()
            .map(|(facet, with_auto_ranking)| compose_short_list(facet, with_auto_ranking, &self.config.short_list))
            .collect();

        let marks: Vec<String> = filters.iter().map(|facet| facet.option_name.clone()).collect();
        let sequence = ordered_sequence(&marks, &self.config.order);
        mark_filters_order(&mut filters, &sequence);
        filters.sort_by_key(|facet| facet.order);

        let chosen = collect_chosen(&filters, &self.condition);
        info!(
            category_id = self.category_id,
            filters = filters.len(),
            chosen = chosen.len(),
            "filters built"
        );
        Ok(FilterSet { filters, chosen })
    }
}

/// Values of `filters` selected by `condition`, in display order.
pub fn collect_chosen(filters: &[Facet], condition: &Condition) -> Vec<ChosenValue> {
    let mut chosen = Vec::new();
    for facet in filters {
        let Some(selected) = condition.get(&facet.option_name) else {
            continue;
        };
        for value in &facet.values {
            if selected.iter().any(|selection| value.matches(selection)) {
                chosen.push(ChosenValue {
                    facet_key: facet.option_name.clone(),
                    value_id: value.id,
                    title: value.title.clone(),
                });
            }
        }
    }
    chosen
}
