//! Attribute-driven facets (size, color, ...) declared per category.

use async_trait::async_trait;
use common::facet::Facet;
use futures::future::try_join_all;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, count_facet_values, single_facet};
use crate::error::{FiltersError, FiltersResult};

pub const DYNAMIC_FACET_KEY: &str = "dynamic";


pub struct DynamicBuilder;

#[async_trait]
impl FacetBuilder for DynamicBuilder {
    fn facet_key(&self) -> &str {
        DYNAMIC_FACET_KEY
    }

    fn with_auto_ranking(&self) -> bool {
        true
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        let options = ctx
            .searcher
            .dynamic_options(ctx.condition, ctx.category_id)
            .await
            .map_err(|e| FiltersError::aggregation(DYNAMIC_FACET_KEY, e))?;

        let counted = try_join_all(options.iter().map(|option| count_facet_values(ctx, &option.key))).await?;

        let facets = options
            .iter()
            .zip(counted)
            .flat_map(|(option, values)| single_facet(&option.key, &option.title, values, option.disallow_auto_ranking))
            .collect();
        Ok(facets)
    }
}
