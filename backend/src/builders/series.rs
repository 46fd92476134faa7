//! Series facet: product lines within producers.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const SERIES_FACET_KEY: &str = "series";


pub struct SeriesBuilder;

#[async_trait]
impl FacetBuilder for SeriesBuilder {
    fn facet_key(&self) -> &str {
        SERIES_FACET_KEY
    }

    fn with_auto_ranking(&self) -> bool {
        true
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, SERIES_FACET_KEY, "Series", false).await
    }
}
