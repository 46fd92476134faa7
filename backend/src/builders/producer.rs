//! Producer facet: brands of the listed goods.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const PRODUCER_FACET_KEY: &str = "producer";


pub struct ProducerBuilder;

#[async_trait]
impl FacetBuilder for ProducerBuilder {
    fn facet_key(&self) -> &str {
        PRODUCER_FACET_KEY
    }

    fn with_auto_ranking(&self) -> bool {
        true
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, PRODUCER_FACET_KEY, "Producer", false).await
    }
}
