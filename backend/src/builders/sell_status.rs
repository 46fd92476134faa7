//! Sell status facet (available, ending, on order).

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const SELL_STATUS_FACET_KEY: &str = "sell_status";


pub struct SellStatusBuilder;

#[async_trait]
impl FacetBuilder for SellStatusBuilder {
    fn facet_key(&self) -> &str {
        SELL_STATUS_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, SELL_STATUS_FACET_KEY, "Sell status", true).await
    }
}
