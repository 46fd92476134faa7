//! Price facet: price ranges in ascending order.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, count_facet_values, single_facet};
use crate::error::FiltersResult;

pub const PRICE_FACET_KEY: &str = "price";


pub struct PriceBuilder;

#[async_trait]
impl FacetBuilder for PriceBuilder {
    fn facet_key(&self) -> &str {
        PRICE_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        let mut values = count_facet_values(ctx, PRICE_FACET_KEY).await?;
        // a range outside the current result set is never offered
        values.retain(|value| !value.disabled);
        Ok(single_facet(PRICE_FACET_KEY, "Price", values, true))
    }
}
