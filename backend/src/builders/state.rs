//! Goods state facet (new, used, refurbished).

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const STATE_FACET_KEY: &str = "state";


pub struct StateBuilder;

#[async_trait]
impl FacetBuilder for StateBuilder {
    fn facet_key(&self) -> &str {
        STATE_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, STATE_FACET_KEY, "State", true).await
    }
}
