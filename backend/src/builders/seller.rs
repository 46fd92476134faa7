//! Seller facet. Only built where the region policy allows it.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const SELLER_FACET_KEY: &str = "seller";


pub struct SellerBuilder;

#[async_trait]
impl FacetBuilder for SellerBuilder {
    fn facet_key(&self) -> &str {
        SELLER_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, SELLER_FACET_KEY, "Seller", false).await
    }
}
