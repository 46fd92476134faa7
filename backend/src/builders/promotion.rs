//! Promotion facet: goods taking part in running promotions.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const PROMOTION_FACET_KEY: &str = "promotion";


pub struct PromotionBuilder;

#[async_trait]
impl FacetBuilder for PromotionBuilder {
    fn facet_key(&self) -> &str {
        PROMOTION_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, PROMOTION_FACET_KEY, "Promotion", false).await
    }
}
