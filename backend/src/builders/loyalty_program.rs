//! Loyalty program facet.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, build_value_facet};
use crate::error::FiltersResult;

pub const LOYALTY_PROGRAM_FACET_KEY: &str = "loyalty_program";


pub struct LoyaltyProgramBuilder;

#[async_trait]
impl FacetBuilder for LoyaltyProgramBuilder {
    fn facet_key(&self) -> &str {
        LOYALTY_PROGRAM_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        build_value_facet(ctx, LOYALTY_PROGRAM_FACET_KEY, "Loyalty program", true).await
    }
}
