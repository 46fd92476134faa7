//! Category facet: subcategories reachable from the current listing.

use async_trait::async_trait;
use common::facet::Facet;

use crate::builders::facet_builder::{BuildContext, FacetBuilder, count_facet_values, single_facet};
use crate::error::FiltersResult;

pub const CATEGORY_FACET_KEY: &str = "category";


pub struct CategoryBuilder;

#[async_trait]
impl FacetBuilder for CategoryBuilder {
    fn facet_key(&self) -> &str {
        CATEGORY_FACET_KEY
    }

    async fn build(&self, ctx: &BuildContext<'_>) -> FiltersResult<Vec<Facet>> {
        let mut values = count_facet_values(ctx, CATEGORY_FACET_KEY).await?;
        // the listing's own category is not a choice
        values.retain(|value| value.id != ctx.category_id);
        Ok(single_facet(CATEGORY_FACET_KEY, "Category", values, false))
    }
}
