//! Facet builders, one per facet type.

pub mod facet_builder;
pub use facet_builder::{BuildContext, FacetBuilder};

pub mod category;
pub mod dynamic;
pub mod loyalty_program;
pub mod price;
pub mod producer;
pub mod promotion;
pub mod sell_status;
pub mod seller;
pub mod series;
pub mod state;


/// Builders in registration order. This order is what facets fall back to
/// when the order spec does not mention them.
pub fn default_builders() -> Vec<Box<dyn FacetBuilder>> {
    vec![
        Box::new(dynamic::DynamicBuilder),
        Box::new(category::CategoryBuilder),
        Box::new(price::PriceBuilder),
        Box::new(producer::ProducerBuilder),
        Box::new(series::SeriesBuilder),
        Box::new(seller::SellerBuilder),
        Box::new(loyalty_program::LoyaltyProgramBuilder),
        Box::new(state::StateBuilder),
        Box::new(promotion::PromotionBuilder),
        Box::new(sell_status::SellStatusBuilder),
    ]
}
