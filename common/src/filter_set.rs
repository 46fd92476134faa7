//! Output of one filters build pass.

use serde::{Deserialize, Serialize};

use crate::facet::Facet;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ChosenValue {
    pub facet_key: String,
    pub value_id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterSet {
    pub filters: Vec<Facet>,
    pub chosen: Vec<ChosenValue>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn option_names(&self) -> Vec<&str> {
        self.filters.iter().map(|facet| facet.option_name.as_str()).collect()
    }
}
