//! Facet models produced by the filters engine.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionValue;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    /// `0` marks a placeholder value that never goes into the display list.
    pub id: u64,
    /// Url slug, matched against text selections.
    pub name: String,
    pub title: String,
    pub is_rank: bool,
    /// Selecting this value under the current condition would give no results.
    pub disabled: bool,
    pub rank: f64,
    pub count: u64,
}

impl FacetValue {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            name: title.to_lowercase(),
            title,
            is_rank: false,
            disabled: false,
            rank: 0.0,
            count: 0,
        }
    }

    pub fn ranked(mut self, rank: f64) -> Self {
        self.is_rank = true;
        self.rank = rank;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn matches(&self, selected: &ConditionValue) -> bool {
        match selected {
            ConditionValue::Id(id) => self.id != 0 && *id == self.id,
            ConditionValue::Text(text) => *text == self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub option_name: String,
    pub option_title: String,
    /// Full display sequence: short list first, then the rest.
    pub values: Vec<FacetValue>,
    pub short_list: Vec<FacetValue>,
    pub total_found: usize,
    pub total_filtered: usize,
    /// Display position, set once all facets of a pass are built.
    pub order: Option<usize>,
    pub disallow_auto_ranking: bool,
}

impl Facet {
    pub fn new(option_name: impl Into<String>, option_title: impl Into<String>, values: Vec<FacetValue>) -> Self {
        Self {
            option_name: option_name.into(),
            option_title: option_title.into(),
            values,
            short_list: Vec::new(),
            total_found: 0,
            total_filtered: 0,
            order: None,
            disallow_auto_ranking: false,
        }
    }

    pub fn without_auto_ranking(mut self) -> Self {
        self.disallow_auto_ranking = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_value_never_matches_an_id() {
        let value = FacetValue::new(0, "Any");
        assert!(!value.matches(&ConditionValue::Id(0)));
    }

    #[test]
    fn text_selection_matches_slug() {
        let value = FacetValue::new(7, "Samsung Electronics").with_name("samsung");
        assert!(value.matches(&ConditionValue::Text("samsung".into())));
        assert!(!value.matches(&ConditionValue::Text("Samsung Electronics".into())));
        assert!(value.matches(&ConditionValue::Id(7)));
    }
}
