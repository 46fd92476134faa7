//! Active filter selections for one catalog listing.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};


/// A single selected value. Most facets select by value id; a few
/// (price ranges, slugs from the url) select by text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ConditionValue {
    Id(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Condition {
    pub selections: BTreeMap<String, BTreeSet<ConditionValue>>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, facet_key: impl Into<String>, value: ConditionValue) -> Self {
        self.selections.entry(facet_key.into()).or_default().insert(value);
        self
    }

    pub fn has_condition(&self) -> bool {
        self.selections.values().any(|values| !values.is_empty())
    }

    pub fn get(&self, facet_key: &str) -> Option<&BTreeSet<ConditionValue>> {
        self.selections.get(facet_key)
    }

    /// Copy of the condition with one facet's selection dropped, so a facet
    /// is never narrowed by its own values.
    pub fn without(&self, facet_key: &str) -> Self {
        let mut condition = self.clone();
        condition.selections.remove(facet_key);
        condition
    }

    /// Checks the condition is well formed. Returns a description of the
    /// first problem found.
    pub fn validate(&self) -> Result<(), String> {
        for (facet_key, values) in &self.selections {
            if facet_key.trim().is_empty() {
                return Err("facet key must not be blank".to_string());
            }
            if !is_facet_key(facet_key) {
                return Err(format!("facet key `{facet_key}` must only contain a-z, 0-9 and `_`"));
            }
            if values.is_empty() {
                return Err(format!("facet `{facet_key}` has an empty selection"));
            }
            for value in values {
                if let ConditionValue::Text(text) = value {
                    if text.trim().is_empty() {
                        return Err(format!("facet `{facet_key}` has a blank text value"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Facet keys double as backend column names: lowercase ascii letters,
/// digits and underscores only.
pub fn is_facet_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
