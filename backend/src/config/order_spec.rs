//! Display ordering rules for facets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FiltersError, FiltersResult};


/// Slaves are placed right after their master, in the listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDependency {
    pub master: String,
    pub slaves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderSpec {
    pub firsts_order: Vec<String>,
    pub dependencies: Vec<OrderDependency>,
    pub lasts_order: Vec<String>,
}

impl OrderSpec {
    pub fn new(firsts_order: Vec<&str>, dependencies: Vec<(&str, Vec<&str>)>, lasts_order: Vec<&str>) -> Self {
        Self {
            firsts_order: firsts_order.into_iter().map(String::from).collect(),
            dependencies: dependencies
                .into_iter()
                .map(|(master, slaves)| OrderDependency {
                    master: master.to_string(),
                    slaves: slaves.into_iter().map(String::from).collect(),
                })
                .collect(),
            lasts_order: lasts_order.into_iter().map(String::from).collect(),
        }
    }

    pub fn is_last(&self, key: &str) -> bool {
        self.lasts_order.iter().any(|last| last == key)
    }

    pub fn validate(&self) -> FiltersResult<()> {
        if self.firsts_order.is_empty() && self.dependencies.is_empty() && self.lasts_order.is_empty() {
            return Err(FiltersError::ConfigurationError("order spec is empty".to_string()));
        }

        let keys = self
            .firsts_order
            .iter()
            .chain(self.lasts_order.iter())
            .chain(self.dependencies.iter().flat_map(|dep| std::iter::once(&dep.master).chain(dep.slaves.iter())));
        for key in keys {
            if key.trim().is_empty() {
                return Err(FiltersError::ConfigurationError("order spec contains a blank facet key".to_string()));
            }
        }

        check_unique("firsts_order", self.firsts_order.iter())?;
        check_unique("lasts_order", self.lasts_order.iter())?;
        check_unique("dependency masters", self.dependencies.iter().map(|dep| &dep.master))?;

        if let Some(key) = self.firsts_order.iter().find(|key| self.is_last(key)) {
            return Err(FiltersError::ConfigurationError(format!(
                "facet `{key}` is listed both first and last"
            )));
        }
        for dependency in &self.dependencies {
            if dependency.slaves.iter().any(|slave| *slave == dependency.master) {
                return Err(FiltersError::ConfigurationError(format!(
                    "facet `{}` depends on itself",
                    dependency.master
                )));
            }
            check_unique(&format!("slaves of `{}`", dependency.master), dependency.slaves.iter())?;
        }
        Ok(())
    }
}

fn check_unique<'a>(what: &str, keys: impl Iterator<Item = &'a String>) -> FiltersResult<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(FiltersError::ConfigurationError(format!("duplicate facet `{key}` in {what}")));
        }
    }
    Ok(())
}
