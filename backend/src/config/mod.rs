//! Filters engine configuration, loaded once per process.

mod order_spec;
pub use order_spec::{OrderDependency, OrderSpec};

mod short_list_config;
pub use short_list_config::{DEFAULT_SHORT_LIST_SIZE, ShortListConfig, ShortListWindow};

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{FiltersError, FiltersResult};

pub const DEFAULT_CONFIG_PATH: &str = "config/filters.json";


/// What a build pass does when one facet cannot be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the pass and return the error; no partial filter set.
    #[default]
    FailFast,
    /// Log and drop the failing facet, keep building the others.
    SkipFacet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    pub order: OrderSpec,
    #[serde(default)]
    pub short_list: ShortListConfig,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub aggregation_timeout_ms: Option<u64>,
    /// Countries where the seller facet is never built.
    #[serde(default)]
    pub seller_disabled_countries: Vec<String>,
}

impl FiltersConfig {
    pub fn new(order: OrderSpec, short_list: ShortListConfig) -> FiltersResult<Self> {
        let config = Self {
            order,
            short_list,
            failure_policy: FailurePolicy::default(),
            aggregation_timeout_ms: None,
            seller_disabled_countries: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_aggregation_timeout(mut self, timeout: Duration) -> Self {
        // sub-millisecond timeouts round up, zero would fail validation
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1);
        self.aggregation_timeout_ms = Some(millis);
        self
    }

    pub fn aggregation_timeout(&self) -> Option<Duration> {
        self.aggregation_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> FiltersResult<()> {
        self.order.validate()?;
        self.short_list.validate()?;
        if self.aggregation_timeout_ms == Some(0) {
            return Err(FiltersError::ConfigurationError(
                "aggregation_timeout_ms must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> FiltersResult<Self> {
        let config: FiltersConfig = serde_json::from_str(json)
            .map_err(|e| FiltersError::ConfigurationError(format!("cannot parse filters config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FiltersResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            FiltersError::ConfigurationError(format!("cannot read filters config {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by `FILTERS_CONFIG`, or the default path.
    pub fn from_env() -> FiltersResult<Self> {
        let path = std::env::var("FILTERS_CONFIG").unwrap_or(DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config = FiltersConfig::from_json(r#"{"order": {"firsts_order": ["category"]}}"#).unwrap();
        assert_eq!(config.short_list.default_short_list_size, DEFAULT_SHORT_LIST_SIZE);
        assert_eq!(config.short_list.window, ShortListWindow::CappedByDefault);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.aggregation_timeout(), None);
    }

    #[test]
    fn missing_order_spec_fails() {
        let err = FiltersConfig::from_json(r#"{"short_list": {"default_short_list_size": 5}}"#).unwrap_err();
        assert!(matches!(err, FiltersError::ConfigurationError(_)));
    }

    #[test]
    fn zero_short_list_size_fails() {
        let err = FiltersConfig::from_json(
            r#"{"order": {"lasts_order": ["state"]}, "short_list": {"default_short_list_size": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FiltersError::ConfigurationError(_)));
    }

    #[test]
    fn parses_policies() {
        let config = FiltersConfig::from_json(
            r#"{
                "order": {"firsts_order": ["category"]},
                "short_list": {"default_short_list_size": 7, "window": "rank_count"},
                "failure_policy": "skip_facet",
                "aggregation_timeout_ms": 1500,
                "seller_disabled_countries": ["uz"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.short_list, ShortListConfig { default_short_list_size: 7, window: ShortListWindow::RankCount });
        assert_eq!(config.failure_policy, FailurePolicy::SkipFacet);
        assert_eq!(config.aggregation_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.seller_disabled_countries, vec!["uz"]);
    }

    #[test]
    fn tiny_and_huge_timeouts_stay_valid() {
        let base = FiltersConfig::new(OrderSpec::new(vec!["category"], vec![], vec![]), ShortListConfig::default()).unwrap();

        let config = base.clone().with_aggregation_timeout(Duration::from_micros(10));
        assert_eq!(config.aggregation_timeout(), Some(Duration::from_millis(1)));
        assert!(config.validate().is_ok());

        let config = base.with_aggregation_timeout(Duration::MAX);
        assert_eq!(config.aggregation_timeout_ms, Some(u64::MAX));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shipped_config_is_valid() {
        let json = include_str!("../../config/filters.json");
        assert!(FiltersConfig::from_json(json).is_ok());
    }
}
