//! Region-specific switches consulted by the filters builder.

pub trait RegionPolicy: Send + Sync {
    fn is_seller_facet_enabled(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct StaticRegionPolicy {
    pub seller_facet_enabled: bool,
}

impl StaticRegionPolicy {
    pub fn enabled() -> Self {
        Self { seller_facet_enabled: true }
    }

    pub fn without_seller() -> Self {
        Self { seller_facet_enabled: false }
    }
}

impl RegionPolicy for StaticRegionPolicy {
    fn is_seller_facet_enabled(&self) -> bool {
        self.seller_facet_enabled
    }
}

/// Seller facet is off in a configured set of countries.
#[derive(Debug, Clone)]
pub struct CountryRegionPolicy {
    pub current_country: String,
    pub seller_disabled_countries: Vec<String>,
}

impl CountryRegionPolicy {
    pub fn new(current_country: impl Into<String>, seller_disabled_countries: Vec<String>) -> Self {
        Self { current_country: current_country.into(), seller_disabled_countries }
    }
}

impl RegionPolicy for CountryRegionPolicy {
    fn is_seller_facet_enabled(&self) -> bool {
        !self
            .seller_disabled_countries
            .iter()
            .any(|country| country.eq_ignore_ascii_case(&self.current_country))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_policy_matches_case_insensitively() {
        let policy = CountryRegionPolicy::new("UZ", vec!["uz".to_string()]);
        assert!(!policy.is_seller_facet_enabled());

        let policy = CountryRegionPolicy::new("ua", vec!["uz".to_string()]);
        assert!(policy.is_seller_facet_enabled());
    }
}
