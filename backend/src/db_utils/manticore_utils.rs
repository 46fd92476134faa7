use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_MANTICORE_URL: &str = "http://127.0.0.1:9308";

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResult<T> {
    pub hits: RawSearchResultHits<T>,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub took: u64,
    pub aggregations: Option<BTreeMap<String, RawSearchResultAggregation>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHits<T> {
    pub hits: Vec<RawSearchResultHit<T>>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RawSearchResultAggregation {
    pub buckets: Vec<RawSearchResultAggregationBucket>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawSearchResultAggregationBucket {
    pub key: serde_json::Value,
    pub doc_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHit<T> {
    pub _source: T,
}

pub fn manticore_url() -> String {
    std::env::var("MANTICORE_URL").unwrap_or(DEFAULT_MANTICORE_URL.to_string())
}

pub async fn manticore_search_sql<T: DeserializeOwned + std::fmt::Debug>(
    client: &reqwest::Client,
    base_url: &str,
    sql: String,
) -> anyhow::Result<RawSearchResult<T>> {
    let t0 = std::time::Instant::now();
    let response = client.post(format!("{base_url}/sql")).body(sql).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    debug!(len = response_txt.len(), took_ms = t0.elapsed().as_millis() as u64, "manticore response");
    let response: RawSearchResult<T> = serde_json::from_str(&response_txt)?;
    if response.timed_out {
        anyhow::bail!("manticore query timed out after {}ms", response.took);
    }
    Ok(response)
}
