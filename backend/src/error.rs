//! Error taxonomy of the filters engine.

use thiserror::Error;


#[derive(Debug, Error)]
pub enum FiltersError {
    /// The searcher could not aggregate values for a facet (I/O, timeout,
    /// malformed backend response).
    #[error("aggregation unavailable for facet `{facet_key}`")]
    AggregationUnavailable {
        facet_key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    #[error("configuration error: {0}")]
    ConfigurationError(String),

    #[error("filters build cancelled")]
    Cancelled,
}

impl FiltersError {
    pub fn aggregation(facet_key: impl Into<String>, source: anyhow::Error) -> Self {
        FiltersError::AggregationUnavailable { facet_key: facet_key.into(), source }
    }
}

pub type FiltersResult<T> = Result<T, FiltersError>;
