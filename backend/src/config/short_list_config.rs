//! Short list sizing.

use serde::{Deserialize, Serialize};

use crate::error::{FiltersError, FiltersResult};

pub const DEFAULT_SHORT_LIST_SIZE: usize = 10;


/// How the short list window is chosen when a facet has ranked values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShortListWindow {
    /// Window is the rank count, never more than the default size.
    #[default]
    CappedByDefault,
    /// Window is the rank count, even when it exceeds the default size.
    RankCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortListConfig {
    pub default_short_list_size: usize,
    pub window: ShortListWindow,
}

impl Default for ShortListConfig {
    fn default() -> Self {
        Self {
            default_short_list_size: DEFAULT_SHORT_LIST_SIZE,
            window: ShortListWindow::default(),
        }
    }
}

impl ShortListConfig {
    pub fn with_size(default_short_list_size: usize) -> Self {
        Self { default_short_list_size, ..Self::default() }
    }

    pub fn validate(&self) -> FiltersResult<()> {
        if self.default_short_list_size == 0 {
            return Err(FiltersError::ConfigurationError(
                "default_short_list_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
