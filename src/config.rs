//! Picker configuration.
//!
//! Passed from JS as an optional plain object; every field has a default so
//! `{}` or `undefined` yields the stock setup.

use serde::{Deserialize, Serialize};

use crate::error::{LottoError, Result};
use crate::types::HISTORY_LIMIT;

pub const DEFAULT_HISTORY_KEY: &str = "lotto.history.v1";
pub const DEFAULT_THEME_KEY: &str = "lotto.theme.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Storage key of the history array.
    pub history_key: String,
    /// Storage key of the theme string.
    pub theme_key: String,
    /// Max entries kept in history.
    pub history_limit: usize,
    /// Initial state of the "sort main numbers" toggle.
    pub sort_main: bool,
    /// Initial state of the "copy after generating" toggle.
    pub auto_copy: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            history_limit: HISTORY_LIMIT,
            sort_main: true,
            auto_copy: false,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_key.is_empty() {
            return Err(LottoError::config("history key must not be empty"));
        }
        if self.theme_key.is_empty() {
            return Err(LottoError::config("theme key must not be empty"));
        }
        if self.history_key == self.theme_key {
            return Err(LottoError::config("history and theme keys must differ"));
        }
        if self.history_limit == 0 {
            return Err(LottoError::config("history limit must be at least 1"));
        }
        Ok(())
    }
}
