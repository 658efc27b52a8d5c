//! Light/dark theme preference.
//!
//! Stored as the bare string `light` or `dark` (not JSON) under its own key.
//! Anything else in storage is treated as "no preference".

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn load(&self) -> Option<Theme> {
        self.store.get(&self.key).as_deref().and_then(Theme::parse)
    }

    /// The saved theme if valid, else the system preference.
    pub fn resolve(&self, prefers_light: bool) -> Theme {
        self.load().unwrap_or(if prefers_light { Theme::Light } else { Theme::Dark })
    }

    /// Resolve the startup theme and write it back.
    pub fn init(&self, prefers_light: bool) -> Result<Theme> {
        let theme = self.resolve(prefers_light);
        self.apply(theme)?;
        Ok(theme)
    }

    pub fn apply(&self, theme: Theme) -> Result<()> {
        self.store.set(&self.key, theme.as_str())?;
        debug!(theme = theme.as_str(), "applied theme");
        Ok(())
    }
}
