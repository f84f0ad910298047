//! Theme Preference
//!
//! Light/dark mode persisted under the `theme` storage key. Storage is the
//! source of truth; the `dark-theme` body class mirrors it.

use crate::error::{DashboardError, Result};
use crate::storage::KeyValueStore;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn storage_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an explicit "dark" selects dark mode
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Result<Theme> {
    let stored = store.get(THEME_STORAGE_KEY)?;
    Ok(Theme::from_storage(stored.as_deref()))
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<()> {
    store.set(THEME_STORAGE_KEY, theme.storage_value())
}

/// Mirror the theme onto `<body>`
pub fn apply_theme(theme: Theme) -> Result<()> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or(DashboardError::NoWindow)?;
    body.class_list()
        .toggle_with_force(DARK_THEME_CLASS, theme.is_dark())
        .map(|_| ())
        .map_err(|e| DashboardError::Dom(format!("{:?}", e)))
}
