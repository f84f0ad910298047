//! Dashboard Configuration
//!
//! Defaults mirror the page's built-in constants. An optional JSON override
//! can be placed in local storage under `dashboard-config`.

use serde::Deserialize;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key for config overrides
pub const CONFIG_STORAGE_KEY: &str = "dashboard-config";

/// 25 minutes
pub const DEFAULT_FOCUS_DURATION_SECS: u32 = 25 * 60;
pub const DEFAULT_SCROLL_SPY_OFFSET_PX: i32 = 200;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Focus session length in seconds
    pub focus_duration_secs: u32,
    /// A section becomes current once scrolled within this many px of its top
    pub scroll_spy_offset_px: i32,
    /// Viewport width at or below which navigation closes the sidebar
    pub mobile_breakpoint_px: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            focus_duration_secs: DEFAULT_FOCUS_DURATION_SECS,
            scroll_spy_offset_px: DEFAULT_SCROLL_SPY_OFFSET_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl AppConfig {
    /// Parse an override document. Unknown fields are ignored, missing ones default.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut config: AppConfig = serde_json::from_str(raw)?;
        if config.focus_duration_secs == 0 {
            tracing::warn!("focus_duration_secs must be positive, using default");
            config.focus_duration_secs = DEFAULT_FOCUS_DURATION_SECS;
        }
        Ok(config)
    }

    /// Load overrides from storage; absent key yields defaults.
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        match store.get(CONFIG_STORAGE_KEY)? {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
