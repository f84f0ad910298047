//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use crate::theme::{self, Theme};
use crate::timer::TimerController;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup configuration
    pub config: AppConfig,
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
    /// Section highlighted in the sidebar - read
    pub active_section: ReadSignal<Option<String>>,
    /// Section highlighted in the sidebar - write
    set_active_section: WriteSignal<Option<String>>,
    /// Mobile sidebar visibility
    pub sidebar_open: RwSignal<bool>,
    /// The single focus timer
    pub timer: TimerController,
}

impl AppContext {
    pub fn new(config: AppConfig, theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        let (active_section, set_active_section) = signal(None::<String>);
        Self {
            config,
            theme: theme.0,
            set_theme: theme.1,
            active_section,
            set_active_section,
            sidebar_open: RwSignal::new(false),
            timer: TimerController::new(config.focus_duration_secs),
        }
    }

    /// Flip light/dark and persist the choice
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);

        let saved = BrowserStorage::open().and_then(|storage| theme::save_theme(&storage, next));
        match saved {
            Ok(()) => tracing::info!(theme = next.storage_value(), "theme changed"),
            Err(err) => tracing::warn!(error = %err, "theme changed but could not be saved"),
        }
    }

    /// Highlight a sidebar link; no-op if already active
    pub fn set_active_section(&self, section: Option<String>) {
        if self.active_section.get_untracked() != section {
            self.set_active_section.set(section);
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
