//! Anti-Dispersion Hub App
//!
//! Main application component: sidebar plus the stacked dashboard sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    FocusTimerSection, GoalSection, IdeasSection, Sidebar, TasksSection, ToolsSection, VisionSection,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify;
use crate::storage::BrowserStorage;
use crate::store::AppState;
use crate::theme::{self, Theme};

/// Read config overrides and the saved theme, falling back to defaults
fn load_startup_settings() -> (AppConfig, Theme) {
    let storage = match BrowserStorage::open() {
        Ok(storage) => storage,
        Err(err) => {
            tracing::warn!(error = %err, "storage unavailable, using defaults");
            return (AppConfig::default(), Theme::default());
        }
    };

    let config = AppConfig::load(&storage).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring dashboard config");
        AppConfig::default()
    });
    let theme = theme::load_theme(&storage).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read saved theme");
        Theme::default()
    });
    (config, theme)
}

#[component]
pub fn App() -> impl IntoView {
    let (config, saved_theme) = load_startup_settings();
    tracing::debug!(?config, theme = saved_theme.storage_value(), "startup settings loaded");

    // State
    let (theme, set_theme) = signal(saved_theme);
    let ctx = AppContext::new(config, (theme, set_theme));

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    // Mirror the theme onto <body>
    Effect::new(move |_| {
        if let Err(err) = theme::apply_theme(theme.get()) {
            tracing::warn!(error = %err, "could not apply theme class");
        }
    });

    notify::request_permission();

    view! {
        <div class="app-layout">
            <button class="menu-toggle" aria-label="Toggle menu" on:click=move |_| ctx.toggle_sidebar()>
                "☰"
            </button>

            <Sidebar />

            <main class="main-content">
                <ToolsSection />
                <TasksSection />
                <IdeasSection />
                <VisionSection />
                <GoalSection />
                <FocusTimerSection />
            </main>
        </div>
    }
}
