//! Sidebar Component
//!
//! Section links with scroll-spy highlighting, plus the theme switch.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::nav::{self, SECTIONS};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let offset = ctx.config.scroll_spy_offset_px;

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        match nav::section_offsets() {
            Ok(offsets) => {
                let sections: Vec<(&str, i32)> =
                    offsets.iter().map(|(id, top)| (id.as_str(), *top)).collect();
                let current = nav::current_section(nav::scroll_y(), &sections, offset);
                ctx.set_active_section(current.map(str::to_string));
            }
            Err(err) => tracing::debug!(error = %err, "scroll-spy skipped"),
        }
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <aside class=move || if ctx.sidebar_open.get() { "sidebar active" } else { "sidebar" }>
            <div class="sidebar-header">
                <h1>"Anti-Dispersion Hub"</h1>
            </div>

            <nav class="sidebar-nav">
                <ul>
                    {SECTIONS.iter().map(|(id, label)| {
                        let id: &'static str = *id;
                        let is_active = move || ctx.active_section.get().as_deref() == Some(id);
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", id)
                                    class=move || if is_active() { "active" } else { "" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.set_active_section(Some(id.to_string()));
                                        if let Err(err) = nav::scroll_to_section(id) {
                                            tracing::warn!(error = %err, section = id, "could not scroll to section");
                                        }
                                        let is_mobile = nav::viewport_width()
                                            .is_some_and(|width| width <= ctx.config.mobile_breakpoint_px);
                                        if is_mobile {
                                            ctx.close_sidebar();
                                        }
                                    }
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>

            <div class="sidebar-footer">
                <button id="theme-switch" class="theme-switch" on:click=move |_| ctx.toggle_theme()>
                    {move || if ctx.theme.get().is_dark() { "☀ Light mode" } else { "☾ Dark mode" }}
                </button>
            </div>
        </aside>
    }
}
