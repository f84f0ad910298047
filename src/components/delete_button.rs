//! Delete Button Component
//!
//! Icon button that removes its item immediately; no confirmation, no undo.

use leptos::prelude::*;

#[component]
pub fn DeleteButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=format!("icon-button {}", button_class)
            aria-label=label
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "🗑"
        </button>
    }
}
