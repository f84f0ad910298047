//! Modal Component
//!
//! Overlay panel hosting a creation form. Closes on ×, on a click outside
//! the panel, or when the owner flips `open`.

use leptos::prelude::*;

#[component]
pub fn Modal(
    id: &'static str,
    title: &'static str,
    open: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=move || if open.get() { "modal active" } else { "modal" }
            on:click=move |_| open.set(false)
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="close-modal" aria-label="Close" on:click=move |_| open.set(false)>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Cancel + submit row shared by every modal form
#[component]
pub fn ModalActions(open: RwSignal<bool>, submit_label: &'static str) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="button" class="cancel-btn" on:click=move |_| open.set(false)>"Cancel"</button>
            <button type="submit" class="primary-btn">{submit_label}</button>
        </div>
    }
}
