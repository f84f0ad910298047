//! Ideas Section

use leptos::prelude::*;

use crate::components::{DeleteButton, Modal, ModalActions, TextAreaField, TextField};
use crate::models::{Item, ItemKind, NewItem};
use crate::store::{store_add_item, store_items, store_remove_item, use_app_store};

#[component]
pub fn IdeasSection() -> impl IntoView {
    let store = use_app_store();
    let modal_open = RwSignal::new(false);

    view! {
        <section id="ideas" class="section">
            <div class="section-header">
                <h2>"Ideas"</h2>
                <button id="add-idea-btn" class="primary-btn" on:click=move |_| modal_open.set(true)>
                    "+ Add Idea"
                </button>
            </div>

            <div id="ideas-container" class="cards-grid">
                <For
                    each=move || store_items(&store, ItemKind::Idea)
                    key=|item| item.id
                    children=move |item| view! { <IdeaCard item=item /> }
                />
            </div>

            <IdeaForm open=modal_open />
        </section>
    }
}

#[component]
fn IdeaCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let created = item.created_label();

    view! {
        <div class="idea-card">
            <div class="idea-header">
                <h3>{item.title}</h3>
                <div class="idea-actions">
                    <DeleteButton
                        button_class="delete-idea-btn"
                        label="Delete idea"
                        on_delete=move |_: ()| store_remove_item(&store, ItemKind::Idea, id)
                    />
                </div>
            </div>
            <p>{item.description.unwrap_or_default()}</p>
            <div class="idea-meta">
                <span class="idea-date">{created}</span>
            </div>
        </div>
    }
}

#[component]
fn IdeaForm(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_item = NewItem::titled(title.get_untracked()).with_description(description.get_untracked());
        store_add_item(&store, ItemKind::Idea, new_item);
        title.set(String::new());
        description.set(String::new());
        open.set(false);
    };

    view! {
        <Modal id="idea-modal" title="New Idea" open=open>
            <form id="idea-form" on:submit=submit>
                <TextField id="idea-title" label="Title" value=title />
                <TextAreaField id="idea-description" label="Description" value=description />
                <ModalActions open=open submit_label="Save Idea" />
            </form>
        </Modal>
    }
}
