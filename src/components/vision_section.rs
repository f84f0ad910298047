//! Vision Board Section

use leptos::prelude::*;

use crate::components::{DeleteButton, Modal, ModalActions, TextAreaField, TextField};
use crate::models::{Item, ItemKind, NewItem};
use crate::store::{store_add_item, store_items, store_remove_item, use_app_store};

const VISION_PLACEHOLDER: &str = "/api/placeholder/250/150";

#[component]
pub fn VisionSection() -> impl IntoView {
    let store = use_app_store();
    let modal_open = RwSignal::new(false);

    view! {
        <section id="vision" class="section">
            <div class="section-header">
                <h2>"Vision Board"</h2>
                <button id="add-vision-btn" class="primary-btn" on:click=move |_| modal_open.set(true)>
                    "+ Add Vision"
                </button>
            </div>

            <div class="vision-grid">
                <For
                    each=move || store_items(&store, ItemKind::Vision)
                    key=|item| item.id
                    children=move |item| view! { <VisionCard item=item /> }
                />
            </div>

            <VisionForm open=modal_open />
        </section>
    }
}

#[component]
fn VisionCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let alt = format!("{} visualization", item.title);

    view! {
        <div class="vision-card">
            <div class="vision-header">
                <h3>{item.title}</h3>
                <div class="vision-actions">
                    <DeleteButton
                        button_class="delete-vision-btn"
                        label="Delete vision"
                        on_delete=move |_: ()| store_remove_item(&store, ItemKind::Vision, id)
                    />
                </div>
            </div>
            <div class="vision-image">
                <img src=VISION_PLACEHOLDER alt=alt />
            </div>
            <p>{item.description.unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn VisionForm(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_item = NewItem::titled(title.get_untracked()).with_description(description.get_untracked());
        store_add_item(&store, ItemKind::Vision, new_item);
        title.set(String::new());
        description.set(String::new());
        open.set(false);
    };

    view! {
        <Modal id="vision-modal" title="Add Vision" open=open>
            <form id="vision-form" on:submit=submit>
                <TextField id="vision-title" label="Title" value=title />
                <TextAreaField id="vision-description" label="Description" value=description />
                <ModalActions open=open submit_label="Add Vision" />
            </form>
        </Modal>
    }
}
