//! Tools Section
//!
//! Tool cards with a category filter bar and an add-tool modal.

use leptos::prelude::*;

use crate::components::{DeleteButton, Modal, ModalActions, TextAreaField, TextField};
use crate::filter::{CategoryFilter, TOOL_CATEGORIES};
use crate::models::{Item, ItemKind, NewItem};
use crate::store::{
    store_add_item, store_items, store_remove_item, store_set_tool_filter, store_tool_filter,
    use_app_store,
};

#[component]
pub fn ToolsSection() -> impl IntoView {
    let store = use_app_store();
    let modal_open = RwSignal::new(false);

    view! {
        <section id="tools" class="section">
            <div class="section-header">
                <h2>"Tools"</h2>
                <button id="add-tool-btn" class="primary-btn" on:click=move |_| modal_open.set(true)>
                    "+ Add Tool"
                </button>
            </div>

            <CategoryFilterBar />

            <div id="tools-container" class="cards-grid">
                <For
                    each=move || store_items(&store, ItemKind::Tool)
                    key=|item| item.id
                    children=move |item| view! { <ToolCard item=item /> }
                />
            </div>

            <ToolForm open=modal_open />
        </section>
    }
}

/// Filter buttons; the active one decides which tool cards are shown
#[component]
fn CategoryFilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {TOOL_CATEGORIES.iter().map(|(value, label)| {
                let value: &'static str = *value;
                let is_active = move || store_tool_filter(&store).value() == value;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=value
                        on:click=move |_| store_set_tool_filter(&store, CategoryFilter::from_value(value))
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ToolCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let category = item.category.clone();
    let visible_category = category.clone();
    let href = item.link_target().map(str::to_string);

    let card_class = move || {
        if store_tool_filter(&store).shows(visible_category.as_deref()) {
            "card tool-card"
        } else {
            "card tool-card hidden"
        }
    };

    view! {
        <div class=card_class data-category=category>
            <div class="card-header">
                <h3>{item.title}</h3>
                <div class="card-actions">
                    <DeleteButton
                        button_class="delete-btn"
                        label="Delete"
                        on_delete=move |_: ()| store_remove_item(&store, ItemKind::Tool, id)
                    />
                </div>
            </div>
            <p>{item.description.unwrap_or_default()}</p>
            {href.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="card-link">
                    "Open Tool"
                </a>
            })}
        </div>
    }
}

#[component]
fn ToolForm(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let link = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut new_item = NewItem::titled(name.get_untracked())
            .with_description(description.get_untracked())
            .with_link(link.get_untracked());
        let selected = category.get_untracked();
        if !selected.is_empty() {
            new_item = new_item.with_category(selected);
        }
        store_add_item(&store, ItemKind::Tool, new_item);

        for field in [name, description, link, category] {
            field.set(String::new());
        }
        open.set(false);
    };

    view! {
        <Modal id="tool-modal" title="Add Tool" open=open>
            <form id="tool-form" on:submit=submit>
                <TextField id="tool-name" label="Name" value=name />
                <TextAreaField id="tool-description" label="Description" value=description />
                <TextField id="tool-link" label="Link" value=link input_type="url" placeholder="https://" />
                <div class="form-group">
                    <label for="tool-category">"Category"</label>
                    <select
                        id="tool-category"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"None"</option>
                        {TOOL_CATEGORIES.iter()
                            .filter(|(value, _)| *value != "all")
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <ModalActions open=open submit_label="Add Tool" />
            </form>
        </Modal>
    }
}
