//! Tasks Section
//!
//! Checklist rows; checking a task strikes it through.

use leptos::prelude::*;

use crate::components::{DeleteButton, Modal, ModalActions, TextField};
use crate::models::{Item, ItemKind, NewItem};
use crate::store::{
    store_add_item, store_item_count, store_items, store_remove_item, store_task_completed,
    store_toggle_task, use_app_store,
};

const DONE_STYLE: &str = "text-decoration: line-through; opacity: 0.6;";
const OPEN_STYLE: &str = "text-decoration: none; opacity: 1;";

#[component]
pub fn TasksSection() -> impl IntoView {
    let store = use_app_store();
    let modal_open = RwSignal::new(false);

    view! {
        <section id="tasks" class="section">
            <div class="section-header">
                <h2>"Tasks"</h2>
                <button id="add-task-btn" class="primary-btn" on:click=move |_| modal_open.set(true)>
                    "+ Add Task"
                </button>
            </div>

            <ul id="tasks-list" class="tasks-list">
                <For
                    each=move || store_items(&store, ItemKind::Task)
                    key=|item| item.id
                    children=move |item| view! { <TaskRow item=item /> }
                />
            </ul>
            <p class="item-count">{move || format!("{} tasks", store_item_count(&store, ItemKind::Task))}</p>

            <TaskForm open=modal_open />
        </section>
    }
}

/// A single task row. Completed state is read live from the store since
/// rows are keyed by id only.
#[component]
fn TaskRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let dom_id = item.dom_id();
    let done = move || store_task_completed(&store, id);

    view! {
        <li class=move || if done() { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                id=dom_id.clone()
                class="task-checkbox"
                prop:checked=done
                on:change=move |_| {
                    store_toggle_task(&store, id);
                }
            />
            <label for=dom_id style=move || if done() { DONE_STYLE } else { OPEN_STYLE }>
                {item.title}
            </label>
            <div class="task-actions">
                <DeleteButton
                    button_class="delete-task-btn"
                    label="Delete task"
                    on_delete=move |_: ()| store_remove_item(&store, ItemKind::Task, id)
                />
            </div>
        </li>
    }
}

#[component]
fn TaskForm(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let name = RwSignal::new(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_item(&store, ItemKind::Task, NewItem::titled(name.get_untracked()));
        name.set(String::new());
        open.set(false);
    };

    view! {
        <Modal id="task-modal" title="Add Task" open=open>
            <form id="task-form" on:submit=submit>
                <TextField id="task-name" label="Task" value=name placeholder="What needs doing?" />
                <ModalActions open=open submit_label="Add Task" />
            </form>
        </Modal>
    }
}
