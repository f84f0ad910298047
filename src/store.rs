//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All list
//! mutations go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::CategoryFilter;
use crate::list::ItemList;
use crate::models::{Item, ItemKind, NewItem};

pub const DEFAULT_MAIN_GOAL: &str = "No main goal set yet.";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub tools: ItemList,
    pub tasks: ItemList,
    pub ideas: ItemList,
    pub visions: ItemList,
    /// Text shown in the main goal section
    pub main_goal: String,
    /// Active tool category filter
    pub tool_filter: CategoryFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tools: ItemList::new(ItemKind::Tool),
            tasks: ItemList::new(ItemKind::Task),
            ideas: ItemList::new(ItemKind::Idea),
            visions: ItemList::new(ItemKind::Vision),
            main_goal: DEFAULT_MAIN_GOAL.to_string(),
            tool_filter: CategoryFilter::All,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn with_list_mut<R>(store: &AppStore, kind: ItemKind, f: impl FnOnce(&mut ItemList) -> R) -> R {
    match kind {
        ItemKind::Tool => f(&mut store.tools().write()),
        ItemKind::Task => f(&mut store.tasks().write()),
        ItemKind::Idea => f(&mut store.ideas().write()),
        ItemKind::Vision => f(&mut store.visions().write()),
    }
}

fn with_list<R>(store: &AppStore, kind: ItemKind, f: impl FnOnce(&ItemList) -> R) -> R {
    match kind {
        ItemKind::Tool => f(&store.tools().read()),
        ItemKind::Task => f(&store.tasks().read()),
        ItemKind::Idea => f(&store.ideas().read()),
        ItemKind::Vision => f(&store.visions().read()),
    }
}

/// Items of one section in append order (tracked)
pub fn store_items(store: &AppStore, kind: ItemKind) -> Vec<Item> {
    with_list(store, kind, |list| list.items().to_vec())
}

/// Number of items in a section (tracked)
pub fn store_item_count(store: &AppStore, kind: ItemKind) -> usize {
    with_list(store, kind, ItemList::len)
}

/// Append an item to its section
pub fn store_add_item(store: &AppStore, kind: ItemKind, new_item: NewItem) -> u32 {
    let id = with_list_mut(store, kind, |list| list.add(new_item));
    tracing::info!(kind = kind.label(), id, "item added");
    id
}

/// Remove an item from its section by ID
pub fn store_remove_item(store: &AppStore, kind: ItemKind, id: u32) {
    let removed = with_list_mut(store, kind, |list| list.remove(id));
    if removed {
        tracing::info!(kind = kind.label(), id, "item deleted");
    } else {
        tracing::debug!(kind = kind.label(), id, "delete skipped, item not found");
    }
}

/// Whether a task is marked done (tracked)
pub fn store_task_completed(store: &AppStore, id: u32) -> bool {
    store
        .tasks()
        .read()
        .get(id)
        .map(|task| task.completed)
        .unwrap_or(false)
}

/// Flip a task's done state
pub fn store_toggle_task(store: &AppStore, id: u32) -> Option<bool> {
    let completed = store.tasks().write().toggle_completed(id);
    tracing::debug!(id, ?completed, "task toggled");
    completed
}

pub fn store_main_goal(store: &AppStore) -> String {
    store.main_goal().get()
}

pub fn store_set_main_goal(store: &AppStore, goal: String) {
    store.main_goal().set(goal);
    tracing::info!("main goal updated");
}

pub fn store_tool_filter(store: &AppStore) -> CategoryFilter {
    store.tool_filter().get()
}

pub fn store_set_tool_filter(store: &AppStore, filter: CategoryFilter) {
    tracing::debug!(filter = filter.value(), "tool filter changed");
    store.tool_filter().set(filter);
}
