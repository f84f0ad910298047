//! Item Lists
//!
//! Ordered, in-memory list of items for one section. The view renders from
//! this model; ids are generated here and never reused.

use crate::models::{Item, ItemKind, NewItem};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    kind: ItemKind,
    items: Vec<Item>,
    next_id: u32,
}

impl ItemList {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new item and return its id
    pub fn add(&mut self, new_item: NewItem) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item {
            id,
            kind: self.kind,
            title: new_item.title,
            description: new_item.description,
            link: new_item.link,
            category: new_item.category,
            created_at: new_item.created_at,
            completed: false,
        });
        id
    }

    /// Remove exactly the item with this id
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flip a task's completed flag, returning the new value.
    /// Only task lists carry a completed state.
    pub fn toggle_completed(&mut self, id: u32) -> Option<bool> {
        if self.kind != ItemKind::Task {
            return None;
        }
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_toggle_delete_task() {
        let mut tasks = ItemList::new(ItemKind::Task);
        let id = tasks.add(NewItem::titled("Buy milk"));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.items()[0].title, "Buy milk");
        assert!(!tasks.items()[0].completed);

        assert_eq!(tasks.toggle_completed(id), Some(true));
        assert!(tasks.get(id).unwrap().completed);
        assert_eq!(tasks.toggle_completed(id), Some(false));
        assert!(!tasks.get(id).unwrap().completed);

        assert!(tasks.remove(id));
        assert_eq!(tasks.len(), 0);
        assert!(tasks.get(id).is_none());
    }

    #[test]
    fn test_append_order_and_unique_ids() {
        let mut ideas = ItemList::new(ItemKind::Idea);
        let a = ideas.add(NewItem::titled("a"));
        let b = ideas.add(NewItem::titled("b"));
        ideas.remove(a);
        let c = ideas.add(NewItem::titled("c"));

        assert_ne!(a, c);
        let titles: Vec<_> = ideas.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
        assert_eq!(ideas.get(b).unwrap().kind, ItemKind::Idea);
    }

    #[test]
    fn test_remove_only_targets_one_item() {
        let mut tools = ItemList::new(ItemKind::Tool);
        tools.add(NewItem::titled("same"));
        let second = tools.add(NewItem::titled("same"));

        assert!(tools.remove(second));
        assert_eq!(tools.len(), 1);
        assert!(!tools.remove(second));
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let mut visions = ItemList::new(ItemKind::Vision);
        visions.add(NewItem::titled("").with_description(""));
        assert_eq!(visions.len(), 1);
    }

    #[test]
    fn test_toggle_is_task_only() {
        let mut tools = ItemList::new(ItemKind::Tool);
        let id = tools.add(NewItem::titled("Figma"));
        assert_eq!(tools.toggle_completed(id), None);

        let mut tasks = ItemList::new(ItemKind::Task);
        assert_eq!(tasks.toggle_completed(42), None);
    }
}
