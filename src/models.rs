//! Dashboard Models
//!
//! Data structures for the items shown in each section.

use chrono::{DateTime, Utc};

/// Which section an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Tool,
    Task,
    Idea,
    Vision,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Tool => "tool",
            ItemKind::Task => "task",
            ItemKind::Idea => "idea",
            ItemKind::Vision => "vision",
        }
    }
}

/// Item data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

impl Item {
    /// DOM id tying a task's checkbox to its label
    pub fn dom_id(&self) -> String {
        format!("{}-{}", self.kind.label(), self.id)
    }

    /// Long-form creation date, e.g. "16 October 2026"
    pub fn created_label(&self) -> String {
        self.created_at.format("%-d %B %Y").to_string()
    }

    /// Link to open, if one was given. Blank links count as missing.
    pub fn link_target(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|link| !link.is_empty())
    }
}

/// Form payload for a new item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewItem {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            link: None,
            category: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_created_label() {
        let item = Item {
            id: 3,
            kind: ItemKind::Idea,
            title: "Garden".to_string(),
            description: None,
            link: None,
            category: None,
            created_at: Utc.with_ymd_and_hms(2026, 10, 6, 9, 0, 0).unwrap(),
            completed: false,
        };
        assert_eq!(item.created_label(), "6 October 2026");
        assert_eq!(item.dom_id(), "idea-3");
    }

    #[test]
    fn test_link_target_skips_blank_links() {
        let tool = |link: Option<&str>| Item {
            id: 1,
            kind: ItemKind::Tool,
            title: "Figma".to_string(),
            description: None,
            link: link.map(str::to_string),
            category: None,
            created_at: Utc::now(),
            completed: false,
        };
        assert_eq!(tool(None).link_target(), None);
        assert_eq!(tool(Some("")).link_target(), None);
        assert_eq!(tool(Some("   ")).link_target(), None);
        assert_eq!(
            tool(Some("https://figma.com")).link_target(),
            Some("https://figma.com")
        );
    }
}
