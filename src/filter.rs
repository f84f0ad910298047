//! Tool Category Filter

/// Filter button values in display order; "all" is always first
pub const TOOL_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All"),
    ("design", "Design"),
    ("development", "Development"),
    ("productivity", "Productivity"),
    ("learning", "Learning"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter button's `data-filter` value
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }

    /// Whether a card with this category stays visible
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &[Option<&str>] = &[Some("design"), Some("development"), Some("design"), None];

    #[test]
    fn test_filter_by_category() {
        let filter = CategoryFilter::from_value("design");
        let visible: Vec<bool> = CARDS.iter().map(|c| filter.shows(*c)).collect();
        assert_eq!(visible, vec![true, false, true, false]);
    }

    #[test]
    fn test_all_shows_everything() {
        let filter = CategoryFilter::from_value("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(CARDS.iter().all(|c| filter.shows(*c)));
    }

    #[test]
    fn test_value_round_trips_button_attribute() {
        for (value, _) in TOOL_CATEGORIES {
            assert_eq!(CategoryFilter::from_value(value).value(), *value);
        }
    }
}
