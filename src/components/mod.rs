//! UI Components
//!
//! Leptos components for each dashboard section.

mod delete_button;
mod focus_timer;
mod form_field;
mod goal_section;
mod ideas_section;
mod modal;
mod sidebar;
mod tasks_section;
mod tools_section;
mod vision_section;

pub use delete_button::DeleteButton;
pub use focus_timer::FocusTimerSection;
pub use form_field::{TextAreaField, TextField};
pub use goal_section::GoalSection;
pub use ideas_section::IdeasSection;
pub use modal::{Modal, ModalActions};
pub use sidebar::Sidebar;
pub use tasks_section::TasksSection;
pub use tools_section::ToolsSection;
pub use vision_section::VisionSection;
