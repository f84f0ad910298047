//! Dashboard Errors
//!
//! Failures at the browser boundary (storage, notifications, config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("browser window or document is not available")]
    NoWindow,

    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("storage operation failed for key '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    pub fn storage(key: &str, err: impl std::fmt::Debug) -> Self {
        DashboardError::Storage {
            key: key.to_string(),
            message: format!("{:?}", err),
        }
    }
}
