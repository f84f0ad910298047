//! Browser Notifications
//!
//! Native notification when permitted, blocking alert otherwise.

use wasm_bindgen::JsValue;

use crate::error::{DashboardError, Result};

const COMPLETE_TITLE: &str = "Time is up!";
const COMPLETE_BODY: &str = "Your focus session is over.";
const NOTIFICATION_ICON: &str = "/favicon.ico";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Default,
    Granted,
    Denied,
    Unsupported,
}

pub fn permission() -> Permission {
    let Some(window) = web_sys::window() else {
        return Permission::Unsupported;
    };

    let has_notification = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("Notification"))
        .unwrap_or(false);
    if !has_notification {
        return Permission::Unsupported;
    }

    match web_sys::Notification::permission() {
        web_sys::NotificationPermission::Default => Permission::Default,
        web_sys::NotificationPermission::Granted => Permission::Granted,
        web_sys::NotificationPermission::Denied => Permission::Denied,
        _ => Permission::Unsupported,
    }
}

/// Ask for notification permission unless the user already refused.
pub fn request_permission() {
    match permission() {
        Permission::Unsupported => {
            tracing::debug!("notification API unsupported, timer will use alerts");
            return;
        }
        Permission::Denied | Permission::Granted => return,
        Permission::Default => {}
    }

    match web_sys::Notification::request_permission() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => tracing::info!(permission = ?permission(), "notification permission resolved"),
                    Err(err) => tracing::warn!(error = ?err, "notification permission request failed"),
                }
            });
        }
        Err(err) => tracing::warn!(error = ?err, "could not request notification permission"),
    }
}

fn show_notification(title: &str, body: &str) -> Result<()> {
    let options = web_sys::NotificationOptions::new();
    options.set_body(body);
    options.set_icon(NOTIFICATION_ICON);
    web_sys::Notification::new_with_options(title, &options)
        .map(|_| ())
        .map_err(|e| DashboardError::Notification(format!("{:?}", e)))
}

fn show_alert(message: &str) -> Result<()> {
    let window = web_sys::window().ok_or(DashboardError::NoWindow)?;
    window
        .alert_with_message(message)
        .map_err(|e| DashboardError::Notification(format!("{:?}", e)))
}

/// Tell the user the focus session ended. Fires exactly one message.
pub fn notify_focus_complete() {
    let result = if permission() == Permission::Granted {
        show_notification(COMPLETE_TITLE, COMPLETE_BODY).or_else(|err| {
            tracing::warn!(error = %err, "native notification failed, falling back to alert");
            show_alert(COMPLETE_TITLE)
        })
    } else {
        show_alert(COMPLETE_TITLE)
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "could not notify focus completion");
    }
}
