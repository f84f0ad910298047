//! Sidebar Navigation
//!
//! Section list, scroll-spy and smooth scrolling.

use wasm_bindgen::JsCast;

use crate::error::{DashboardError, Result};

/// (section id, link label) in document order
pub const SECTIONS: &[(&str, &str)] = &[
    ("tools", "Tools"),
    ("tasks", "Tasks"),
    ("ideas", "Ideas"),
    ("vision", "Vision"),
    ("goal", "Main Goal"),
    ("timer", "Focus Timer"),
];

/// Pick the last section whose top, less `offset`, has been scrolled past.
/// `sections` is (id, offsetTop) in document order.
pub fn current_section<'a>(scroll_y: f64, sections: &[(&'a str, i32)], offset: i32) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= f64::from(*top) - f64::from(offset))
        .last()
        .map(|(id, _)| *id)
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DashboardError::NoWindow)
}

/// Read (id, offsetTop) for every `.section` element on the page
pub fn section_offsets() -> Result<Vec<(String, i32)>> {
    let nodes = document()?
        .query_selector_all(".section")
        .map_err(|e| DashboardError::Dom(format!("{:?}", e)))?;

    let mut offsets = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        offsets.push((element.id(), element.offset_top()));
    }
    Ok(offsets)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Smooth-scroll to the section with this id. Missing sections are skipped.
pub fn scroll_to_section(id: &str) -> Result<()> {
    let Some(target) = document()?.get_element_by_id(id) else {
        tracing::debug!(section = id, "scroll target missing");
        return Ok(());
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &[(&str, i32)] = &[("tools", 0), ("tasks", 600), ("ideas", 1200), ("timer", 1800)];

    #[test]
    fn test_current_section_threshold() {
        assert_eq!(current_section(0.0, PAGE, 200), Some("tools"));
        assert_eq!(current_section(399.0, PAGE, 200), Some("tools"));
        assert_eq!(current_section(400.0, PAGE, 200), Some("tasks"));
        assert_eq!(current_section(1000.0, PAGE, 200), Some("ideas"));
        assert_eq!(current_section(5000.0, PAGE, 200), Some("timer"));
    }

    #[test]
    fn test_no_section_before_first_threshold() {
        let page = &[("tools", 500), ("tasks", 900)];
        assert_eq!(current_section(100.0, page, 200), None);
        assert_eq!(current_section(300.0, page, 200), Some("tools"));
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let page = &[("tools", 0), ("tasks", i32::MAX)];
        assert_eq!(current_section(0.0, page, i32::MIN), None);
        assert_eq!(current_section(0.0, &[("tools", i32::MIN)], i32::MAX), Some("tools"));
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(current_section(100.0, &[], 200), None);
    }
}
