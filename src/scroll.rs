use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed nav; anchored sections land just below it.
pub const NAV_OFFSET: f64 = 80.0;
/// Scroll depth after which the nav switches to its solid background.
pub const NAV_SOLID_AFTER: f64 = 50.0;

/// Document position to scroll to so an element whose top is at `element_top`
/// (relative to the viewport) ends up `offset` pixels below the top edge.
pub fn target_top(element_top: f64, page_y: f64, offset: f64) -> f64 {
    (element_top + page_y - offset).max(0.0)
}

pub fn nav_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAV_SOLID_AFTER
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smoothly scrolls to the element with `id`. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("No section with id {}", id);
        return;
    };
    let element_top = element.get_bounding_client_rect().top();
    let page_y = window.scroll_y().unwrap_or(0.0);
    smooth_scroll_to(target_top(element_top, page_y, NAV_OFFSET));
}
