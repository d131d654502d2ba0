//! Thin glue over the browser's scroll and DOM services. Every function is a
//! silent no-op when the window or target is unavailable.

use gloo::events::EventListener;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Current vertical scroll offset of the viewport, in CSS pixels.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scrolls the element with the given id into view. Unknown ids are
/// ignored; navigation has no failure surface.
pub fn scroll_into_view(target: &str) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(el) = doc.get_element_by_id(target) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scrolls the viewport back to the top.
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Calls `on_offset` with the fresh scroll offset on every window scroll
/// event. The listener is leaked; it lives for the rest of the page session.
pub fn on_scroll(mut on_offset: impl FnMut(f64) + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };
    EventListener::new(&win, "scroll", move |_| {
        on_offset(scroll_offset());
    })
    .forget();
}
