use dioxus::prelude::*;

use crate::state::AppState;

/// Full-viewport layer swept across the screen while a navigation is in
/// flight. The sweep itself is a CSS transform transition whose duration
/// matches `nav::TRANSITION_MS`.
#[component]
pub fn TransitionOverlay() -> Element {
    let transition = use_context::<AppState>().transition;
    let active = transition.read().is_active();

    rsx! {
        div {
            class: if active { "transition-overlay active" } else { "transition-overlay" },
            aria_hidden: "true",
        }
    }
}
