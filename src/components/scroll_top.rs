use dioxus::prelude::*;

use crate::browser;
use crate::state::{AppState, SoundBoard};

/// Floating control shown once the viewport has scrolled past the threshold.
#[component]
pub fn ScrollTopButton() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let visible = *state.show_scroll_top.read();

    rsx! {
        if visible {
            button {
                class: "scroll-top",
                aria_label: "Scroll back to top",
                onclick: move |_| {
                    sounds.click();
                    browser::scroll_to_top();
                },
                svg {
                    view_box: "0 0 24 24",
                    width: "22",
                    height: "22",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "12", y1: "19", x2: "12", y2: "5" }
                    polyline { points: "5 12 12 5 19 12" }
                }
            }
        }
    }
}
