use dioxus::prelude::*;

use crate::state::{AppState, SoundBoard};

#[component]
pub fn Hero() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    // the hero slides aside while the menu panel is out
    let menu_open = state.menu.read().is_open();

    rsx! {
        section {
            id: "home",
            class: if menu_open { "hero menu-open" } else { "hero" },
            div { class: "hero-copy",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "accent", "Aarav" }
                    " 👋"
                }
                p { class: "hero-tagline",
                    "A full stack developer who likes his type systems strict and his interfaces fast."
                }
                button {
                    class: "btn btn-primary hero-cta",
                    onclick: move |_| sounds.click(),
                    "View My Work"
                }
            }
            div { class: "hero-art",
                OrbitArt {}
            }
        }
    }
}

#[component]
fn OrbitArt() -> Element {
    rsx! {
        svg {
            class: "orbit",
            view_box: "0 0 200 200",
            fill: "none",
            circle { cx: "100", cy: "100", r: "28", class: "orbit-core" }
            circle { cx: "100", cy: "100", r: "60", class: "orbit-ring ring-a" }
            circle { cx: "100", cy: "100", r: "88", class: "orbit-ring ring-b" }
            circle { cx: "160", cy: "100", r: "6", class: "orbit-moon moon-a" }
            circle { cx: "100", cy: "12", r: "4", class: "orbit-moon moon-b" }
        }
    }
}
