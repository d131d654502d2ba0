use dioxus::prelude::*;

use crate::catalog;
use crate::nav;
use crate::state::{AppState, SoundBoard};

/// Right-hand slide-in panel listing the section links.
#[component]
pub fn NavMenu() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut menu = state.menu;
    let open = menu.read().is_open();

    rsx! {
        nav {
            class: if open { "side-menu open" } else { "side-menu" },
            aria_hidden: if open { "false" } else { "true" },
            for link in catalog::NAV_LINKS.iter() {
                a {
                    key: "{link.target}",
                    class: "side-menu-link",
                    // selecting a link closes the panel; an in-flight overlay
                    // sweep is left alone
                    onclick: move |_| {
                        menu.write().close();
                        nav::navigate_to(state.transition, sounds, link.target);
                    },
                    "{link.label}"
                }
            }
            div { class: "side-menu-edge" }
        }
    }
}
