use dioxus::prelude::*;

use crate::catalog;

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer { class: "footer",
            div { class: "socials",
                for social in catalog::SOCIAL_LINKS.iter() {
                    a {
                        key: "{social.url}",
                        class: "social-link",
                        href: "{social.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        i { class: "{social.icon}", style: "color:{social.color};" }
                    }
                }
            }
            h2 { class: "footer-brand",
                span { class: "accent", "aarav" }
                ".dev"
            }
            p { class: "footer-note",
                "Crafting fast interfaces with a systems language and a soft spot for detail."
            }
            div { class: "footer-divider" }
            p { class: "copyright", "© {year} aarav.dev — designed and built by Aarav Deshmukh" }
        }
    }
}
