use dioxus::prelude::*;

use crate::catalog;

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section",
            div { class: "section-head",
                h1 {
                    span { class: "accent", "My" }
                    " Experience"
                }
                div { class: "underline" }
                p { class: "section-intro",
                    "Every stop taught me something I still use — here's the road so far."
                }
            }
            div { class: "timeline",
                div { class: "timeline-spine",
                    div { class: "timeline-flow" }
                }
                for (i, exp) in catalog::EXPERIENCES.iter().enumerate() {
                    div {
                        key: "{exp.role}",
                        class: if i % 2 == 0 { "timeline-item flip" } else { "timeline-item" },
                        div { class: "timeline-dot",
                            span { class: "ping" }
                            span { class: "core" }
                        }
                        div { class: "timeline-info",
                            div { class: "timeline-icon",
                                i { class: "{exp.icon}" }
                            }
                            h3 { "{exp.role}" }
                            h4 { class: "accent", "{exp.company}" }
                            p { class: "meta", "{exp.location} • {exp.period}" }
                        }
                        div { class: "timeline-desc",
                            p { "{exp.summary}" }
                        }
                    }
                }
            }
        }
    }
}
