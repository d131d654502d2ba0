use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section",
            div { class: "section-head",
                h1 {
                    span { class: "accent", "Get" }
                    " In Touch"
                }
                div { class: "underline" }
                p { class: "section-intro",
                    "Always open to discussing new projects, ideas, or opportunities."
                }
            }
            form { class: "contact-form", onsubmit: move |e: FormEvent| e.prevent_default(),
                input { class: "text", r#type: "text", placeholder: "Your Name" }
                input { class: "text", r#type: "email", placeholder: "Your Email" }
                textarea { class: "text", rows: "4", placeholder: "Your Message" }
                button { class: "btn btn-primary", r#type: "submit", "Send Message" }
            }
        }
    }
}
