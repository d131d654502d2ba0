use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section",
            div { class: "section-head",
                h1 {
                    span { class: "accent", "About" }
                    " Me"
                }
                div { class: "underline" }
            }
            div { class: "about-layout",
                div { class: "about-portrait",
                    span { class: "about-initials", "AD" }
                }
                div { class: "about-card",
                    h2 { class: "title",
                        span { class: "accent", "Aarav Deshmukh" }
                    }
                    h3 { class: "about-role", "Full Stack Developer | Rust & Web" }
                    p { class: "about-bio",
                        "I'm a full stack developer based in Pune, India. I spend my days \
                         building web services in Rust and typed frontends to match, and my \
                         evenings sanding the rough edges off side projects. I care about \
                         software that is fast, honest about its errors, and pleasant to read."
                    }
                    div { class: "about-lines",
                        p {
                            span { class: "strong", "📧 Email: " }
                            a { href: "mailto:hello@aarav.dev", "hello@aarav.dev" }
                        }
                        p {
                            span { class: "strong", "📍 Location: " }
                            "Pune, India"
                        }
                    }
                    a {
                        class: "btn btn-primary",
                        href: "/resume.pdf",
                        download: "true",
                        "Download Resume "
                        i { class: "fas fa-arrow-right" }
                    }
                }
            }
        }
    }
}
