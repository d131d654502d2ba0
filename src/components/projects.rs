use dioxus::prelude::*;

use crate::catalog;
use crate::models::{Project, ProjectCategory};
use crate::state::{AppState, SoundBoard};

#[component]
pub fn Projects() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut tab = state.project_tab;
    let mut selected = state.active_project;
    let active_tab = *tab.read();
    let open = selected.read().active();
    let tabs = ProjectCategory::ALL.map(|cat| (cat, cat.label()));

    rsx! {
        section { id: "projects", class: "section",
            div { class: "section-head",
                h1 {
                    span { class: "accent", "My" }
                    " Projects"
                }
                div { class: "underline" }
                p { class: "section-intro",
                    "Some of the things I've built — for employers, for my pocket, and for fun."
                }
            }
            div { class: "tabs",
                for (cat, label) in tabs {
                    button {
                        key: "{label}",
                        class: if cat == active_tab { "tab active" } else { "tab" },
                        onclick: move |_| {
                            sounds.click();
                            tab.set(cat);
                        },
                        "{label}"
                    }
                }
            }
            div { class: "projects-grid",
                for project in catalog::projects_in(active_tab) {
                    article {
                        key: "{project.title}",
                        class: "project-card",
                        onclick: move |_| {
                            sounds.click();
                            selected.write().select(project);
                        },
                        h3 { class: "project-title", "{project.title}" }
                        p { class: "project-summary", "{project.summary}" }
                        div { class: "chips",
                            for t in project.tech.iter() {
                                span { key: "{t}", class: "chip", "{t}" }
                            }
                        }
                        a {
                            class: "project-link",
                            href: "{project.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            // following the link should not also open the case study
                            onclick: move |e: MouseEvent| e.stop_propagation(),
                            "View Project "
                            i { class: "fas fa-external-link-alt" }
                        }
                    }
                }
            }
            { open.map(|project| rsx! { ProjectModal { project: *project } }) }
        }
    }
}

#[component]
fn ProjectModal(project: Project) -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut selected = state.active_project;
    let category = project.category.label();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| selected.write().clear(),
            div {
                class: "modal project-modal",
                onclick: move |e: MouseEvent| e.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| {
                        sounds.click();
                        selected.write().clear();
                    },
                    "✕"
                }
                span { class: "chip chip-category", "{category}" }
                h2 { class: "title", "{project.title}" }
                p { class: "modal-body", "{project.case_study}" }
                div { class: "chips",
                    for t in project.tech.iter() {
                        span { key: "{t}", class: "chip", "{t}" }
                    }
                }
                a {
                    class: "btn btn-primary",
                    href: "{project.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Visit Project"
                }
            }
        }
    }
}
