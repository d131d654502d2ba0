use dioxus::prelude::*;

use crate::catalog;
use crate::models::Skill;
use crate::state::{AppState, SoundBoard};

#[component]
pub fn Skills() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut selected = state.active_skill;
    let active = selected.read().active();

    rsx! {
        section { id: "skills", class: "section",
            div { class: "section-head",
                h1 {
                    span { class: "accent", "My" }
                    " Skills"
                }
                div { class: "underline" }
                p { class: "section-intro",
                    "The technologies and tools I reach for when building modern web experiences."
                }
            }
            div { class: "skills-grid",
                for skill in catalog::SKILLS.iter() {
                    button {
                        key: "{skill.name}",
                        class: "skill-card",
                        onclick: move |_| {
                            sounds.click();
                            selected.write().select(skill);
                        },
                        i { class: "{skill.icon} skill-icon", style: "color:{skill.color};" }
                        h3 { class: "skill-name", "{skill.name}" }
                    }
                }
            }
            { active.map(|skill| rsx! { SkillModal { skill: *skill } }) }
        }
    }
}

#[component]
fn SkillModal(skill: Skill) -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut selected = state.active_skill;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| selected.write().clear(),
            div {
                class: "modal skill-modal",
                // clicks on the panel stay on the panel, or the overlay would
                // dismiss itself the moment it opened
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
                i { class: "{skill.icon} skill-modal-icon", style: "color:{skill.color};" }
                h2 { class: "title", "{skill.name}" }
                div { class: "meter",
                    div { class: "meter-fill", style: "width:{skill.percent}%;" }
                }
                p { class: "meta",
                    "Skill proficiency: "
                    span { class: "accent", "{skill.percent}%" }
                }
                p { class: "modal-body", "{skill.blurb}" }
            }
        }
    }
}
