use dioxus::prelude::*;

use crate::state::{AppState, SoundBoard};

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<AppState>();
    let sounds = use_context::<SoundBoard>();
    let mut menu = state.menu;
    let mut music = sounds.music;
    let playing = music.read().playing();
    let open = menu.read().is_open();

    rsx! {
        header { class: "navbar",
            h1 { class: "brand", onclick: move |_| sounds.click(),
                "aarav"
                span { class: "accent", ".dev" }
            }
            div { class: "navbar-actions",
                button {
                    class: if playing { "icon-btn active" } else { "icon-btn" },
                    aria_label: "Toggle background music",
                    onclick: move |_| {
                        sounds.click();
                        music.write().toggle();
                    },
                    if playing {
                        VolumeOnIcon {}
                    } else {
                        VolumeOffIcon {}
                    }
                }
                button {
                    class: if open { "hamburger open" } else { "hamburger" },
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        sounds.click();
                        menu.write().toggle();
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

#[component]
fn VolumeOnIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "22",
            height: "22",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        }
    }
}

#[component]
fn VolumeOffIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "22",
            height: "22",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        }
    }
}
