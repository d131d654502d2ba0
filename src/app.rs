use dioxus::prelude::*;

use crate::app_assets::{head_nodes, BG_MUSIC, UI_CLICK};
use crate::audio::{ClickCue, MediaAudio, MusicToggle};
use crate::browser;
use crate::components::{
    About, Contact, Experience, Footer, Hero, NavMenu, Navbar, Particles, Projects,
    ScrollTopButton, Skills, TransitionOverlay,
};
use crate::models::ProjectCategory;
use crate::nav::{MenuState, TransitionState};
use crate::scroll;
use crate::selection::Selection;
use crate::state::{AppState, SoundBoard};

#[component]
pub fn App() -> Element {
    // View state, one signal per controller-owned cell
    let menu = use_signal(MenuState::default);
    let transition = use_signal(TransitionState::default);
    let show_scroll_top = use_signal(|| false);
    let active_skill = use_signal(Selection::default);
    let active_project = use_signal(Selection::default);
    let project_tab = use_signal(|| ProjectCategory::Company);

    use_context_provider(|| AppState {
        menu,
        transition,
        show_scroll_top,
        active_skill,
        active_project,
        project_tab,
    });

    // Audio handles live for the whole page session; no teardown.
    let music = use_signal(|| MusicToggle::new(MediaAudio::looping(&BG_MUSIC.to_string(), 0.3)));
    let cue = use_signal(|| ClickCue::new(MediaAudio::cue(&UI_CLICK.to_string(), 0.4)));
    use_context_provider(|| SoundBoard { music, cue });

    // Window scroll drives the scroll-to-top affordance for the session.
    use_hook(move || {
        let mut visible = show_scroll_top;
        browser::on_scroll(move |offset| visible.set(scroll::past_threshold(offset)));
    });

    rsx! {
        { head_nodes() }
        div { class: "page",
            Particles {}
            div { class: "content",
                TransitionOverlay {}
                Navbar {}
                NavMenu {}
                Hero {}
                About {}
                Skills {}
                Experience {}
                Projects {}
                Contact {}
                Footer {}
            }
            ScrollTopButton {}
        }
    }
}
