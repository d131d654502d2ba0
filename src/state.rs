use dioxus::prelude::*;

use crate::audio::{ClickCue, MediaAudio, MusicToggle};
use crate::models::{Project, ProjectCategory, Skill};
use crate::nav::{MenuState, TransitionState};
use crate::selection::Selection;

/// View state shared with every section through context. Each cell is owned
/// and mutated by exactly one controller; the render layer only reads.
#[derive(Clone, Copy)]
pub struct AppState {
    pub menu: Signal<MenuState>,
    pub transition: Signal<TransitionState>,
    pub show_scroll_top: Signal<bool>,
    pub active_skill: Signal<Selection<&'static Skill>>,
    pub active_project: Signal<Selection<&'static Project>>,
    pub project_tab: Signal<ProjectCategory>,
}

/// The page-session audio handles: the looping background track and the
/// shared UI click cue.
#[derive(Clone, Copy)]
pub struct SoundBoard {
    pub music: Signal<MusicToggle<MediaAudio>>,
    pub cue: Signal<ClickCue<MediaAudio>>,
}

impl SoundBoard {
    /// Fire the click cue; never blocks, never fails.
    pub fn click(&self) {
        self.cue.read().trigger();
    }
}
