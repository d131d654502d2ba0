//! Menu and section-navigation state.

use dioxus::prelude::*;
use gloo::timers::callback::Timeout;

use crate::browser;
use crate::state::SoundBoard;

/// How long the overlay takes to sweep the viewport. The deferred scroll in
/// [`navigate_to`] fires when the sweep ends, so this must stay equal to the
/// `.transition-overlay` duration in `assets/main.css`.
pub const TRANSITION_MS: u32 = 800;

/// Open/closed flag for the slide-in navigation panel.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Whether the page-transition overlay is sweeping across the viewport.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct TransitionState {
    transitioning: bool,
}

impl TransitionState {
    pub fn is_active(&self) -> bool {
        self.transitioning
    }

    pub fn begin(&mut self) {
        self.transitioning = true;
    }

    pub fn finish(&mut self) {
        self.transitioning = false;
    }
}

/// Starts the overlay sweep and scrolls to `target` once the overlay has
/// covered the viewport. The click cue fires first and is not awaited.
///
/// Each call arms its own one-shot timer and none of them can be cancelled;
/// a second request inside the window lets both timers fire independently,
/// each resetting the overlay at its own deadline. A missing `target` makes
/// the deferred scroll a silent no-op.
pub fn navigate_to(mut transition: Signal<TransitionState>, sounds: SoundBoard, target: &'static str) {
    sounds.click();
    transition.write().begin();
    Timeout::new(TRANSITION_MS, move || {
        transition.write().finish();
        browser::scroll_into_view(target);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_open_iff_toggle_count_is_odd() {
        let mut menu = MenuState::default();
        for n in 1..=8 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn close_forces_shut_from_either_state() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn transition_begins_and_finishes() {
        let mut t = TransitionState::default();
        assert!(!t.is_active());
        t.begin();
        assert!(t.is_active());
        t.finish();
        assert!(!t.is_active());
    }

    #[test]
    fn overlapping_requests_settle_idle_after_either_deadline() {
        // Two navigations inside the window each arm an independent timer;
        // whichever fires, the overlay ends up retracted, and the second
        // deadline finding it already idle changes nothing.
        let mut t = TransitionState::default();
        t.begin();
        t.begin();
        assert!(t.is_active());
        t.finish();
        assert!(!t.is_active());
        t.finish();
        assert!(!t.is_active());
    }
}
