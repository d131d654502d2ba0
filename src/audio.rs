//! Background-music toggle and the UI click cue.
//!
//! Both speak to the browser's audio element through [`AudioHandle`], so the
//! toggling logic can be exercised with a scripted handle in tests.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// The slice of the audio service the controllers consume.
pub trait AudioHandle {
    fn play(&self);
    fn pause(&self);
    /// Rewind to the start and play. Overlapping triggers restart the clip
    /// rather than layering a second voice.
    fn restart(&self);
}

/// On/off state for the looping background track. The handle is built once
/// for the page session and never torn down.
pub struct MusicToggle<A> {
    playing: bool,
    handle: A,
}

impl<A: AudioHandle> MusicToggle<A> {
    pub fn new(handle: A) -> Self {
        Self { playing: false, handle }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Flips the flag; false→true requests `play` exactly once, true→false
    /// requests `pause` exactly once.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        if self.playing {
            self.handle.play();
        } else {
            self.handle.pause();
        }
    }
}

/// Stateless fire-and-restart click sound shared by every interactive control.
#[derive(Clone)]
pub struct ClickCue<A> {
    handle: A,
}

impl<A: AudioHandle> ClickCue<A> {
    pub fn new(handle: A) -> Self {
        Self { handle }
    }

    pub fn trigger(&self) {
        self.handle.restart();
    }
}

/// Browser-backed handle around an `<audio>` element. Construction failure
/// leaves a silent handle; playback failures (autoplay policy, missing file)
/// are swallowed to keep the fire-and-forget contract.
#[derive(Clone)]
pub struct MediaAudio {
    el: Option<HtmlAudioElement>,
}

impl MediaAudio {
    /// Looping track, e.g. background music.
    pub fn looping(src: &str, volume: f64) -> Self {
        let el = Self::element(src, volume);
        if let Some(el) = &el {
            el.set_loop(true);
        }
        Self { el }
    }

    /// Short one-shot cue.
    pub fn cue(src: &str, volume: f64) -> Self {
        Self { el: Self::element(src, volume) }
    }

    fn element(src: &str, volume: f64) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(src) {
            Ok(el) => {
                el.set_volume(volume);
                Some(el)
            }
            Err(err) => {
                gloo::console::warn!("[Audio] element unavailable:", err);
                None
            }
        }
    }
}

impl AudioHandle for MediaAudio {
    fn play(&self) {
        if let Some(el) = &self.el {
            fire(el.play());
        }
    }

    fn pause(&self) {
        if let Some(el) = &self.el {
            let _ = el.pause();
        }
    }

    fn restart(&self) {
        if let Some(el) = &self.el {
            el.set_current_time(0.0);
            fire(el.play());
        }
    }
}

// An unawaited play() rejection (autoplay policy) becomes an
// unhandled-rejection error; drain it on a detached task.
fn fire(play: Result<js_sys::Promise, JsValue>) {
    if let Ok(promise) = play {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scripted handle that journals every request it receives.
    #[derive(Clone, Default)]
    struct Journal(Rc<RefCell<Vec<&'static str>>>);

    impl Journal {
        fn calls(&self) -> Vec<&'static str> {
            self.0.borrow().clone()
        }
    }

    impl AudioHandle for Journal {
        fn play(&self) {
            self.0.borrow_mut().push("play");
        }
        fn pause(&self) {
            self.0.borrow_mut().push("pause");
        }
        fn restart(&self) {
            self.0.borrow_mut().push("restart");
        }
    }

    #[test]
    fn toggle_requests_play_then_pause_exactly_once_each() {
        let journal = Journal::default();
        let mut music = MusicToggle::new(journal.clone());
        assert!(!music.playing());

        music.toggle();
        assert!(music.playing());
        assert_eq!(journal.calls(), ["play"]);

        music.toggle();
        assert!(!music.playing());
        assert_eq!(journal.calls(), ["play", "pause"]);
    }

    #[test]
    fn every_toggle_issues_one_request_in_the_new_direction() {
        let journal = Journal::default();
        let mut music = MusicToggle::new(journal.clone());
        for _ in 0..3 {
            music.toggle();
            music.toggle();
        }
        assert_eq!(
            journal.calls(),
            ["play", "pause", "play", "pause", "play", "pause"]
        );
    }

    #[test]
    fn rapid_cue_triggers_restart_instead_of_layering() {
        let journal = Journal::default();
        let cue = ClickCue::new(journal.clone());
        cue.trigger();
        cue.trigger();
        cue.trigger();
        assert_eq!(journal.calls(), ["restart", "restart", "restart"]);
    }
}
