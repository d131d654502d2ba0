//! Scroll-position derived view state.

/// Offset (in CSS pixels) past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Strictly greater-than: sitting exactly on the threshold keeps the control
/// hidden. Recomputed on every scroll event, no hysteresis and no memory of
/// direction.
pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!past_threshold(SCROLL_TOP_THRESHOLD));
        assert!(past_threshold(SCROLL_TOP_THRESHOLD + 0.5));
    }

    #[test]
    fn arbitrary_offset_sequences_track_only_the_last_value() {
        let offsets = [0.0, 1200.0, 400.0, 401.0, 399.9, 4000.0, 0.0];
        let expect = [false, true, false, true, false, true, false];
        for (offset, want) in offsets.into_iter().zip(expect) {
            assert_eq!(past_threshold(offset), want, "offset {offset}");
        }
    }

    #[test]
    fn negative_offsets_stay_hidden() {
        // Elastic overscroll can report negative scrollY.
        assert!(!past_threshold(-80.0));
    }
}
