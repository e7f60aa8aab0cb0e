//! Reading-time estimates used for auto-advance.

use std::time::Duration;

use crate::models::{Slide, SlideKind};

pub const MIN_WPM: u32 = 100;
pub const MAX_WPM: u32 = 400;
pub const DEFAULT_WPM: u32 = 200;

pub const MIN_DURATION: Duration = Duration::from_millis(3_000);
pub const MAX_DURATION: Duration = Duration::from_millis(60_000);
/// Images are shown for a fixed time whatever their caption.
pub const IMAGE_DURATION: Duration = Duration::from_millis(5_000);

/// Average characters per word for the character-rate estimate.
const CHARS_PER_WORD: f64 = 5.0;
const CODE_FACTOR: f64 = 2.0;
const TABLE_FACTOR: f64 = 1.4;
/// Subtitle intros stay up at least as long as an eight-word sentence.
const SUBTITLE_MIN_WORDS: f64 = 8.0;

/// How long `slide` should stay on screen at `words_per_minute`.
///
/// The reading speed is clamped to [`MIN_WPM`]..=[`MAX_WPM`] and the result
/// to [`MIN_DURATION`]..=[`MAX_DURATION`].
pub fn slide_duration(slide: &Slide, words_per_minute: u32) -> Duration {
    if matches!(slide.kind, SlideKind::Image { .. }) {
        return IMAGE_DURATION;
    }

    let wpm = f64::from(words_per_minute.clamp(MIN_WPM, MAX_WPM));
    let factor = match slide.kind {
        SlideKind::Code { .. } => CODE_FACTOR,
        SlideKind::Table { .. } => TABLE_FACTOR,
        _ => 1.0,
    };

    let mut words = slide.sentence.split_whitespace().count() as f64 * factor;
    if slide.is_subtitle_intro() {
        words = words.max(SUBTITLE_MIN_WORDS);
    }
    let chars = slide.sentence.chars().count() as f64 * factor;

    let by_words = words / wpm * 60_000.0;
    let by_chars = chars / (wpm * CHARS_PER_WORD) * 60_000.0;
    let millis = by_words.max(by_chars).round() as u64;

    Duration::from_millis(millis).clamp(MIN_DURATION, MAX_DURATION)
}
