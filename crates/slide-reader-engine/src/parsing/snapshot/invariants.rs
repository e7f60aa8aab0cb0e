use crate::models::{Slide, SlideKind};

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - Slide ids run `0..n` without gaps, in order
/// - Subtitle intro slides carry no subtitle and are followed only by
///   slides of the same subtitle until the next intro
/// - Bullet history is never longer than the number of earlier slides
/// - Tables always have a header row
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(slides: &[Slide]) {
    let mut current_subtitle: Option<&str> = None;
    for (position, slide) in slides.iter().enumerate() {
        assert_eq!(
            slide.id, position,
            "slide id out of sequence at position {position}: {slide:?}"
        );

        match &slide.kind {
            SlideKind::SubtitleIntro => {
                assert!(
                    slide.subtitle.is_none(),
                    "subtitle intro must not carry a subtitle: {slide:?}"
                );
                current_subtitle = Some(slide.sentence.as_str());
            }
            SlideKind::Bullet(bullet) => {
                assert!(
                    bullet.history.len() <= position,
                    "bullet history longer than preceding slides: {slide:?}"
                );
            }
            SlideKind::Table { headers, .. } => {
                assert!(!headers.is_empty(), "table without headers: {slide:?}");
            }
            _ => {}
        }

        if !slide.is_subtitle_intro() && slide.subtitle.is_some() {
            assert_eq!(
                slide.subtitle.as_deref(),
                current_subtitle,
                "slide subtitle does not match its section intro: {slide:?}"
            );
        }
    }
}
