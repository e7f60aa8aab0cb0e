use crate::models::{Slide, SlideKind};

/// Renders each slide as `kind text`, with bullets indented by level.
///
/// Newlines in code slides are shown as `⏎` so every slide stays on one
/// line.
pub fn outline(slides: &[Slide]) -> Vec<String> {
    slides
        .iter()
        .map(|slide| {
            let indent = match &slide.kind {
                SlideKind::Bullet(b) => "  ".repeat(b.indent_level),
                _ => String::new(),
            };
            format!(
                "{indent}{} {}",
                slide.kind.name(),
                slide.sentence.replace('\n', "⏎")
            )
        })
        .collect()
}
