use serde::Serialize;

/// One unit of the presentation sequence.
///
/// Slides are numbered by a single counter across the whole document, so
/// `id` is also the slide's position in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub id: usize,
    /// Document title, copied onto every slide.
    pub title: String,
    /// Owning section's subtitle. Always `None` on a subtitle intro slide.
    pub subtitle: Option<String>,
    /// Primary text payload; its meaning depends on `kind`.
    pub sentence: String,
    #[serde(flatten)]
    pub kind: SlideKind,
}

/// What a slide presents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideKind {
    /// A sentence extracted from a paragraph.
    Prose,
    /// The section subtitle shown on its own before the section body.
    SubtitleIntro,
    Bullet(BulletPoint),
    /// Fenced code; `sentence` holds the code lines without the fences.
    Code { language: String },
    Blockquote,
    Image { url: String, alt: String },
    /// `sentence` is a summary of the header row.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Checkbox { checked: bool },
    FootnoteDef { footnote_id: String, text: String },
    MathBlock { content: String },
}

/// A bulleted or numbered list item with its list context.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BulletPoint {
    /// Sibling items shown before this one at the same indent level.
    pub history: Vec<String>,
    pub numbered: bool,
    /// The item's literal number for numbered items.
    pub number: Option<u32>,
    /// 0 for top level, +1 per two leading spaces.
    pub indent_level: usize,
    /// Nearest top-level item, only for nested items.
    pub parent: Option<ParentBullet>,
}

/// The top-level list item a nested item belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentBullet {
    pub text: String,
    pub numbered: bool,
    pub number: Option<u32>,
}

impl SlideKind {
    /// Stable snake_case name, matching the serialized `kind` tag.
    pub fn name(&self) -> &'static str {
        match self {
            SlideKind::Prose => "prose",
            SlideKind::SubtitleIntro => "subtitle_intro",
            SlideKind::Bullet(_) => "bullet",
            SlideKind::Code { .. } => "code",
            SlideKind::Blockquote => "blockquote",
            SlideKind::Image { .. } => "image",
            SlideKind::Table { .. } => "table",
            SlideKind::Checkbox { .. } => "checkbox",
            SlideKind::FootnoteDef { .. } => "footnote_def",
            SlideKind::MathBlock { .. } => "math_block",
        }
    }
}

impl Slide {
    #[must_use]
    pub fn is_subtitle_intro(&self) -> bool {
        matches!(self.kind, SlideKind::SubtitleIntro)
    }

    #[must_use]
    pub fn is_prose(&self) -> bool {
        matches!(self.kind, SlideKind::Prose)
    }

    /// Returns the bullet details when this slide is a list item.
    pub fn bullet(&self) -> Option<&BulletPoint> {
        match &self.kind {
            SlideKind::Bullet(b) => Some(b),
            _ => None,
        }
    }
}
