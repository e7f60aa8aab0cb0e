use super::kinds::{
    BlockQuote, CodeFence, FootnoteDef, Image, ListItem, ListMarker, MathBlock, Table,
    ThematicBreak,
};

/// Spaces per indent level.
pub const INDENT_WIDTH: usize = 2;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line as written (needed verbatim inside code fences).
    pub raw: String,
    /// `floor(leading whitespace / 2)`.
    pub indent_level: usize,
    pub kind: LineKind,
}

/// What a line looks like on its own, in dispatch precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// ```` ``` ```` marker, with the language tag it would open.
    Fence { language: String },
    /// `empty` is true only for zero-length lines.
    Blank { empty: bool },
    ThematicBreak,
    TableRow,
    Image(Image),
    Blockquote(String),
    Checkbox { checked: bool, text: String },
    FootnoteDef(FootnoteDef),
    MathBlock(String),
    ListItem(ListMarker),
    /// `Label: description`, normalised.
    Label(String),
    /// Anything else, trimmed.
    Text(String),
}

impl LineKind {
    /// Whether the line opens a block of its own rather than continuing prose.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            LineKind::Blank { .. } | LineKind::Label(_) | LineKind::Text(_)
        )
    }
}

/// Classifies individual lines for the block segmentation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            raw: line.to_string(),
            indent_level: Self::indent_level(line),
            kind: Self::kind(line),
        }
    }

    fn indent_level(line: &str) -> usize {
        let leading = line.chars().take_while(|c| c.is_whitespace()).count();
        leading / INDENT_WIDTH
    }

    fn kind(line: &str) -> LineKind {
        let trimmed = line.trim();
        if CodeFence::is_fence(trimmed) {
            return LineKind::Fence {
                language: CodeFence::language(trimmed),
            };
        }
        if trimmed.is_empty() {
            return LineKind::Blank {
                empty: line.is_empty(),
            };
        }
        if ThematicBreak::matches(trimmed) {
            return LineKind::ThematicBreak;
        }
        if Table::is_row(trimmed) {
            return LineKind::TableRow;
        }
        if let Some(image) = Image::parse(trimmed) {
            return LineKind::Image(image);
        }
        if let Some(quote) = BlockQuote::quoted_text(trimmed) {
            return LineKind::Blockquote(quote);
        }
        if let Some((checked, text)) = ListItem::checkbox(trimmed) {
            return LineKind::Checkbox { checked, text };
        }
        if let Some(def) = FootnoteDef::parse(trimmed) {
            return LineKind::FootnoteDef(def);
        }
        if let Some(content) = MathBlock::content(trimmed) {
            return LineKind::MathBlock(content);
        }
        if let Some(marker) = ListItem::marker(trimmed) {
            return LineKind::ListItem(marker);
        }
        if let Some(label) = ListItem::label(trimmed) {
            return LineKind::Label(label);
        }
        LineKind::Text(trimmed.to_string())
    }
}
