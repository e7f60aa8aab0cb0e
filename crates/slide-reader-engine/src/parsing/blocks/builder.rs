use crate::models::{Slide, SlideKind};
use crate::parsing::ids::SlideIds;
use crate::parsing::sentences::extract_paragraph;

use super::{
    classify::{LineClass, LineKind},
    kinds::{BulletTracker, ListMarker, Table},
};

/// The paragraph or table currently being accumulated. At most one is open
/// at a time: every other block flushes it first.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Table { lines: Vec<String> },
}

/// An open code fence. Collected beside the leaf so a paragraph written
/// above the fence stays pending until after the code slide.
#[derive(Debug)]
struct OpenFence {
    language: String,
    lines: Vec<String>,
}

/// Turns classified lines of one section into slides.
pub struct SlideBuilder<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    ids: &'a mut SlideIds,
    leaf: LeafState,
    fence: Option<OpenFence>,
    bullets: BulletTracker,
    out: Vec<Slide>,
}

impl<'a> SlideBuilder<'a> {
    /// Starts a section, emitting its subtitle intro slide if it has one.
    pub fn new(title: &'a str, subtitle: Option<&'a str>, ids: &'a mut SlideIds) -> Self {
        let mut builder = Self {
            title,
            subtitle,
            ids,
            leaf: LeafState::None,
            fence: None,
            bullets: BulletTracker::default(),
            out: vec![],
        };
        if let Some(subtitle) = subtitle {
            builder.emit_intro(subtitle);
        }
        builder
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if !matches!(c.kind, LineKind::TableRow) {
            self.flush_table();
        }

        match &c.kind {
            LineKind::Fence { language } => {
                self.fence = Some(OpenFence {
                    language: language.clone(),
                    lines: vec![],
                });
            }
            LineKind::ThematicBreak => self.flush_paragraph(),
            LineKind::TableRow => {
                self.flush_paragraph();
                self.extend_table(c.raw.trim());
            }
            LineKind::Image(image) => {
                self.flush_paragraph();
                self.emit(
                    image.caption().to_string(),
                    SlideKind::Image {
                        url: image.url.clone(),
                        alt: image.alt.clone(),
                    },
                );
            }
            LineKind::Blockquote(text) => {
                self.flush_paragraph();
                self.emit(text.clone(), SlideKind::Blockquote);
            }
            LineKind::Checkbox { checked, text } => {
                self.flush_paragraph();
                self.emit(text.clone(), SlideKind::Checkbox { checked: *checked });
            }
            LineKind::FootnoteDef(def) => {
                self.flush_paragraph();
                self.emit(
                    def.text.clone(),
                    SlideKind::FootnoteDef {
                        footnote_id: def.id.clone(),
                        text: def.text.clone(),
                    },
                );
            }
            LineKind::MathBlock(content) => {
                self.flush_paragraph();
                self.emit(
                    content.clone(),
                    SlideKind::MathBlock {
                        content: content.clone(),
                    },
                );
            }
            LineKind::ListItem(marker) => {
                self.flush_paragraph();
                self.emit_bullet(c.indent_level, marker);
            }
            LineKind::Label(text) => {
                self.flush_paragraph();
                let marker = ListMarker {
                    text: text.clone(),
                    numbered: false,
                    number: None,
                };
                self.emit_bullet(0, &marker);
            }
            LineKind::Blank { empty } => {
                self.flush_paragraph();
                if *empty {
                    self.bullets.reset();
                }
            }
            LineKind::Text(text) => {
                self.bullets.clear_history();
                self.extend_paragraph(text);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Slide> {
        // EOF flush
        if self.in_fence() {
            log::debug!("code fence left open at end of section, emitting it as-is");
            self.flush_fence();
        }
        self.flush_paragraph();
        self.flush_table();
        self.out
    }

    fn in_fence(&self) -> bool {
        self.fence.is_some()
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if matches!(c.kind, LineKind::Fence { .. }) {
            self.flush_fence();
        } else if let Some(fence) = &mut self.fence {
            fence.lines.push(c.raw.clone());
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(text.to_string()),
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![text.to_string()],
                }
            }
        }
    }

    fn extend_table(&mut self, row: &str) {
        match &mut self.leaf {
            LeafState::Table { lines } => lines.push(row.to_string()),
            _ => {
                self.leaf = LeafState::Table {
                    lines: vec![row.to_string()],
                }
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            for sentence in extract_paragraph(&lines) {
                self.emit(sentence, SlideKind::Prose);
            }
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. table)
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table { lines } = prev {
            match Table::parse(&lines) {
                Some(table) => self.emit(
                    table.summary(),
                    SlideKind::Table {
                        headers: table.headers,
                        rows: table.rows,
                    },
                ),
                None => log::debug!("dropping {}-line table without separator row", lines.len()),
            }
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self) {
        if let Some(OpenFence { language, lines }) = self.fence.take() {
            self.emit(lines.join("\n"), SlideKind::Code { language });
        }
    }

    fn emit_bullet(&mut self, indent_level: usize, marker: &ListMarker) {
        let bullet = self.bullets.push(indent_level, marker);
        self.emit(marker.text.clone(), SlideKind::Bullet(bullet));
    }

    fn emit_intro(&mut self, subtitle: &str) {
        self.out.push(Slide {
            id: self.ids.next_id(),
            title: self.title.to_string(),
            subtitle: None,
            sentence: subtitle.to_string(),
            kind: SlideKind::SubtitleIntro,
        });
    }

    fn emit(&mut self, sentence: String, kind: SlideKind) {
        self.out.push(Slide {
            id: self.ids.next_id(),
            title: self.title.to_string(),
            subtitle: self.subtitle.map(str::to_string),
            sentence,
            kind,
        });
    }
}
