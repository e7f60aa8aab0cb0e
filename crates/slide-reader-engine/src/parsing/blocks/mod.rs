//! # Block Segmentation
//!
//! Two-phase segmentation of one section's content into slides.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (indent level and what the line looks like)
//!
//! 2. **Slide Construction** (`builder`): a `SlideBuilder` keeps the open
//!    paragraph/fence/table and the running list context, and emits slides
//!    as blocks close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific syntax (fences, tables, lists, quotes, images,
//!   footnotes, math, rules)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `SlideBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no other detection inside them
//! - Every block except a code fence flushes the pending paragraph first. A
//!   paragraph open above a fence stays open across it, so its sentences
//!   follow the code slide and run on into prose after the closing fence
//! - Bullet history only ever holds earlier siblings at the same level

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::SlideBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};

use crate::models::{Section, Slide};
use crate::parsing::ids::SlideIds;

/// Segments one section into slides, drawing ids from the shared counter.
pub fn segment(section: &Section, title: &str, ids: &mut SlideIds) -> Vec<Slide> {
    let classifier = MarkdownLineClassifier;
    let mut builder = SlideBuilder::new(title, section.subtitle.as_deref(), ids);

    for line in section.content.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
