pub mod section;
pub mod slide;
pub mod source_document;

pub use section::Section;
pub use slide::{BulletPoint, ParentBullet, Slide, SlideKind};
pub use source_document::SourceDocument;
