pub mod block_quote;
pub mod code_fence;
pub mod footnote;
pub mod image;
pub mod list;
pub mod math;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use footnote::FootnoteDef;
pub use image::Image;
pub use list::{BulletTracker, ListItem, ListMarker};
pub use math::MathBlock;
pub use table::Table;
pub use thematic_break::ThematicBreak;
