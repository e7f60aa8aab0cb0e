pub mod io;
pub mod models;
pub mod parsing;
pub mod timing;


// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{SegmenterOptions, process_content, process_content_with};
pub use parsing::sections::{HeadingHeuristics, sectionize};
pub use timing::slide_duration;
