//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`invariants`**: Runtime checks for segmenter correctness (gapless ids,
//!   subtitle pairing, well-formed bullets and tables)
//! - **`outline`**: Compact one-line-per-slide rendering for `insta` snapshots

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
