//! Style extraction and import resolution
//!
//! The aggregate style sheet comes from a single resolved content entry: the
//! one with the smallest sequence id among those that survived resolution.
//! That is a deliberate change from assembling on whichever fetch happened to
//! complete first, which made the style source racy when URL declarations
//! overlapped. Import directives found in the aggregate are optionally fetched
//! one level deep and prepended ahead of the local style text.

pub mod extract;
pub mod imports;

pub use extract::extract_styles;
pub use imports::{find_import_targets, inline_imports};
