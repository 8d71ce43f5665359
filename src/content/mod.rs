//! Content declaration and resolution
//!
//! Callers declare content in the order it should appear in the assembled
//! document; each declaration is later resolved to concrete markup plus
//! metadata, or dropped. The registry owns declarations until the pipeline
//! consumes them.

pub mod hooks;
pub mod registry;
pub(crate) mod resolver;

pub use hooks::{
    ContentMetadata, CssFormatter, HtmlTransform, MetadataFn, MetadataSource, TransformOutcome,
};
pub use registry::{ContentDeclaration, ContentRegistry, ContentSource};
