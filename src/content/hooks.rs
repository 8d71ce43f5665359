//! Caller-supplied hooks and per-content metadata
//!
//! Hooks are plain boxed closures. All of them are fallible: a hook error
//! propagates out of the run unchanged (`BindError::Transform` is
//! transparent), it is never wrapped or recovered.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Metadata attached to one resolved content entry, supplied literally or
/// computed from the final markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Entry title shown in the document's navigation
    pub title: Option<String>,
    /// Entry author, when it differs from the document author
    pub author: Option<String>,
    /// Preferred output filename hint for the packager
    pub filename: Option<String>,
    /// Exclude this entry from the table of contents
    pub exclude_from_toc: bool,
    /// Place this entry ahead of the table of contents
    pub before_toc: bool,
}

impl ContentMetadata {
    /// Convenience constructor for the common title-only case
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// What an HTML transform hook did with the markup it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Replacement markup to carry forward
    Markup(String),
    /// Skip sentinel: exclude this declaration from the final list.
    /// Distinct from returning empty markup.
    Skip,
}

/// Hook rewriting fetched markup, or skipping the declaration entirely
pub type HtmlTransform = Box<dyn Fn(&str) -> Result<TransformOutcome> + Send + Sync>;

/// Hook computing metadata from the final (post-transform) markup
pub type MetadataFn = Box<dyn Fn(&str) -> Result<ContentMetadata> + Send + Sync>;

/// Hook receiving the resolved style text (`None` when extraction produced
/// nothing) and returning the final style handed to the packager
pub type CssFormatter = Box<dyn Fn(Option<&str>) -> Result<String> + Send + Sync>;

/// Source of a declaration's metadata: a literal object or a function of the
/// final markup
pub enum MetadataSource {
    Static(ContentMetadata),
    Computed(MetadataFn),
}

impl From<ContentMetadata> for MetadataSource {
    fn from(metadata: ContentMetadata) -> Self {
        Self::Static(metadata)
    }
}

impl MetadataSource {
    /// Wrap a metadata-computing closure
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<ContentMetadata> + Send + Sync + 'static,
    {
        Self::Computed(Box::new(f))
    }
}
