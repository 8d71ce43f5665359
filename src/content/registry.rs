//! Ordered registry of content declarations

use std::path::PathBuf;

use super::hooks::{HtmlTransform, MetadataSource};

/// Where a declaration's markup comes from
pub enum ContentSource {
    /// Remote page fetched over HTTP(S)
    Url(String),
    /// Local file read as UTF-8 text
    File(PathBuf),
    /// Literal markup passed through unchanged
    Inline(String),
}

/// One caller-registered request to include content, immutable once created.
///
/// `sequence_id` is assigned at declaration time, strictly increasing, and is
/// used only to restore declaration order after concurrent resolution.
pub struct ContentDeclaration {
    pub(crate) sequence_id: u64,
    pub(crate) source: ContentSource,
    pub(crate) metadata: MetadataSource,
    pub(crate) transform: Option<HtmlTransform>,
}

impl ContentDeclaration {
    /// Registration order of this declaration
    #[must_use]
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }
}

/// Ordered list of declarations plus the sequence counter
#[derive(Default)]
pub struct ContentRegistry {
    declarations: Vec<ContentDeclaration>,
    next_sequence_id: u64,
}

impl ContentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration, assigning it the next sequence id
    pub fn declare(
        &mut self,
        source: ContentSource,
        metadata: MetadataSource,
        transform: Option<HtmlTransform>,
    ) -> u64 {
        self.next_sequence_id += 1;
        let sequence_id = self.next_sequence_id;
        self.declarations.push(ContentDeclaration {
            sequence_id,
            source,
            metadata,
            transform,
        });
        sequence_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Consume the registry, handing the declarations to the pipeline
    pub(crate) fn take(self) -> Vec<ContentDeclaration> {
        self.declarations
    }
}
