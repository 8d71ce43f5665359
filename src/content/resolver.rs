//! Per-declaration resolution: source dispatch, transform, metadata

use log::{debug, info};

use super::hooks::{ContentMetadata, MetadataSource, TransformOutcome};
use super::registry::{ContentDeclaration, ContentSource};
use crate::error::BindError;
use crate::fetch::{FetchOutcome, FetchPolicy, RetryingFetcher};

/// A declaration resolved to concrete markup plus metadata.
///
/// `raw_markup` keeps the pre-transform text; style extraction reads it after
/// sorting, from the entry with the smallest sequence id. It is not part of
/// the packager handoff.
#[derive(Debug)]
pub(crate) struct ResolvedEntry {
    pub sequence_id: u64,
    pub raw_markup: String,
    pub markup: String,
    pub metadata: ContentMetadata,
}

/// Resolves declarations into entries, or drops them.
///
/// Drops are silent: a 404 under the skip policy, a transform returning the
/// skip sentinel, and empty working markup (fetched, read, or inline) all
/// yield `Ok(None)`.
pub(crate) struct ContentResolver {
    fetcher: RetryingFetcher,
    policy: FetchPolicy,
}

impl ContentResolver {
    pub(crate) fn new(fetcher: RetryingFetcher, policy: FetchPolicy) -> Self {
        Self { fetcher, policy }
    }

    /// Resolve one declaration. `Ok(None)` means the declaration was dropped.
    pub(crate) async fn resolve(
        &self,
        declaration: ContentDeclaration,
    ) -> Result<Option<ResolvedEntry>, BindError> {
        let raw = match &declaration.source {
            ContentSource::Url(url) => {
                info!("resolving url content {url}");
                match self.fetcher.fetch(url, &self.policy).await? {
                    FetchOutcome::Body(body) if !body.is_empty() => body,
                    FetchOutcome::Body(_) => {
                        debug!("dropping {url}: empty body");
                        return Ok(None);
                    }
                    FetchOutcome::Skipped => return Ok(None),
                }
            }
            ContentSource::File(path) => {
                info!("resolving file content {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| BindError::FileRead {
                        path: path.clone(),
                        source,
                    })?
            }
            ContentSource::Inline(markup) => markup.clone(),
        };

        Self::finish(declaration, raw)
    }

    /// Apply the transform hook and resolve metadata against the working markup
    fn finish(
        declaration: ContentDeclaration,
        raw: String,
    ) -> Result<Option<ResolvedEntry>, BindError> {
        let markup = match &declaration.transform {
            Some(transform) => match transform(&raw)? {
                TransformOutcome::Markup(markup) => markup,
                TransformOutcome::Skip => {
                    debug!(
                        "dropping declaration {}: transform skip sentinel",
                        declaration.sequence_id
                    );
                    return Ok(None);
                }
            },
            None => raw.clone(),
        };

        if markup.is_empty() {
            debug!(
                "dropping declaration {}: empty markup",
                declaration.sequence_id
            );
            return Ok(None);
        }

        let metadata = match &declaration.metadata {
            MetadataSource::Static(metadata) => metadata.clone(),
            MetadataSource::Computed(compute) => compute(&markup)?,
        };

        Ok(Some(ResolvedEntry {
            sequence_id: declaration.sequence_id,
            raw_markup: raw,
            markup,
            metadata,
        }))
    }
}
