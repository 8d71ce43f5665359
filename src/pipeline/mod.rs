//! Pipeline orchestration
//!
//! `Bookbinder` is the public entry point: declarations are registered in
//! caller order, then `assemble()` runs the phases in a fixed sequence —
//! URL resolution (bounded concurrency), file resolution (bounded
//! concurrency), string resolution (sequential), sorting by sequence id,
//! style resolution — and hands the ordered content list plus final style to
//! the packaging collaborator. The first unrecovered error aborts the run; no
//! phase re-enters an earlier one, and `assemble()` consumes the builder so a
//! run's state can never leak into the next.

use std::path::PathBuf;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::AssemblyConfig;
use crate::content::registry::ContentSource;
use crate::content::resolver::{ContentResolver, ResolvedEntry};
use crate::content::{ContentMetadata, ContentRegistry, CssFormatter, HtmlTransform, MetadataSource};
use crate::error::BindError;
use crate::fetch::RetryingFetcher;
use crate::limiter::run_bounded;
use crate::style::{extract_styles, inline_imports};

/// Pipeline phases, entered strictly in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ResolvingUrls,
    ResolvingFiles,
    ResolvingStrings,
    Sorting,
    ResolvingStyle,
    Ready,
}

/// One entry of the final content list, ordered by declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContent {
    /// Declaration order; ascending in `AssembledBook::contents`
    pub sequence_id: u64,
    /// Final working markup
    pub markup: String,
    /// Static or computed metadata for this entry
    pub metadata: ContentMetadata,
}

/// The handoff to the packaging collaborator: ordered content plus the final
/// style string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledBook {
    pub contents: Vec<ResolvedContent>,
    pub css: Option<String>,
}

/// Multi-source document assembler.
///
/// ```no_run
/// use bookbinder::{AssemblyConfig, Bookbinder, ContentMetadata};
///
/// # async fn demo() -> Result<(), bookbinder::BindError> {
/// let config = AssemblyConfig::builder().concurrency(4).retries(2).build()?;
/// let mut book = Bookbinder::new(config);
/// book.url("https://example.com/ch1", ContentMetadata::titled("Chapter 1"), None)
///     .string("<p>interlude</p>", ContentMetadata::titled("Interlude"), None);
/// let assembled = book.assemble().await?;
/// # Ok(())
/// # }
/// ```
pub struct Bookbinder {
    config: AssemblyConfig,
    registry: ContentRegistry,
    css_formatter: Option<CssFormatter>,
}

impl Bookbinder {
    #[must_use]
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            config,
            registry: ContentRegistry::new(),
            css_formatter: None,
        }
    }

    /// Declare remote content fetched over HTTP(S)
    pub fn url(
        &mut self,
        url: impl Into<String>,
        metadata: impl Into<MetadataSource>,
        transform: Option<HtmlTransform>,
    ) -> &mut Self {
        self.registry
            .declare(ContentSource::Url(url.into()), metadata.into(), transform);
        self
    }

    /// Declare content read from a local file
    pub fn file(
        &mut self,
        path: impl Into<PathBuf>,
        metadata: impl Into<MetadataSource>,
        transform: Option<HtmlTransform>,
    ) -> &mut Self {
        self.registry
            .declare(ContentSource::File(path.into()), metadata.into(), transform);
        self
    }

    /// Declare literal markup passed through unchanged
    pub fn string(
        &mut self,
        markup: impl Into<String>,
        metadata: impl Into<MetadataSource>,
        transform: Option<HtmlTransform>,
    ) -> &mut Self {
        self.registry
            .declare(ContentSource::Inline(markup.into()), metadata.into(), transform);
        self
    }

    /// Install the style-transform hook. Without one, style resolution is
    /// skipped and the configured base style passes through unchanged.
    pub fn css(&mut self, formatter: CssFormatter) -> &mut Self {
        self.css_formatter = Some(formatter);
        self
    }

    /// Run the pipeline. Consumes the assembler; a run is single-use.
    pub async fn assemble(self) -> Result<AssembledBook, BindError> {
        let Self {
            config,
            registry,
            css_formatter,
        } = self;

        let fetcher = RetryingFetcher::new(config.verify_tls())?;
        let resolver = ContentResolver::new(fetcher.clone(), config.content_fetch_policy());
        let concurrency = config.concurrency();

        let mut urls = Vec::new();
        let mut files = Vec::new();
        let mut strings = Vec::new();
        for declaration in registry.take() {
            match declaration.source {
                ContentSource::Url(_) => urls.push(declaration),
                ContentSource::File(_) => files.push(declaration),
                ContentSource::Inline(_) => strings.push(declaration),
            }
        }

        debug!("pipeline phase: {:?}", Phase::ResolvingUrls);
        info!(
            "resolving {} url declaration(s), concurrency {concurrency}",
            urls.len()
        );
        let mut entries = run_bounded(urls, concurrency, |d| resolver.resolve(d)).await?;

        debug!("pipeline phase: {:?}", Phase::ResolvingFiles);
        entries.extend(run_bounded(files, concurrency, |d| resolver.resolve(d)).await?);

        debug!("pipeline phase: {:?}", Phase::ResolvingStrings);
        for declaration in strings {
            entries.push(resolver.resolve(declaration).await?);
        }

        debug!("pipeline phase: {:?}", Phase::Sorting);
        let mut resolved: Vec<ResolvedEntry> = entries.into_iter().flatten().collect();
        resolved.sort_by_key(|entry| entry.sequence_id);

        debug!("pipeline phase: {:?}", Phase::ResolvingStyle);
        let css = resolve_style(&config, css_formatter, &resolved, &fetcher).await?;

        debug!("pipeline phase: {:?}", Phase::Ready);
        let contents = resolved
            .into_iter()
            .map(|entry| ResolvedContent {
                sequence_id: entry.sequence_id,
                markup: entry.markup,
                metadata: entry.metadata,
            })
            .collect();

        Ok(AssembledBook { contents, css })
    }
}

/// Resolve the final style string.
///
/// The style source is the resolved entry with the smallest sequence id,
/// chosen after sorting so the outcome never depends on fetch completion
/// order. Extraction reads that entry's raw (pre-transform) markup.
async fn resolve_style(
    config: &AssemblyConfig,
    formatter: Option<CssFormatter>,
    resolved: &[ResolvedEntry],
    fetcher: &RetryingFetcher,
) -> Result<Option<String>, BindError> {
    let Some(formatter) = formatter else {
        return Ok(config.base_css().map(str::to_string));
    };

    let extracted = resolved
        .first()
        .and_then(|entry| extract_styles(&entry.raw_markup));

    let extracted = match extracted {
        Some(css) if config.resolve_css_imports() => {
            Some(inline_imports(&css, fetcher, &config.style_fetch_policy()).await?)
        }
        other => other,
    };

    let formatted = formatter(extracted.as_deref())?;
    Ok(Some(formatted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_declaration_set_assembles_to_an_empty_book() {
        let config = AssemblyConfig::builder().build().expect("valid config");
        let book = Bookbinder::new(config).assemble().await.expect("empty run");

        assert!(book.contents.is_empty());
        assert!(book.css.is_none());
    }

    #[tokio::test]
    async fn base_css_passes_through_without_a_formatter() {
        let config = AssemblyConfig::builder()
            .base_css("body { margin: 0; }")
            .build()
            .expect("valid config");
        let mut binder = Bookbinder::new(config);
        binder.string("<p>x</p>", ContentMetadata::titled("x"), None);

        let book = binder.assemble().await.expect("run succeeds");
        assert_eq!(book.css.as_deref(), Some("body { margin: 0; }"));
    }

    #[tokio::test]
    async fn formatter_receives_none_when_nothing_was_resolved() {
        let config = AssemblyConfig::builder().build().expect("valid config");
        let mut binder = Bookbinder::new(config);
        binder.css(Box::new(|css| {
            assert!(css.is_none());
            Ok("fallback".to_string())
        }));

        let book = binder.assemble().await.expect("run succeeds");
        assert_eq!(book.css.as_deref(), Some("fallback"));
    }
}
