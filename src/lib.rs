//! bookbinder - multi-source document assembly.
//!
//! Resolves an ordered set of content declarations — remote URLs, local
//! files, inline strings — into a single content list ready for downstream
//! packaging, fetching remote resources under bounded concurrency with
//! retry/backoff and selective skip-on-not-found policies.
//!
//! ## Pipeline
//!
//! 1. URL declarations resolve concurrently under the configured budget
//! 2. File declarations resolve as a second bounded batch
//! 3. Inline strings resolve sequentially
//! 4. Results are sorted back into declaration order
//! 5. Style is extracted from the first resolved entry, `@import` directives
//!    optionally inlined one level deep
//!
//! Output order depends only on declaration order, never on fetch completion
//! order or retry timing.
//!
//! ## Example
//!
//! ```no_run
//! use bookbinder::{AssemblyConfig, Bookbinder, ContentMetadata};
//!
//! # async fn demo() -> Result<(), bookbinder::BindError> {
//! let config = AssemblyConfig::builder()
//!     .concurrency(8)
//!     .retries(2)
//!     .skip_url_not_found(true)
//!     .build()?;
//!
//! let mut book = Bookbinder::new(config);
//! book.url("https://example.com/chapter-1", ContentMetadata::titled("Chapter 1"), None)
//!     .url("https://example.com/chapter-2", ContentMetadata::titled("Chapter 2"), None)
//!     .string("<p>The End</p>", ContentMetadata::titled("Colophon"), None);
//!
//! let assembled = book.assemble().await?;
//! // hand assembled.contents and assembled.css to the packager
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod limiter;
pub mod pipeline;
pub mod style;

pub use config::{AssemblyConfig, AssemblyConfigBuilder};
pub use content::{
    ContentMetadata, ContentRegistry, ContentSource, CssFormatter, HtmlTransform, MetadataFn,
    MetadataSource, TransformOutcome,
};
pub use error::BindError;
pub use fetch::{FetchOutcome, FetchPolicy, RetryingFetcher};
pub use limiter::run_bounded;
pub use pipeline::{AssembledBook, Bookbinder, ResolvedContent};
