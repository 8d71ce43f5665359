//! HTTP fetching with retry and skip-on-not-found policies
//!
//! The fetcher performs a single GET per declared resource, retrying with a
//! constant delay on transport errors and non-2xx statuses. An exhausted 404
//! can be downgraded to a skip instead of an error, independently for content
//! pages and style imports.

pub mod policy;
pub mod retry;

pub use policy::FetchPolicy;
pub use retry::{FetchOutcome, RetryingFetcher};
