//! Pipeline configuration
//!
//! A run's configuration is immutable once built. The builder applies
//! defaults and validates the handful of constraints the pipeline relies on.

pub mod builder;
pub mod types;

pub use builder::AssemblyConfigBuilder;
pub use types::AssemblyConfig;
