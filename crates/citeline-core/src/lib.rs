//! Citeline Core - Common infrastructure for research-metadata clients
//!
//! This crate provides the shared blocking HTTP facade, the API error type,
//! and the logging/progress plumbing used by every source crate.

pub mod de;
pub mod error;
pub mod http;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use error::ApiError;
pub use http::{SHARED_RUNTIME, get_json, http_client, join_url};
pub use logging::{IndicatifLogger, Verbosity, init_logging};
pub use progress::{ProgressContext, SharedProgress};
