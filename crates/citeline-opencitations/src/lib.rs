//! Citeline OpenCitations - citation counts and citing works
//!
//! Wraps the OpenCitations Index v1 `citation-count` and `citations`
//! operations. Both absorb failures: a failed count is 0, failed details
//! are an empty list.

pub mod citations;
pub mod client;
pub mod count;

pub use citations::CitationDetail;
pub use client::{DEFAULT_BASE_URL, OpenCitationsClient};
pub use count::{CountResponse, CountValue};
