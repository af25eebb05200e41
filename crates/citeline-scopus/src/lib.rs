//! Citeline Scopus - abstract enrichment via the Scopus Abstract Retrieval API

pub mod client;
pub mod schema;

pub use client::{DEFAULT_BASE_URL, ScopusClient};
pub use schema::{AbstractInfo, NOT_FOUND};
