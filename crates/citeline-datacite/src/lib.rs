//! Citeline DataCite - dataset search against the DataCite REST API
//!
//! Pages through `GET /dois` restricted to the `dataset` resource type and
//! flattens each hit into a [`DatasetRecord`].

pub mod client;
pub mod schema;

pub use client::{DEFAULT_BASE_URL, DataCiteClient};
pub use schema::DatasetRecord;
