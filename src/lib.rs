//! # Feishu Blog Core
//!
//! Serves a personal blog whose content lives in a Feishu bitable
//! (multi-dimensional table) instead of a local database. The core
//! acquires an app access token, fetches the table records, normalizes
//! them into display-ready shape, and memoizes the result in a TTL
//! cache so page loads do not hammer the upstream API.
//!
//! Modules:
//! - `config` — environment-backed settings and validation
//! - `upstream` — token acquisition and record fetching over HTTP
//! - `records` — display schema and raw-record normalization
//! - `cache` — TTL cache with injected clock
//! - `blog` — query facade used by the serving layer

pub mod blog;
pub mod cache;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod observability;
pub mod records;
pub mod server;
pub mod tests;
pub mod upstream;
pub mod utils;
