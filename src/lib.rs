//! SpaceX launch data library
//!
//! This module exposes the cache, client, aggregation, pagination, and export
//! modules for use by the CLI binary and integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod logging;
pub mod paginate;
