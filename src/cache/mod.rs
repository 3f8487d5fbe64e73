//! Cache module for storing API responses to disk
//!
//! This module provides a cache manager that persists API responses to the
//! filesystem with configurable TTL (time-to-live) values. Expired entries
//! are indistinguishable from absent entries, and any backend failure is
//! absorbed as a miss so that a broken cache never breaks the read path.

mod manager;

pub use manager::CacheManager;
