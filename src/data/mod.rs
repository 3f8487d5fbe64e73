//! Core data models for the launch tracker
//!
//! This module contains the raw records fetched from the remote API
//! (launches, rockets, launchpads), the joined launch view produced by the
//! aggregation step, and the derived statistics types.

pub mod client;
pub mod launches;
pub mod stats;

pub use client::{FetchError, LaunchApiClient};
pub use launches::{fetch_launch_views, LaunchFilters, SortKey};
pub use stats::{launch_frequency, launch_site_rate, rocket_success_rate};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A launch record as returned by the remote API
///
/// `rocket` and `launchpad` are identifier references into the rocket and
/// launchpad collections fetched alongside the launches. `success` is
/// tri-state: the API reports `null` for launches with no recorded outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launch {
    /// Unique launch identifier
    pub id: String,
    /// Mission name
    pub name: String,
    /// Launch date/time in UTC
    pub date_utc: DateTime<Utc>,
    /// Whether the launch succeeded, if known
    pub success: Option<bool>,
    /// Identifier of the rocket used
    pub rocket: String,
    /// Identifier of the launchpad used
    pub launchpad: String,
}

/// A rocket record as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    /// Unique rocket identifier
    pub id: String,
    /// Rocket name
    pub name: String,
}

/// A launchpad record as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launchpad {
    /// Unique launchpad identifier
    pub id: String,
    /// Launchpad name
    pub name: String,
}

/// A launch with its rocket and launchpad references resolved
///
/// Built by joining the three fetched collections by identifier. References
/// that do not resolve within the concurrently fetched collections are left
/// as `None`; an unresolved reference is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchView {
    /// Unique launch identifier
    pub id: String,
    /// Mission name
    pub name: String,
    /// Launch date/time in UTC
    pub date_utc: DateTime<Utc>,
    /// Whether the launch succeeded, if known
    pub success: Option<bool>,
    /// Resolved rocket, if the reference could be resolved
    pub rocket: Option<Rocket>,
    /// Resolved launchpad, if the reference could be resolved
    pub launchpad: Option<Launchpad>,
}

/// Per-rocket launch outcome statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketStats {
    /// Rocket name; empty when the rocket reference never resolved
    pub rocket_name: String,
    /// Total launches on this rocket
    pub total: u64,
    /// Launches with a recorded success
    pub success: u64,
    /// Percentage of successful launches, 0.0 when total is 0
    pub success_rate: f64,
}

/// Launch count for a single launch site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchpadStats {
    /// Launchpad name; empty when the launchpad reference never resolved
    pub launchpad_name: String,
    /// Total launches from this site
    pub total: u64,
}

/// Launch counts bucketed by year and by year-month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyStats {
    /// Launches per calendar year
    pub by_year: BTreeMap<i32, u64>,
    /// Launches per `YYYY-MM` month
    pub by_month: BTreeMap<String, u64>,
}
