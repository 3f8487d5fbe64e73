//! Launch aggregation: concurrent fetch, identifier join, and filtering
//!
//! The three collections (launches, rockets, launchpads) are fetched
//! concurrently, indexed by identifier once, and joined into `LaunchView`
//! records. Filters compose conjunctively and the fetched order is preserved
//! unless a sort is requested. The join and filter steps are pure functions
//! over data handed to them; all state lives in the fetch client.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use tracing::{debug, info};

use crate::config::NameMatch;
use crate::data::{FetchError, Launch, LaunchApiClient, LaunchView, Launchpad, Rocket};

/// Sort keys for launch listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Sort by launch date
    Date,
    /// Sort by mission name
    Name,
}

/// Conjunctive filters applied to joined launch views
///
/// Every populated field must hold for a record to pass. Date bounds are
/// inclusive and compared in UTC. Name filters are case-insensitive; the
/// rocket comparison follows the configured `NameMatch` policy, launchpads
/// always match by substring. A launch whose reference did not resolve never
/// matches a name filter on that reference.
#[derive(Debug, Clone, Default)]
pub struct LaunchFilters {
    /// Inclusive lower bound on launch date
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on launch date
    pub end_date: Option<DateTime<Utc>>,
    /// Rocket name filter
    pub rocket: Option<String>,
    /// Tri-state success filter; `None` means no constraint
    pub success: Option<bool>,
    /// Launchpad name filter
    pub launchpad: Option<String>,
    /// Comparison policy for the rocket name filter
    pub rocket_match: NameMatch,
}

impl LaunchFilters {
    /// Returns true if the view satisfies every active filter
    fn matches(&self, view: &LaunchView) -> bool {
        if let Some(start) = self.start_date {
            if view.date_utc < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if view.date_utc > end {
                return false;
            }
        }
        if let Some(ref needle) = self.rocket {
            let hit = view
                .rocket
                .as_ref()
                .is_some_and(|r| self.rocket_match.matches(needle, &r.name));
            if !hit {
                return false;
            }
        }
        if let Some(wanted) = self.success {
            if view.success != Some(wanted) {
                return false;
            }
        }
        if let Some(ref needle) = self.launchpad {
            let hit = view
                .launchpad
                .as_ref()
                .is_some_and(|p| NameMatch::Contains.matches(needle, &p.name));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Joins launches with their rockets and launchpads by identifier
///
/// Each collection is indexed once; unresolved references become `None`.
pub fn join_views(
    launches: Vec<Launch>,
    rockets: Vec<Rocket>,
    launchpads: Vec<Launchpad>,
) -> Vec<LaunchView> {
    let rockets_by_id: HashMap<&str, &Rocket> =
        rockets.iter().map(|r| (r.id.as_str(), r)).collect();
    let launchpads_by_id: HashMap<&str, &Launchpad> =
        launchpads.iter().map(|p| (p.id.as_str(), p)).collect();

    launches
        .iter()
        .map(|launch| LaunchView {
            id: launch.id.clone(),
            name: launch.name.clone(),
            date_utc: launch.date_utc,
            success: launch.success,
            rocket: rockets_by_id.get(launch.rocket.as_str()).map(|r| (*r).clone()),
            launchpad: launchpads_by_id
                .get(launch.launchpad.as_str())
                .map(|p| (*p).clone()),
        })
        .collect()
}

/// Keeps only the views that satisfy all active filters, order preserved
pub fn apply_filters(views: Vec<LaunchView>, filters: &LaunchFilters) -> Vec<LaunchView> {
    views.into_iter().filter(|v| filters.matches(v)).collect()
}

/// Sorts views in place by the given key
pub fn sort_views(views: &mut [LaunchView], key: SortKey, descending: bool) {
    match key {
        SortKey::Date => views.sort_by_key(|v| v.date_utc),
        SortKey::Name => views.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
    if descending {
        views.reverse();
    }
}

/// Fetches the three collections concurrently, joins them, and filters
///
/// The fetches are independent until the join step, so they are issued
/// together. Any fetch failure fails the whole call.
pub async fn fetch_launch_views(
    client: &LaunchApiClient,
    filters: &LaunchFilters,
) -> Result<Vec<LaunchView>, FetchError> {
    let (launches, rockets, launchpads) = tokio::try_join!(
        client.get_launches(),
        client.get_rockets(),
        client.get_launchpads()
    )?;
    info!(
        launches = launches.len(),
        rockets = rockets.len(),
        launchpads = launchpads.len(),
        "fetched collections"
    );

    let views = join_views(launches, rockets, launchpads);
    let filtered = apply_filters(views, filters);
    debug!(kept = filtered.len(), "applied launch filters");
    Ok(filtered)
}
