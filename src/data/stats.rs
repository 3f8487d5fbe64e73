//! Derived launch statistics
//!
//! Pure functions over joined launch views. Statistics are recomputed from
//! the views handed in on every call and never persisted; nothing here holds
//! state. Output ordering is deterministic (sorted names, ordered maps).

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use tracing::debug;

use crate::data::{FrequencyStats, LaunchView, LaunchpadStats, RocketStats};

/// Computes per-rocket launch totals and success rates
///
/// Views are grouped by rocket identifier; a view whose rocket reference
/// never resolved is grouped under an empty name. Only `success == true`
/// counts as a success, so `success <= total` always holds and a group with
/// no launches cannot exist. The rate is `success / total * 100`, or 0.0
/// for an empty group.
pub fn rocket_success_rate(views: &[LaunchView]) -> Vec<RocketStats> {
    // id -> (name, total, success)
    let mut groups: HashMap<String, (String, u64, u64)> = HashMap::new();

    for view in views {
        let (id, name) = match &view.rocket {
            Some(rocket) => (rocket.id.clone(), rocket.name.clone()),
            None => (String::new(), String::new()),
        };
        let entry = groups.entry(id).or_insert((name, 0, 0));
        entry.1 += 1;
        if view.success == Some(true) {
            entry.2 += 1;
        }
    }

    let mut stats: Vec<RocketStats> = groups
        .into_values()
        .map(|(rocket_name, total, success)| {
            let success_rate = if total > 0 {
                (success as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            RocketStats {
                rocket_name,
                total,
                success,
                success_rate,
            }
        })
        .collect();
    stats.sort_by(|a, b| a.rocket_name.cmp(&b.rocket_name));
    debug!(rockets = stats.len(), "computed rocket success rates");
    stats
}

/// Counts launches per launch site
///
/// Views are grouped by resolved launchpad name; unresolved references are
/// grouped under an empty name.
pub fn launch_site_rate(views: &[LaunchView]) -> Vec<LaunchpadStats> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for view in views {
        let name = view
            .launchpad
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        *counts.entry(name).or_insert(0) += 1;
    }

    let stats: Vec<LaunchpadStats> = counts
        .into_iter()
        .map(|(launchpad_name, total)| LaunchpadStats {
            launchpad_name,
            total,
        })
        .collect();
    debug!(sites = stats.len(), "computed launch site counts");
    stats
}

/// Buckets launches by year and by year-month of their UTC launch date
pub fn launch_frequency(views: &[LaunchView]) -> FrequencyStats {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    let mut by_month: BTreeMap<String, u64> = BTreeMap::new();

    for view in views {
        let year = view.date_utc.year();
        *by_year.entry(year).or_insert(0) += 1;
        let month = format!("{}-{:02}", year, view.date_utc.month());
        *by_month.entry(month).or_insert(0) += 1;
    }

    debug!(
        years = by_year.len(),
        months = by_month.len(),
        "computed launch frequency"
    );
    FrequencyStats { by_year, by_month }
}
