//! Runtime settings for the launch tracker
//!
//! Settings are assembled from CLI flags and their environment-variable
//! fallbacks (see `cli::Cli`) and passed explicitly to the components that
//! need them. There is no global configuration state.

use std::path::PathBuf;

use clap::ValueEnum;

/// Default remote API base URL (SpaceX REST API v4)
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Default cache TTL in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// How rocket-name filters are compared against joined rocket names
///
/// Both comparisons are case-insensitive. `Contains` is the default and
/// matches substrings; `Exact` requires the whole name to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NameMatch {
    /// Substring match (default)
    Contains,
    /// Whole-name match
    Exact,
}

impl Default for NameMatch {
    fn default() -> Self {
        NameMatch::Contains
    }
}

impl NameMatch {
    /// Returns true if `candidate` satisfies the filter `needle` under this
    /// policy. Comparison is case-insensitive.
    pub fn matches(&self, needle: &str, candidate: &str) -> bool {
        let needle = needle.to_lowercase();
        let candidate = candidate.to_lowercase();
        match self {
            NameMatch::Contains => candidate.contains(&needle),
            NameMatch::Exact => candidate == needle,
        }
    }
}

/// Resolved runtime settings shared by the fetch client and filters
#[derive(Debug, Clone)]
pub struct Settings {
    /// Remote API base URL, without a trailing slash
    pub base_url: String,
    /// Cache directory override; `None` selects the XDG default
    pub cache_dir: Option<PathBuf>,
    /// Cache entry time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Whether caching is disabled entirely
    pub no_cache: bool,
    /// Rocket-name filter comparison policy
    pub rocket_match: NameMatch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            no_cache: false,
            rocket_match: NameMatch::default(),
        }
    }
}
